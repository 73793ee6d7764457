// admin/src/render.rs

//! Plain text rendering: aligned tables for the list pages and the
//! one-line notifications that stand in for toasts.

use std::path::Path;

use backoffice::forms::Attachment;
use backoffice::{AdminError, Result};

/// Print an aligned text table. Column widths fit the widest cell.
pub fn table(headers: &[&str], rows: &[Vec<String>]) {
  let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
  for row in rows {
    for (i, cell) in row.iter().enumerate() {
      if i < widths.len() {
        widths[i] = widths[i].max(cell.len());
      }
    }
  }

  let header_line: Vec<String> = headers
    .iter()
    .enumerate()
    .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
    .collect();
  println!("{}", header_line.join("  "));
  println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));

  for row in rows {
    let line: Vec<String> = row
      .iter()
      .enumerate()
      .map(|(i, cell)| format!("{:<width$}", cell, width = widths.get(i).copied().unwrap_or(0)))
      .collect();
    println!("{}", line.join("  "));
  }
}

/// The "x–y of z" footer under every table.
pub fn footer(page: usize, shown: usize, total: usize) {
  println!("(page {}, showing {} of {})", page, shown, total);
}

pub fn success(message: &str) {
  println!("✔ {}", message);
}

pub fn warn(message: &str) {
  println!("⚠ {}", message);
}

/// Amounts come off the wire as plain numbers; render without decimals
/// unless there are cents.
pub fn money(amount: f64) -> String {
  if amount.fract() == 0.0 {
    format!("{}", amount as i64)
  } else {
    format!("{:.2}", amount)
  }
}

/// Read a file into an upload attachment, guessing the mime type from
/// the extension.
pub fn read_attachment(path: &Path) -> Result<Attachment> {
  let bytes = std::fs::read(path)?;
  let file_name = path
    .file_name()
    .and_then(|name| name.to_str())
    .map(str::to_string)
    .ok_or_else(|| AdminError::Validation(format!("Invalid file path: {}", path.display())))?;
  let mime = guess_mime(&file_name);
  Ok(Attachment::new(file_name, bytes, mime))
}

fn guess_mime(file_name: &str) -> String {
  let extension = file_name.rsplit('.').next().unwrap_or("").to_lowercase();
  match extension.as_str() {
    "png" => "image/png",
    "jpg" | "jpeg" => "image/jpeg",
    "gif" => "image/gif",
    "webp" => "image/webp",
    "svg" => "image/svg+xml",
    _ => "application/octet-stream",
  }
  .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn money_renders_whole_amounts_without_decimals() {
    assert_eq!(money(250000.0), "250000");
    assert_eq!(money(99.5), "99.50");
  }

  #[test]
  fn mime_guess_covers_the_usual_image_types() {
    assert_eq!(guess_mime("logo.PNG"), "image/png");
    assert_eq!(guess_mime("photo.jpeg"), "image/jpeg");
    assert_eq!(guess_mime("notes.pdf"), "application/octet-stream");
  }
}
