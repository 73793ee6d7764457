// core/src/forms.rs

//! Form drafts for the add/edit pages: required-field validation that
//! blocks submission, and packaging of image uploads.
//!
//! Validation mirrors the original forms exactly: a mandated field is
//! "missing" when blank (whitespace counts as blank), and the error
//! names every offender at once rather than stopping at the first.

use serde::Serialize;

use crate::error::{AdminError, Result};

/// An in-memory file attachment destined for a multipart part.
#[derive(Debug, Clone)]
pub struct Attachment {
  pub file_name: String,
  pub bytes: Vec<u8>,
  pub mime: String,
}

impl Attachment {
  pub fn new(file_name: impl Into<String>, bytes: Vec<u8>, mime: impl Into<String>) -> Self {
    Attachment {
      file_name: file_name.into(),
      bytes,
      mime: mime.into(),
    }
  }

  pub fn is_image(&self) -> bool {
    self.mime.starts_with("image/")
  }
}

/// Keep only image attachments, returning the names of the files that
/// were dropped so the caller can warn about them (the upload widget
/// silently skipped non-images with a toast).
pub fn keep_images(files: Vec<Attachment>) -> (Vec<Attachment>, Vec<String>) {
  let mut images = Vec::with_capacity(files.len());
  let mut skipped = Vec::new();
  for file in files {
    if file.is_image() {
      images.push(file);
    } else {
      tracing::warn!(file = %file.file_name, mime = %file.mime, "Skipping non-image attachment.");
      skipped.push(file.file_name);
    }
  }
  (images, skipped)
}

/// Fails with a `Validation` error naming every blank field.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<()> {
  let missing: Vec<&str> = fields
    .iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| *name)
    .collect();
  if missing.is_empty() {
    Ok(())
  } else {
    Err(AdminError::Validation(format!(
      "Missing required fields: {}",
      missing.join(", ")
    )))
  }
}

// --- Per-page drafts ---

/// Brand add form: name, description and a logo image are all
/// mandatory.
#[derive(Debug, Clone, Default)]
pub struct BrandDraft {
  pub name: String,
  pub description: String,
  pub logo: Option<Attachment>,
}

impl BrandDraft {
  pub fn validate(&self) -> Result<()> {
    require_fields(&[("name", &self.name), ("description", &self.description)])?;
    match &self.logo {
      Some(logo) if logo.is_image() => Ok(()),
      Some(_) => Err(AdminError::Validation("logo must be an image file".to_string())),
      None => Err(AdminError::Validation("Missing required fields: logo".to_string())),
    }
  }
}

/// Category add/edit form. On edit the image may be left out to keep
/// the existing one.
#[derive(Debug, Clone, Default)]
pub struct CategoryDraft {
  pub name: String,
  pub description: String,
  pub image: Option<Attachment>,
}

impl CategoryDraft {
  pub fn validate(&self, image_required: bool) -> Result<()> {
    require_fields(&[("name", &self.name), ("description", &self.description)])?;
    match &self.image {
      Some(image) if image.is_image() => Ok(()),
      Some(_) => Err(AdminError::Validation("image must be an image file".to_string())),
      None if image_required => {
        Err(AdminError::Validation("Missing required fields: image".to_string()))
      }
      None => Ok(()),
    }
  }
}

/// Supplier form; the only page that submits plain JSON.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SupplierDraft {
  pub name: String,
  pub contact: String,
  pub address: String,
}

impl SupplierDraft {
  pub fn validate(&self) -> Result<()> {
    require_fields(&[
      ("name", &self.name),
      ("contact", &self.contact),
      ("address", &self.address),
    ])
  }
}

#[derive(Debug, Clone, Default)]
pub struct VariantDraft {
  pub name: String,
  pub price: f64,
  pub stock: i64,
  pub description: String,
  pub image: Option<Attachment>,
}

impl VariantDraft {
  pub fn validate(&self, image_required: bool) -> Result<()> {
    require_fields(&[("name", &self.name), ("description", &self.description)])?;
    match &self.image {
      Some(image) if image.is_image() => Ok(()),
      Some(_) => Err(AdminError::Validation("image must be an image file".to_string())),
      None if image_required => {
        Err(AdminError::Validation("Missing required fields: image".to_string()))
      }
      None => Ok(()),
    }
  }
}

/// Product add/edit form. Category, brand and supplier are bare ids;
/// variants is a list of variant ids; at least one image is mandatory
/// on add.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
  pub name: String,
  pub price: f64,
  pub stock: i64,
  pub description: String,
  pub category: String,
  pub brand: String,
  pub supplier: String,
  pub variants: Vec<String>,
  pub images: Vec<Attachment>,
}

impl ProductDraft {
  pub fn validate(&self, images_required: bool) -> Result<()> {
    require_fields(&[
      ("name", &self.name),
      ("description", &self.description),
      ("category", &self.category),
      ("brand", &self.brand),
      ("supplier", &self.supplier),
    ])?;
    if images_required && self.images.is_empty() {
      return Err(AdminError::Validation(
        "Missing required fields: images (select at least one image)".to_string(),
      ));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn png(name: &str) -> Attachment {
    Attachment::new(name, vec![0x89, 0x50, 0x4e, 0x47], "image/png")
  }

  #[test]
  fn require_fields_names_every_blank_field() {
    let err = require_fields(&[("name", "  "), ("contact", "x"), ("address", "")]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("name"));
    assert!(message.contains("address"));
    assert!(!message.contains("contact"));
  }

  #[test]
  fn brand_draft_requires_logo() {
    let draft = BrandDraft {
      name: "Acme".to_string(),
      description: "Tools".to_string(),
      logo: None,
    };
    assert!(draft.validate().is_err());

    let draft = BrandDraft {
      logo: Some(png("logo.png")),
      ..draft
    };
    assert!(draft.validate().is_ok());
  }

  #[test]
  fn non_image_logo_is_rejected() {
    let draft = BrandDraft {
      name: "Acme".to_string(),
      description: "Tools".to_string(),
      logo: Some(Attachment::new("notes.pdf", vec![1, 2], "application/pdf")),
    };
    assert!(draft.validate().is_err());
  }

  #[test]
  fn variant_draft_rejects_non_image_attachment() {
    let draft = VariantDraft {
      name: "1kg".to_string(),
      description: "Bag of one kilo".to_string(),
      image: Some(Attachment::new("notes.pdf", vec![1, 2], "application/pdf")),
      ..Default::default()
    };
    assert!(draft.validate(true).is_err());
    // Even on edit, where the image is optional, a wrong file type
    // must not slip through.
    assert!(draft.validate(false).is_err());

    let draft = VariantDraft {
      image: Some(png("1kg.png")),
      ..draft
    };
    assert!(draft.validate(true).is_ok());
  }

  #[test]
  fn product_draft_blocks_submission_without_images_on_add() {
    let draft = ProductDraft {
      name: "Widget".to_string(),
      description: "A widget".to_string(),
      category: "c1".to_string(),
      brand: "b1".to_string(),
      supplier: "s1".to_string(),
      ..Default::default()
    };
    assert!(draft.validate(true).is_err());
    // Editing keeps existing images, so none are required.
    assert!(draft.validate(false).is_ok());
  }

  #[test]
  fn keep_images_drops_non_images_and_reports_them() {
    let files = vec![
      png("a.png"),
      Attachment::new("b.txt", vec![1], "text/plain"),
      png("c.jpg"),
    ];
    let (images, skipped) = keep_images(files);
    assert_eq!(images.len(), 2);
    assert_eq!(skipped, vec!["b.txt".to_string()]);
  }
}
