// core/src/listing.rs

//! Client-side list behavior shared by every list page: substring
//! filtering and page slicing. Only the orders list is paginated
//! server-side; everything else fetches the whole collection and works
//! on it locally.

use crate::models::{Brand, Category, Product, Supplier, Variant};

/// A record that can be searched in a list page filter box.
pub trait Listed {
  /// The keys the filter matches against (name, id, and for products
  /// the barcode). Matching is case-insensitive substring.
  fn search_keys(&self) -> Vec<&str>;
}

impl Listed for Brand {
  fn search_keys(&self) -> Vec<&str> {
    vec![&self.name, &self.id]
  }
}

impl Listed for Category {
  fn search_keys(&self) -> Vec<&str> {
    vec![&self.name, &self.id]
  }
}

impl Listed for Supplier {
  fn search_keys(&self) -> Vec<&str> {
    vec![&self.name, &self.id]
  }
}

impl Listed for Variant {
  fn search_keys(&self) -> Vec<&str> {
    vec![&self.name, &self.id]
  }
}

impl Listed for Product {
  fn search_keys(&self) -> Vec<&str> {
    vec![&self.name, &self.id, &self.barcode]
  }
}

/// Slice `rows` to the given page. Pages are zero-based; the last page
/// may be short, and a page past the end is simply empty.
pub fn paginate<T>(rows: &[T], page: usize, rows_per_page: usize) -> &[T] {
  let start = page.saturating_mul(rows_per_page).min(rows.len());
  let end = start.saturating_add(rows_per_page).min(rows.len());
  &rows[start..end]
}

/// Filter-box plus pagination state of a list page.
#[derive(Debug, Clone)]
pub struct ListQuery {
  pub filter: String,
  pub page: usize,
  pub rows_per_page: usize,
}

impl Default for ListQuery {
  fn default() -> Self {
    // The tables default to five rows per page.
    ListQuery {
      filter: String::new(),
      page: 0,
      rows_per_page: 5,
    }
  }
}

impl ListQuery {
  pub fn set_filter(&mut self, filter: impl Into<String>) {
    self.filter = filter.into();
  }

  pub fn set_page(&mut self, page: usize) {
    self.page = page;
  }

  /// Changing the page size jumps back to the first page, as the
  /// table component always did.
  pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
    self.rows_per_page = rows_per_page.max(1);
    self.page = 0;
  }

  /// Apply filter then pagination, returning the visible rows and the
  /// filtered total (for the "x of y" footer).
  pub fn apply<'a, T: Listed>(&self, items: &'a [T]) -> (Vec<&'a T>, usize) {
    let matched = filter(items, &self.filter);
    let total = matched.len();
    let start = self.page.saturating_mul(self.rows_per_page).min(total);
    let end = start.saturating_add(self.rows_per_page).min(total);
    (matched[start..end].to_vec(), total)
  }
}

/// Case-insensitive substring match over each record's search keys.
/// An empty query matches everything.
pub fn filter<'a, T: Listed>(items: &'a [T], query: &str) -> Vec<&'a T> {
  let needle = query.trim().to_lowercase();
  if needle.is_empty() {
    return items.iter().collect();
  }
  items
    .iter()
    .filter(|item| {
      item
        .search_keys()
        .iter()
        .any(|key| key.to_lowercase().contains(&needle))
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn brand(id: &str, name: &str) -> Brand {
    Brand {
      id: id.to_string(),
      name: name.to_string(),
      description: String::new(),
      logo: String::new(),
      slug: name.to_lowercase(),
    }
  }

  #[test]
  fn filter_is_case_insensitive_substring() {
    let brands = vec![brand("b1", "Acme"), brand("b2", "Umbrella"), brand("b3", "ACME Deluxe")];
    let hits = filter(&brands, "acme");
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|b| b.name.to_lowercase().contains("acme")));
  }

  #[test]
  fn filter_matches_on_id_too() {
    let brands = vec![brand("64fa01", "Acme"), brand("b2", "Umbrella")];
    let hits = filter(&brands, "64FA");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "64fa01");
  }

  #[test]
  fn empty_query_matches_everything() {
    let brands = vec![brand("b1", "Acme"), brand("b2", "Umbrella")];
    assert_eq!(filter(&brands, "   ").len(), 2);
  }

  #[test]
  fn paginate_respects_page_boundaries() {
    let rows: Vec<i32> = (0..12).collect();
    assert_eq!(paginate(&rows, 0, 5), &[0, 1, 2, 3, 4]);
    assert_eq!(paginate(&rows, 1, 5), &[5, 6, 7, 8, 9]);
    // Last page is short.
    assert_eq!(paginate(&rows, 2, 5), &[10, 11]);
    // Past the end is empty, not a panic.
    assert!(paginate(&rows, 3, 5).is_empty());
  }

  #[test]
  fn changing_rows_per_page_resets_to_first_page() {
    let mut query = ListQuery::default();
    query.set_page(3);
    query.set_rows_per_page(10);
    assert_eq!(query.page, 0);
    assert_eq!(query.rows_per_page, 10);
  }

  #[test]
  fn apply_combines_filter_and_slice() {
    let brands: Vec<Brand> = (0..8).map(|i| brand(&format!("id{}", i), &format!("Brand {}", i))).collect();
    let mut query = ListQuery::default();
    query.set_filter("brand");
    query.set_rows_per_page(3);
    query.set_page(2);
    let (visible, total) = query.apply(&brands);
    assert_eq!(total, 8);
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].name, "Brand 6");
  }
}
