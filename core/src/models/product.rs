// core/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Brand, Category, Supplier, Variant};

/// Full product document as returned by `GET /product/` and the
/// detail endpoints. Category/brand/supplier come back populated
/// (embedded), not as bare ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
  #[serde(rename = "_id")]
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub price: f64,
  pub stock: i64,
  #[serde(default)]
  pub category: Option<Category>,
  #[serde(default)]
  pub brand: Option<Brand>,
  #[serde(default)]
  pub supplier: Option<Supplier>,
  #[serde(default)]
  pub variants: Vec<Variant>,
  #[serde(default)]
  pub images: Vec<String>,
  #[serde(default)]
  pub barcode: String,
  #[serde(rename = "barcodeImage", default)]
  pub barcode_image: String,
  #[serde(default)]
  pub slug: String,
  #[serde(rename = "createdAt", default)]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(rename = "updatedAt", default)]
  pub updated_at: Option<DateTime<Utc>>,
}

/// The thin product snapshot embedded in order line items. The server
/// may null it out when the product has been deleted since.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRef {
  #[serde(rename = "_id", default)]
  pub id: Option<String>,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub price: Option<f64>,
  #[serde(default)]
  pub images: Option<Vec<String>>,
}
