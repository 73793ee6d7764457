// core/src/models/variant.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
  #[serde(rename = "_id")]
  pub id: String,
  pub name: String,
  pub price: f64,
  pub stock: i64,
  #[serde(default)]
  pub description: String,
  /// URL of the uploaded variant image.
  #[serde(default)]
  pub image: String,
  pub slug: String,
}
