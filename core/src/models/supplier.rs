// core/src/models/supplier.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
  #[serde(rename = "_id")]
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub contact: String,
  #[serde(default)]
  pub address: String,
  pub slug: String,
}
