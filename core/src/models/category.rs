// core/src/models/category.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
  #[serde(rename = "_id")]
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub description: String,
  /// URL of the uploaded category image.
  #[serde(default)]
  pub image: String,
  pub slug: String,
  #[serde(rename = "createdAt", default)]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(rename = "updatedAt", default)]
  pub updated_at: Option<DateTime<Utc>>,
}
