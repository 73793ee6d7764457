// core/src/models/brand.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
  #[serde(rename = "_id")]
  pub id: String,
  pub name: String,
  /// Rich text, or a base64-encoded image the old editor pasted inline.
  #[serde(default)]
  pub description: String,
  /// URL of the uploaded logo.
  #[serde(default)]
  pub logo: String,
  pub slug: String,
}
