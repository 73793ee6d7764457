// core/src/api/brands.rs

use reqwest::multipart::Form;
use reqwest::Method;

use super::{file_part, ApiClient};
use crate::error::{AdminError, Result};
use crate::forms::BrandDraft;
use crate::models::Brand;

impl ApiClient {
  pub async fn list_brands(&self) -> Result<Vec<Brand>> {
    self.get_enveloped("/brands", "brands").await
  }

  pub async fn get_brand_by_slug(&self, slug: &str) -> Result<Brand> {
    self
      .get_enveloped(&format!("/brands/slug/{}", slug), "brand")
      .await
  }

  /// `POST /brands/` with a multipart body (name, description, logo).
  pub async fn create_brand(&self, draft: BrandDraft) -> Result<()> {
    draft.validate()?;
    let logo = draft
      .logo
      .ok_or_else(|| AdminError::Validation("Missing required fields: logo".to_string()))?;
    let form = Form::new()
      .text("name", draft.name)
      .text("description", draft.description)
      .part("logo", file_part(logo)?);
    self
      .submit_multipart(Method::POST, "/brands/", form, "brand")
      .await
  }

  pub async fn delete_brand(&self, id: &str) -> Result<()> {
    self.delete(&format!("/brands/{}", id)).await
  }
}
