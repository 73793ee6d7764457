// core/src/api/variants.rs

use reqwest::multipart::Form;
use reqwest::Method;

use super::{file_part, ApiClient};
use crate::error::Result;
use crate::forms::VariantDraft;
use crate::models::Variant;

fn variant_form(draft: VariantDraft) -> Result<Form> {
  let mut form = Form::new()
    .text("name", draft.name)
    .text("price", draft.price.to_string())
    .text("stock", draft.stock.to_string())
    .text("description", draft.description);
  if let Some(image) = draft.image {
    form = form.part("image", file_part(image)?);
  }
  Ok(form)
}

impl ApiClient {
  pub async fn list_variants(&self) -> Result<Vec<Variant>> {
    self.get_enveloped("/variant", "variants").await
  }

  pub async fn get_variant(&self, id: &str) -> Result<Variant> {
    self
      .get_enveloped(&format!("/variant/{}", id), "variant")
      .await
  }

  pub async fn get_variant_by_slug(&self, slug: &str) -> Result<Variant> {
    self
      .get_enveloped(&format!("/variant/slug/{}", slug), "variant")
      .await
  }

  pub async fn create_variant(&self, draft: VariantDraft) -> Result<()> {
    draft.validate(true)?;
    let form = variant_form(draft)?;
    self
      .submit_multipart(Method::POST, "/variant", form, "variant")
      .await
  }

  pub async fn update_variant(&self, id: &str, draft: VariantDraft) -> Result<()> {
    draft.validate(false)?;
    let form = variant_form(draft)?;
    self
      .submit_multipart(Method::PUT, &format!("/variant/{}", id), form, "variant")
      .await
  }

  pub async fn delete_variant(&self, id: &str) -> Result<()> {
    self.delete(&format!("/variant/{}", id)).await
  }
}
