// core/src/api/categories.rs

use reqwest::multipart::Form;
use reqwest::Method;

use super::{file_part, ApiClient};
use crate::error::Result;
use crate::forms::CategoryDraft;
use crate::models::Category;

fn category_form(draft: CategoryDraft) -> Result<Form> {
  let mut form = Form::new()
    .text("name", draft.name)
    .text("description", draft.description);
  if let Some(image) = draft.image {
    form = form.part("image", file_part(image)?);
  }
  Ok(form)
}

impl ApiClient {
  pub async fn list_categories(&self) -> Result<Vec<Category>> {
    self.get_enveloped("/categories", "categories").await
  }

  pub async fn get_category(&self, id: &str) -> Result<Category> {
    self
      .get_enveloped(&format!("/categories/{}", id), "category")
      .await
  }

  pub async fn get_category_by_slug(&self, slug: &str) -> Result<Category> {
    self
      .get_enveloped(&format!("/categories/slug/{}", slug), "category")
      .await
  }

  pub async fn create_category(&self, draft: CategoryDraft) -> Result<()> {
    draft.validate(true)?;
    let form = category_form(draft)?;
    self
      .submit_multipart(Method::POST, "/categories/", form, "category")
      .await
  }

  /// Edit keeps the existing image when none is attached.
  pub async fn update_category(&self, id: &str, draft: CategoryDraft) -> Result<()> {
    draft.validate(false)?;
    let form = category_form(draft)?;
    self
      .submit_multipart(Method::PUT, &format!("/categories/{}", id), form, "category")
      .await
  }

  pub async fn delete_category(&self, id: &str) -> Result<()> {
    self.delete(&format!("/categories/{}", id)).await
  }
}
