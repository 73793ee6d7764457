// core/src/api/products.rs

use reqwest::multipart::Form;
use reqwest::Method;

use super::{file_part, ApiClient};
use crate::error::Result;
use crate::forms::ProductDraft;
use crate::models::Product;

/// Multipart body for product create/update. Variant ids repeat under
/// `variants[]` and every image repeats under `images`, matching what
/// the form serializer sent.
fn product_form(draft: ProductDraft) -> Result<Form> {
  let mut form = Form::new()
    .text("name", draft.name)
    .text("price", draft.price.to_string())
    .text("stock", draft.stock.to_string())
    .text("description", draft.description)
    .text("category", draft.category)
    .text("brand", draft.brand)
    .text("supplier", draft.supplier);
  for variant_id in draft.variants {
    form = form.text("variants[]", variant_id);
  }
  for image in draft.images {
    form = form.part("images", file_part(image)?);
  }
  Ok(form)
}

impl ApiClient {
  pub async fn list_products(&self) -> Result<Vec<Product>> {
    self.get_enveloped("/product/", "products").await
  }

  pub async fn get_product(&self, id: &str) -> Result<Product> {
    self
      .get_enveloped(&format!("/product/{}", id), "product")
      .await
  }

  /// Product detail pages look records up by barcode, not slug.
  pub async fn get_product_by_barcode(&self, barcode: &str) -> Result<Product> {
    self
      .get_enveloped(&format!("/product/barcode/{}", barcode), "product")
      .await
  }

  pub async fn create_product(&self, draft: ProductDraft) -> Result<()> {
    draft.validate(true)?;
    let form = product_form(draft)?;
    self
      .submit_multipart(Method::POST, "/product", form, "product")
      .await
  }

  pub async fn update_product(&self, id: &str, draft: ProductDraft) -> Result<()> {
    draft.validate(false)?;
    let form = product_form(draft)?;
    self
      .submit_multipart(Method::PUT, &format!("/product/{}", id), form, "product")
      .await
  }

  pub async fn delete_product(&self, id: &str) -> Result<()> {
    self.delete(&format!("/product/{}", id)).await
  }
}
