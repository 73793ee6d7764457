// core/src/api/suppliers.rs

// Note the singular resource path: the remote API exposes `/supplier`
// while brands/categories/orders are plural. Kept as-is.

use super::ApiClient;
use crate::error::Result;
use crate::forms::SupplierDraft;
use crate::models::Supplier;

impl ApiClient {
  pub async fn list_suppliers(&self) -> Result<Vec<Supplier>> {
    self.get_enveloped("/supplier", "suppliers").await
  }

  pub async fn get_supplier(&self, id: &str) -> Result<Supplier> {
    self
      .get_enveloped(&format!("/supplier/{}", id), "supplier")
      .await
  }

  pub async fn get_supplier_by_slug(&self, slug: &str) -> Result<Supplier> {
    self
      .get_enveloped(&format!("/supplier/slug/{}", slug), "supplier")
      .await
  }

  /// The one resource submitted as plain JSON rather than multipart —
  /// suppliers carry no image.
  pub async fn create_supplier(&self, draft: SupplierDraft) -> Result<()> {
    draft.validate()?;
    self
      .send(self.http().post(self.url("/supplier/")).json(&draft))
      .await?;
    Ok(())
  }

  pub async fn update_supplier(&self, id: &str, draft: SupplierDraft) -> Result<()> {
    draft.validate()?;
    self
      .send(
        self
          .http()
          .put(self.url(&format!("/supplier/{}", id)))
          .json(&draft),
      )
      .await?;
    Ok(())
  }

  pub async fn delete_supplier(&self, id: &str) -> Result<()> {
    self.delete(&format!("/supplier/{}", id)).await
  }
}
