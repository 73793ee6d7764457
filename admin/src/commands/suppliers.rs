// admin/src/commands/suppliers.rs

use backoffice::forms::SupplierDraft;
use backoffice::{ApiClient, ListQuery, Result};

use crate::cli::{ListArgs, SupplierAction};
use crate::render;

pub async fn run(client: &ApiClient, action: SupplierAction) -> Result<()> {
  match action {
    SupplierAction::List(args) => list(client, args).await,
    SupplierAction::Show { slug } => show(client, &slug).await,
    SupplierAction::Add {
      name,
      contact,
      address,
    } => {
      let draft = SupplierDraft {
        name,
        contact,
        address,
      };
      client.create_supplier(draft).await?;
      render::success("Supplier created");
      Ok(())
    }
    SupplierAction::Update {
      id,
      name,
      contact,
      address,
    } => {
      let draft = SupplierDraft {
        name,
        contact,
        address,
      };
      client.update_supplier(&id, draft).await?;
      render::success("Supplier updated");
      Ok(())
    }
    SupplierAction::Delete { id } => {
      client.delete_supplier(&id).await?;
      render::success("Supplier deleted");
      Ok(())
    }
  }
}

async fn list(client: &ApiClient, args: ListArgs) -> Result<()> {
  let suppliers = client.list_suppliers().await?;
  let mut query = ListQuery::default();
  query.set_filter(args.filter);
  query.set_rows_per_page(args.rows);
  query.set_page(args.page);

  let (visible, total) = query.apply(&suppliers);
  let rows: Vec<Vec<String>> = visible
    .iter()
    .map(|supplier| {
      vec![
        supplier.id.clone(),
        supplier.name.clone(),
        supplier.contact.clone(),
        supplier.address.clone(),
      ]
    })
    .collect();
  render::table(&["Id", "Name", "Contact", "Address"], &rows);
  render::footer(query.page, rows.len(), total);
  Ok(())
}

async fn show(client: &ApiClient, slug: &str) -> Result<()> {
  let supplier = client.get_supplier_by_slug(slug).await?;
  println!("Name:    {}", supplier.name);
  println!("Slug:    {}", supplier.slug);
  println!("Contact: {}", supplier.contact);
  println!("Address: {}", supplier.address);
  Ok(())
}
