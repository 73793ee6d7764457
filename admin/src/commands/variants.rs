// admin/src/commands/variants.rs

use backoffice::forms::VariantDraft;
use backoffice::{ApiClient, ListQuery, Result};

use crate::cli::{ListArgs, VariantAction};
use crate::render;

pub async fn run(client: &ApiClient, action: VariantAction) -> Result<()> {
  match action {
    VariantAction::List(args) => list(client, args).await,
    VariantAction::Show { slug } => show(client, &slug).await,
    VariantAction::Add {
      name,
      price,
      stock,
      description,
      image,
    } => {
      let draft = VariantDraft {
        name,
        price,
        stock,
        description,
        image: Some(render::read_attachment(&image)?),
      };
      client.create_variant(draft).await?;
      render::success("Variant created");
      Ok(())
    }
    VariantAction::Update {
      id,
      name,
      price,
      stock,
      description,
      image,
    } => {
      let draft = VariantDraft {
        name,
        price,
        stock,
        description,
        image: image.as_deref().map(render::read_attachment).transpose()?,
      };
      client.update_variant(&id, draft).await?;
      render::success("Variant updated");
      Ok(())
    }
    VariantAction::Delete { id } => {
      client.delete_variant(&id).await?;
      render::success("Variant deleted");
      Ok(())
    }
  }
}

async fn list(client: &ApiClient, args: ListArgs) -> Result<()> {
  let variants = client.list_variants().await?;
  let mut query = ListQuery::default();
  query.set_filter(args.filter);
  query.set_rows_per_page(args.rows);
  query.set_page(args.page);

  let (visible, total) = query.apply(&variants);
  let rows: Vec<Vec<String>> = visible
    .iter()
    .map(|variant| {
      vec![
        variant.id.clone(),
        variant.name.clone(),
        render::money(variant.price),
        variant.stock.to_string(),
        variant.slug.clone(),
      ]
    })
    .collect();
  render::table(&["Id", "Name", "Price", "Stock", "Slug"], &rows);
  render::footer(query.page, rows.len(), total);
  Ok(())
}

async fn show(client: &ApiClient, slug: &str) -> Result<()> {
  let variant = client.get_variant_by_slug(slug).await?;
  println!("Name:        {}", variant.name);
  println!("Slug:        {}", variant.slug);
  println!("Price:       {}", render::money(variant.price));
  println!("Stock:       {}", variant.stock);
  println!("Image:       {}", variant.image);
  println!("Description: {}", variant.description);
  Ok(())
}
