// admin/src/commands/brands.rs

use backoffice::forms::BrandDraft;
use backoffice::{ApiClient, ListQuery, Result};

use crate::cli::{BrandAction, ListArgs};
use crate::render;

pub async fn run(client: &ApiClient, action: BrandAction) -> Result<()> {
  match action {
    BrandAction::List(args) => list(client, args).await,
    BrandAction::Show { slug } => show(client, &slug).await,
    BrandAction::Add {
      name,
      description,
      logo,
    } => {
      let draft = BrandDraft {
        name,
        description,
        logo: Some(render::read_attachment(&logo)?),
      };
      client.create_brand(draft).await?;
      render::success("Brand created");
      Ok(())
    }
    BrandAction::Delete { id } => {
      client.delete_brand(&id).await?;
      render::success("Brand deleted");
      Ok(())
    }
  }
}

async fn list(client: &ApiClient, args: ListArgs) -> Result<()> {
  let brands = client.list_brands().await?;
  let mut query = ListQuery::default();
  query.set_filter(args.filter);
  query.set_rows_per_page(args.rows);
  query.set_page(args.page);

  let (visible, total) = query.apply(&brands);
  let rows: Vec<Vec<String>> = visible
    .iter()
    .map(|brand| {
      vec![
        brand.id.clone(),
        brand.name.clone(),
        brand.slug.clone(),
        brand.logo.clone(),
      ]
    })
    .collect();
  render::table(&["Id", "Name", "Slug", "Logo"], &rows);
  render::footer(query.page, rows.len(), total);
  Ok(())
}

async fn show(client: &ApiClient, slug: &str) -> Result<()> {
  let brand = client.get_brand_by_slug(slug).await?;
  println!("Name:        {}", brand.name);
  println!("Slug:        {}", brand.slug);
  println!("Logo:        {}", brand.logo);
  println!("Description: {}", brand.description);
  Ok(())
}
