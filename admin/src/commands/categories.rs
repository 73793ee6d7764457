// admin/src/commands/categories.rs

use backoffice::forms::CategoryDraft;
use backoffice::{ApiClient, ListQuery, Result};

use crate::cli::{CategoryAction, ListArgs};
use crate::render;

pub async fn run(client: &ApiClient, action: CategoryAction) -> Result<()> {
  match action {
    CategoryAction::List(args) => list(client, args).await,
    CategoryAction::Show { slug } => show(client, &slug).await,
    CategoryAction::Add {
      name,
      description,
      image,
    } => {
      let draft = CategoryDraft {
        name,
        description,
        image: Some(render::read_attachment(&image)?),
      };
      client.create_category(draft).await?;
      render::success("Category created");
      Ok(())
    }
    CategoryAction::Update {
      id,
      name,
      description,
      image,
    } => {
      let draft = CategoryDraft {
        name,
        description,
        image: image.as_deref().map(render::read_attachment).transpose()?,
      };
      client.update_category(&id, draft).await?;
      render::success("Category updated");
      Ok(())
    }
    CategoryAction::Delete { id } => {
      client.delete_category(&id).await?;
      render::success("Category deleted");
      Ok(())
    }
  }
}

async fn list(client: &ApiClient, args: ListArgs) -> Result<()> {
  let categories = client.list_categories().await?;
  let mut query = ListQuery::default();
  query.set_filter(args.filter);
  query.set_rows_per_page(args.rows);
  query.set_page(args.page);

  let (visible, total) = query.apply(&categories);
  let rows: Vec<Vec<String>> = visible
    .iter()
    .map(|category| {
      vec![
        category.id.clone(),
        category.name.clone(),
        category.slug.clone(),
      ]
    })
    .collect();
  render::table(&["Id", "Name", "Slug"], &rows);
  render::footer(query.page, rows.len(), total);
  Ok(())
}

async fn show(client: &ApiClient, slug: &str) -> Result<()> {
  let category = client.get_category_by_slug(slug).await?;
  println!("Name:        {}", category.name);
  println!("Slug:        {}", category.slug);
  println!("Image:       {}", category.image);
  println!("Description: {}", category.description);
  if let Some(created_at) = category.created_at {
    println!("Created:     {}", created_at);
  }
  Ok(())
}
