// admin/src/commands/products.rs

use backoffice::forms::{keep_images, ProductDraft};
use backoffice::{ApiClient, ListQuery, Result};

use crate::cli::{ListArgs, ProductAction, ProductFormArgs};
use crate::render;

pub async fn run(client: &ApiClient, action: ProductAction) -> Result<()> {
  match action {
    ProductAction::List(args) => list(client, args).await,
    ProductAction::Show { barcode } => show(client, &barcode).await,
    ProductAction::Options => options(client).await,
    ProductAction::Add(form) => {
      let draft = draft_from_args(form)?;
      client.create_product(draft).await?;
      render::success("Product created");
      Ok(())
    }
    ProductAction::Update { id, form } => {
      let draft = draft_from_args(form)?;
      client.update_product(&id, draft).await?;
      render::success("Product updated");
      Ok(())
    }
    ProductAction::Delete { id } => {
      client.delete_product(&id).await?;
      render::success("Product deleted");
      Ok(())
    }
  }
}

fn draft_from_args(form: ProductFormArgs) -> Result<ProductDraft> {
  let files = form
    .images
    .iter()
    .map(|path| render::read_attachment(path))
    .collect::<Result<Vec<_>>>()?;
  let (images, skipped) = keep_images(files);
  if !skipped.is_empty() {
    render::warn(&format!("Skipped non-image files: {}", skipped.join(", ")));
  }
  Ok(ProductDraft {
    name: form.name,
    price: form.price,
    stock: form.stock,
    description: form.description,
    category: form.category,
    brand: form.brand,
    supplier: form.supplier,
    variants: form.variants,
    images,
  })
}

async fn list(client: &ApiClient, args: ListArgs) -> Result<()> {
  let products = client.list_products().await?;
  let mut query = ListQuery::default();
  query.set_filter(args.filter);
  query.set_rows_per_page(args.rows);
  query.set_page(args.page);

  let (visible, total) = query.apply(&products);
  let rows: Vec<Vec<String>> = visible
    .iter()
    .map(|product| {
      vec![
        product.id.clone(),
        product.name.clone(),
        render::money(product.price),
        product.stock.to_string(),
        product.barcode.clone(),
        product
          .category
          .as_ref()
          .map(|c| c.name.clone())
          .unwrap_or_default(),
      ]
    })
    .collect();
  render::table(&["Id", "Name", "Price", "Stock", "Barcode", "Category"], &rows);
  render::footer(query.page, rows.len(), total);
  Ok(())
}

async fn show(client: &ApiClient, barcode: &str) -> Result<()> {
  let product = client.get_product_by_barcode(barcode).await?;
  println!("Name:        {}", product.name);
  println!("Price:       {}", render::money(product.price));
  println!("Stock:       {}", product.stock);
  println!("Barcode:     {}", product.barcode);
  if let Some(brand) = &product.brand {
    println!("Brand:       {}", brand.name);
  }
  if let Some(category) = &product.category {
    println!("Category:    {}", category.name);
  }
  if let Some(supplier) = &product.supplier {
    println!("Supplier:    {}", supplier.name);
  }
  if !product.variants.is_empty() {
    let names: Vec<&str> = product.variants.iter().map(|v| v.name.as_str()).collect();
    println!("Variants:    {}", names.join(", "));
  }
  for image in &product.images {
    println!("Image:       {}", image);
  }
  println!("Description: {}", product.description);
  Ok(())
}

/// The add form fetched its four dropdowns in parallel; same here.
async fn options(client: &ApiClient) -> Result<()> {
  let (categories, brands, suppliers, variants) = futures_util::try_join!(
    client.list_categories(),
    client.list_brands(),
    client.list_suppliers(),
    client.list_variants(),
  )?;

  println!("Categories:");
  for category in &categories {
    println!("  {}  {}", category.id, category.name);
  }
  println!("Brands:");
  for brand in &brands {
    println!("  {}  {}", brand.id, brand.name);
  }
  println!("Suppliers:");
  for supplier in &suppliers {
    println!("  {}  {}", supplier.id, supplier.name);
  }
  println!("Variants:");
  for variant in &variants {
    println!("  {}  {}", variant.id, variant.name);
  }
  Ok(())
}
