// admin/src/cli.rs

//! Command tree: one subcommand per dashboard page.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "backoffice-admin", version, about = "Retail back-office admin console")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Sign in and store the session tokens.
  Login {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
  },
  /// Drop the stored access token.
  Logout,
  /// Show the signed-in user.
  Whoami,

  /// Brand pages.
  Brand {
    #[command(subcommand)]
    action: BrandAction,
  },
  /// Category pages.
  Category {
    #[command(subcommand)]
    action: CategoryAction,
  },
  /// Supplier pages.
  Supplier {
    #[command(subcommand)]
    action: SupplierAction,
  },
  /// Variant pages.
  Variant {
    #[command(subcommand)]
    action: VariantAction,
  },
  /// Product pages.
  Product {
    #[command(subcommand)]
    action: ProductAction,
  },
  /// Order pages, including checkout.
  Order {
    #[command(subcommand)]
    action: OrderAction,
  },
  /// The overview page: sales reports and status breakdown.
  Dashboard {
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    month: Option<u32>,
  },
}

/// Filter box + pagination flags shared by the client-side lists.
#[derive(Debug, Args)]
pub struct ListArgs {
  /// Case-insensitive substring filter on name/id.
  #[arg(long, default_value = "")]
  pub filter: String,
  /// Zero-based page.
  #[arg(long, default_value_t = 0)]
  pub page: usize,
  #[arg(long, default_value_t = 5)]
  pub rows: usize,
}

#[derive(Debug, Subcommand)]
pub enum BrandAction {
  List(ListArgs),
  /// Show one brand by slug.
  Show { slug: String },
  Add {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    /// Path to the logo image.
    #[arg(long)]
    logo: PathBuf,
  },
  Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum CategoryAction {
  List(ListArgs),
  Show { slug: String },
  Add {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    image: PathBuf,
  },
  Update {
    id: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    /// Optional replacement image; omitted keeps the current one.
    #[arg(long)]
    image: Option<PathBuf>,
  },
  Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum SupplierAction {
  List(ListArgs),
  Show { slug: String },
  Add {
    #[arg(long)]
    name: String,
    #[arg(long)]
    contact: String,
    #[arg(long)]
    address: String,
  },
  Update {
    id: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    contact: String,
    #[arg(long)]
    address: String,
  },
  Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum VariantAction {
  List(ListArgs),
  Show { slug: String },
  Add {
    #[arg(long)]
    name: String,
    #[arg(long, default_value_t = 0.0)]
    price: f64,
    #[arg(long, default_value_t = 0)]
    stock: i64,
    #[arg(long)]
    description: String,
    #[arg(long)]
    image: PathBuf,
  },
  Update {
    id: String,
    #[arg(long)]
    name: String,
    #[arg(long, default_value_t = 0.0)]
    price: f64,
    #[arg(long, default_value_t = 0)]
    stock: i64,
    #[arg(long)]
    description: String,
    #[arg(long)]
    image: Option<PathBuf>,
  },
  Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ProductAction {
  List(ListArgs),
  /// Show one product by barcode.
  Show { barcode: String },
  /// List the pickable categories, brands, suppliers and variants
  /// (the data the add form's dropdowns were fed with).
  Options,
  Add(ProductFormArgs),
  Update {
    id: String,
    #[command(flatten)]
    form: ProductFormArgs,
  },
  Delete { id: String },
}

#[derive(Debug, Args)]
pub struct ProductFormArgs {
  #[arg(long)]
  pub name: String,
  #[arg(long, default_value_t = 0.0)]
  pub price: f64,
  #[arg(long, default_value_t = 0)]
  pub stock: i64,
  #[arg(long)]
  pub description: String,
  /// Category id.
  #[arg(long)]
  pub category: String,
  /// Brand id.
  #[arg(long)]
  pub brand: String,
  /// Supplier id.
  #[arg(long)]
  pub supplier: String,
  /// Variant ids, repeatable.
  #[arg(long = "variant")]
  pub variants: Vec<String>,
  /// Image paths, repeatable. Non-image files are skipped with a warning.
  #[arg(long = "image")]
  pub images: Vec<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum OrderAction {
  /// Server-side paginated list.
  List {
    #[arg(long, default_value_t = 0)]
    page: usize,
    #[arg(long, default_value_t = 5)]
    rows: usize,
    #[arg(long, default_value = "")]
    search: String,
  },
  Show { id: String },
  /// The order-add page: cart assembly plus the payment flow.
  Create {
    /// `store` or `delivery`.
    #[arg(long = "type", default_value = "store")]
    order_type: String,
    /// `cash`, `momo` or `card`. Non-cash runs the QR flow.
    #[arg(long, default_value = "cash")]
    payment: String,
    /// Cart lines as `<product-id>=<quantity>`, repeatable.
    #[arg(long = "item", required = true)]
    items: Vec<String>,
    #[arg(long, default_value = "")]
    note: String,
    #[arg(long)]
    recipient: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    address: Option<String>,
    /// Confirm the QR payment without prompting.
    #[arg(long, default_value_t = false)]
    yes: bool,
  },
  SetStatus { id: String, status: String },
  Delete { id: String },
}
