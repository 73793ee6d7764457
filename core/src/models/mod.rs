// core/src/models/mod.rs

//! Data structures mirroring the documents owned by the remote API.
//!
//! The back office never persists anything itself; these are transient,
//! page-scoped copies decoded straight off the wire. Field names follow
//! the API exactly (`_id`, `createdAt`, `barcodeImage`, ...), and the
//! odd spellings the server stores (`purched`) are kept verbatim.

pub mod brand;
pub mod category;
pub mod order;
pub mod product;
pub mod stats;
pub mod supplier;
pub mod variant;

// Re-export the model structs for convenient access
pub use brand::Brand;
pub use category::Category;
pub use order::{
  CreateOrderItem, CreateOrderRequest, Order, OrderItem, OrderStatus, OrderType, PaymentMethod,
  ShippingAddress,
};
pub use product::{Product, ProductRef};
pub use stats::{DailySales, MonthReport, PurchedReport, StatusPercent, TodayReport, TopProduct};
pub use supplier::Supplier;
pub use variant::Variant;
