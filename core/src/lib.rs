// src/lib.rs

//! Backoffice: a typed client and page-state toolkit for a retail
//! admin dashboard sitting over a remote REST API.
//!
//! The crate mirrors the screens of the back office:
//!  - Catalog resources (brands, categories, suppliers, variants,
//!    products) with list / get-by-slug / create / update / delete.
//!  - Orders, including server-side paginated listing, status updates
//!    and the staged QR checkout flow.
//!  - Dashboard statistics (daily and monthly sales reports).
//!
//! Everything network-facing lives in [`api::ApiClient`]. The page
//! behaviors that do not need the network are plain synchronous state:
//! [`listing`] for client-side filtering and pagination, [`forms`] for
//! required-field validation and upload packaging, and [`checkout`]
//! for the cart plus the init → qr_displayed → order_created payment
//! progression.

pub mod api;
pub mod checkout;
pub mod error;
pub mod forms;
pub mod listing;
pub mod models;
pub mod session;

// --- Re-exports for the Public API ---

pub use crate::api::ApiClient;
pub use crate::checkout::{Cart, CartUpdate, CheckoutFlow, PaymentStage, QuantityOutcome};
pub use crate::error::{AdminError, Result};
pub use crate::listing::{paginate, ListQuery, Listed};
pub use crate::session::Session;
