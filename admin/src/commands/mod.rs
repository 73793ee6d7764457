// admin/src/commands/mod.rs

//! One module per dashboard page.

pub mod auth;
pub mod brands;
pub mod categories;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod suppliers;
pub mod variants;
