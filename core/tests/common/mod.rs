// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use backoffice::checkout::CartProduct;
use backoffice::models::{OrderType, PaymentMethod, ShippingAddress};
use backoffice::CheckoutFlow;

// --- Fixture builders ---

pub fn product(id: &str, name: &str, price: f64, stock: i64) -> CartProduct {
  CartProduct {
    id: id.to_string(),
    name: name.to_string(),
    price,
    stock,
    barcode: format!("bc-{}", id),
  }
}

pub fn complete_address() -> ShippingAddress {
  ShippingAddress {
    recipient_name: "Alex Tran".to_string(),
    phone: "0900000001".to_string(),
    address: "12 Market St".to_string(),
  }
}

/// A store-pickup cash flow with one product in the cart, ready to submit.
pub fn cash_flow_with_item() -> CheckoutFlow {
  let mut flow = CheckoutFlow::new(OrderType::Store, PaymentMethod::Cash);
  flow.cart.add(product("p1", "Widget", 100_000.0, 10)).unwrap();
  flow
}

/// A delivery momo flow with one product and a complete address.
pub fn momo_delivery_flow() -> CheckoutFlow {
  let mut flow = CheckoutFlow::new(OrderType::Delivery, PaymentMethod::Momo);
  flow.cart.add(product("p1", "Widget", 100_000.0, 10)).unwrap();
  flow.shipping_address = Some(complete_address());
  flow
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
