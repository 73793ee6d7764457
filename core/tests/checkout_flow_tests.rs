// tests/checkout_flow_tests.rs
mod common;

use common::*;

use backoffice::checkout::{CartUpdate, PaymentStage, QuantityOutcome};
use backoffice::models::{OrderType, PaymentMethod};
use backoffice::{AdminError, Cart, CheckoutFlow};

// --- Cart behavior ---

#[test]
fn adding_same_product_increments_up_to_stock() {
  setup_tracing();
  let mut cart = Cart::new();
  let widget = product("p1", "Widget", 50.0, 2);

  assert_eq!(cart.add(widget.clone()).unwrap(), CartUpdate::Added);
  assert_eq!(cart.add(widget.clone()).unwrap(), CartUpdate::Incremented);
  // Third add would exceed the stock of 2.
  assert_eq!(cart.add(widget).unwrap(), CartUpdate::AtStockLimit);
  assert_eq!(cart.lines()[0].quantity, 2);
}

#[test]
fn out_of_stock_product_cannot_be_added() {
  let mut cart = Cart::new();
  let gone = product("p2", "Sold Out", 10.0, 0);
  assert!(matches!(cart.add(gone), Err(AdminError::Validation(_))));
  assert!(cart.is_empty());
}

#[test]
fn set_quantity_clamps_to_stock_and_reports_it() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(product("p1", "Widget", 50.0, 8)).unwrap();

  assert_eq!(cart.set_quantity("p1", 5).unwrap(), QuantityOutcome::Set(5));
  assert_eq!(cart.set_quantity("p1", 99).unwrap(), QuantityOutcome::Clamped(8));
  assert_eq!(cart.lines()[0].quantity, 8);
}

#[test]
fn quantity_below_one_is_ignored() {
  let mut cart = Cart::new();
  cart.add(product("p1", "Widget", 50.0, 8)).unwrap();
  assert_eq!(cart.set_quantity("p1", 0).unwrap(), QuantityOutcome::Ignored);
  assert_eq!(cart.lines()[0].quantity, 1);
}

#[test]
fn set_quantity_on_unknown_product_is_not_found() {
  let mut cart = Cart::new();
  assert!(matches!(
    cart.set_quantity("ghost", 3),
    Err(AdminError::NotFound(_))
  ));
}

#[test]
fn total_is_sum_of_price_times_quantity() {
  let mut cart = Cart::new();
  cart.add(product("p1", "Widget", 100_000.0, 10)).unwrap();
  cart.add(product("p2", "Gadget", 250_000.0, 10)).unwrap();
  cart.set_quantity("p1", 3).unwrap();
  cart.set_quantity("p2", 2).unwrap();
  assert_eq!(cart.total(), 3.0 * 100_000.0 + 2.0 * 250_000.0);
}

#[test]
fn remove_drops_the_line() {
  let mut cart = Cart::new();
  cart.add(product("p1", "Widget", 100.0, 5)).unwrap();
  cart.add(product("p2", "Gadget", 200.0, 5)).unwrap();
  cart.remove("p1");
  assert_eq!(cart.lines().len(), 1);
  assert_eq!(cart.lines()[0].product.id, "p2");
}

// --- Staged payment flow ---

#[test]
fn cash_creates_directly_from_init() {
  setup_tracing();
  let mut flow = cash_flow_with_item();
  assert_eq!(flow.stage(), PaymentStage::Init);

  let request = flow.begin_create().expect("cash create from init");
  assert_eq!(request.payment_method, PaymentMethod::Cash);
  flow.order_created();
  assert_eq!(flow.stage(), PaymentStage::OrderCreated);
  assert!(flow.cart.is_empty());
}

#[test]
fn non_cash_must_pass_through_qr_stage() {
  setup_tracing();
  let mut flow = momo_delivery_flow();

  // Creating straight away skips the QR stage and is refused.
  assert!(matches!(flow.begin_create(), Err(AdminError::Checkout(_))));

  let qr_request = flow.begin_qr().expect("qr from init");
  // The QR payload carries the recipient fields at the top level.
  assert_eq!(qr_request.recipient_name.as_deref(), Some("Alex Tran"));
  assert_eq!(qr_request.phone.as_deref(), Some("0900000001"));

  flow.qr_displayed("https://pay.example/qr/abc".to_string()).unwrap();
  assert_eq!(flow.stage(), PaymentStage::QrDisplayed);
  assert_eq!(flow.qr_code_url(), Some("https://pay.example/qr/abc"));

  let create_request = flow.begin_create().expect("create after qr");
  assert_eq!(create_request.items.len(), 1);
  flow.order_created();
  assert_eq!(flow.stage(), PaymentStage::OrderCreated);
  assert!(flow.qr_code_url().is_none());
}

#[test]
fn qr_step_cannot_run_twice() {
  let mut flow = momo_delivery_flow();
  flow.begin_qr().unwrap();
  flow.qr_displayed("url".to_string()).unwrap();
  assert!(matches!(flow.begin_qr(), Err(AdminError::Checkout(_))));
  assert!(flow.qr_displayed("again".to_string()).is_err());
}

#[test]
fn cash_flow_has_no_qr_step() {
  let flow = cash_flow_with_item();
  assert!(matches!(flow.begin_qr(), Err(AdminError::Checkout(_))));
}

#[test]
fn terminal_stage_refuses_further_submission() {
  let mut flow = cash_flow_with_item();
  flow.begin_create().unwrap();
  flow.order_created();
  assert!(matches!(flow.begin_create(), Err(AdminError::Checkout(_))));
}

#[test]
fn empty_cart_blocks_both_paths() {
  let flow = CheckoutFlow::new(OrderType::Store, PaymentMethod::Momo);
  assert!(matches!(flow.begin_qr(), Err(AdminError::Validation(_))));

  let cash = CheckoutFlow::new(OrderType::Store, PaymentMethod::Cash);
  assert!(matches!(cash.begin_create(), Err(AdminError::Validation(_))));
}

#[test]
fn delivery_requires_a_complete_shipping_address() {
  let mut flow = momo_delivery_flow();
  // Blank out one field; validation must block submission.
  if let Some(address) = &mut flow.shipping_address {
    address.phone = "   ".to_string();
  }
  assert!(matches!(flow.begin_qr(), Err(AdminError::Validation(_))));

  flow.shipping_address = Some(complete_address());
  assert!(flow.begin_qr().is_ok());
}

#[test]
fn store_orders_never_serialize_a_shipping_address() {
  let mut flow = cash_flow_with_item();
  // Even if an address was typed before switching tabs, store pickup
  // drops it from the payload.
  flow.shipping_address = Some(complete_address());
  let request = flow.begin_create().unwrap();
  assert!(request.shipping_address.is_none());

  let body = serde_json::to_value(&request).unwrap();
  assert!(body.get("shippingAddress").is_none());
  assert_eq!(body["orderType"], "store");
  assert_eq!(body["paymentMethod"], "cash");
}

#[test]
fn note_is_trimmed_into_the_payload() {
  let mut flow = cash_flow_with_item();
  flow.note = "  deliver after 6pm  ".to_string();
  let request = flow.begin_create().unwrap();
  assert_eq!(request.note, "deliver after 6pm");
}
