// core/src/checkout.rs

//! Order creation: cart assembly, stock clamping, total computation,
//! and the staged payment progression.
//!
//! The flow is deliberately a plain state machine driven by sequential
//! user-triggered calls — there is no concurrency here. Cash orders
//! are created directly; momo/card orders must first display a payment
//! QR and only then confirm creation:
//!
//! ```text
//!   Init ──generate_qr──▶ QrDisplayed ──confirm──▶ OrderCreated
//!     └────────────cash create─────────────────────────┘
//! ```
//!
//! The network calls themselves live on [`crate::ApiClient`]; this
//! module only decides whether a call is allowed and what payload it
//! carries, which keeps every transition testable offline.

use crate::error::{AdminError, Result};
use crate::models::{
  CreateOrderItem, CreateOrderRequest, OrderType, PaymentMethod, Product, ShippingAddress,
};

/// The snapshot of a product a cart line holds. Price and stock are
/// frozen at the moment the product was added, exactly like the page
/// kept the fetched product object around.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
  pub id: String,
  pub name: String,
  pub price: f64,
  pub stock: i64,
  pub barcode: String,
}

impl From<&Product> for CartProduct {
  fn from(product: &Product) -> Self {
    CartProduct {
      id: product.id.clone(),
      name: product.name.clone(),
      price: product.price,
      stock: product.stock,
      barcode: product.barcode.clone(),
    }
  }
}

#[derive(Debug, Clone)]
pub struct CartLine {
  pub product: CartProduct,
  pub quantity: u32,
}

/// Outcome of adding a product to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartUpdate {
  /// New line with quantity 1.
  Added,
  /// Existing line bumped by one.
  Incremented,
  /// Existing line already sits at the product's stock; nothing changed.
  AtStockLimit,
}

/// Outcome of setting a line's quantity explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOutcome {
  Set(u32),
  /// The ask exceeded stock and was clamped down; surface a warning.
  Clamped(u32),
  /// Quantities below one are ignored, as the quantity input did.
  Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
  lines: Vec<CartLine>,
}

impl Cart {
  pub fn new() -> Self {
    Cart::default()
  }

  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Add one unit of `product`. A product already in the cart is
  /// incremented, but never past its stock.
  pub fn add(&mut self, product: CartProduct) -> Result<CartUpdate> {
    if product.stock <= 0 {
      return Err(AdminError::Validation(format!(
        "'{}' is out of stock",
        product.name
      )));
    }
    if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product.id) {
      if i64::from(line.quantity) < line.product.stock {
        line.quantity += 1;
        return Ok(CartUpdate::Incremented);
      }
      tracing::warn!(product = %line.product.name, stock = line.product.stock, "Quantity already at stock limit.");
      return Ok(CartUpdate::AtStockLimit);
    }
    self.lines.push(CartLine { product, quantity: 1 });
    Ok(CartUpdate::Added)
  }

  /// Set the quantity of an existing line, clamping at the product's
  /// stock count.
  pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> Result<QuantityOutcome> {
    if quantity < 1 {
      return Ok(QuantityOutcome::Ignored);
    }
    let line = self
      .lines
      .iter_mut()
      .find(|line| line.product.id == product_id)
      .ok_or_else(|| AdminError::NotFound(format!("Product {} is not in the cart", product_id)))?;

    let stock = u32::try_from(line.product.stock).unwrap_or(0);
    if quantity > stock {
      tracing::warn!(
        product = %line.product.name,
        requested = quantity,
        stock,
        "Requested quantity exceeds stock; clamping."
      );
      line.quantity = stock;
      return Ok(QuantityOutcome::Clamped(stock));
    }
    line.quantity = quantity;
    Ok(QuantityOutcome::Set(quantity))
  }

  pub fn remove(&mut self, product_id: &str) {
    self.lines.retain(|line| line.product.id != product_id);
  }

  pub fn clear(&mut self) {
    self.lines.clear();
  }

  /// Σ price × quantity over all lines.
  pub fn total(&self) -> f64 {
    self
      .lines
      .iter()
      .map(|line| line.product.price * f64::from(line.quantity))
      .sum()
  }

  fn as_request_items(&self) -> Vec<CreateOrderItem> {
    self
      .lines
      .iter()
      .map(|line| CreateOrderItem {
        product: line.product.id.clone(),
        quantity: line.quantity,
      })
      .collect()
  }
}

/// The payment progression of the order-add page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStage {
  Init,
  QrDisplayed,
  OrderCreated,
}

impl std::fmt::Display for PaymentStage {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      PaymentStage::Init => "init",
      PaymentStage::QrDisplayed => "qr_displayed",
      PaymentStage::OrderCreated => "order_created",
    };
    f.write_str(name)
  }
}

/// Full state of the order-creation page.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
  pub order_type: OrderType,
  pub payment_method: PaymentMethod,
  pub note: String,
  pub shipping_address: Option<ShippingAddress>,
  pub cart: Cart,
  stage: PaymentStage,
  qr_code_url: Option<String>,
}

impl CheckoutFlow {
  pub fn new(order_type: OrderType, payment_method: PaymentMethod) -> Self {
    CheckoutFlow {
      order_type,
      payment_method,
      note: String::new(),
      shipping_address: None,
      cart: Cart::new(),
      stage: PaymentStage::Init,
      qr_code_url: None,
    }
  }

  pub fn stage(&self) -> PaymentStage {
    self.stage
  }

  pub fn qr_code_url(&self) -> Option<&str> {
    self.qr_code_url.as_deref()
  }

  /// The submission preconditions shared by both payment paths.
  fn validate(&self) -> Result<()> {
    if self.cart.is_empty() {
      return Err(AdminError::Validation(
        "Select at least one product".to_string(),
      ));
    }
    if self.order_type == OrderType::Delivery {
      let complete = self
        .shipping_address
        .as_ref()
        .map(ShippingAddress::is_complete)
        .unwrap_or(false);
      if !complete {
        return Err(AdminError::Validation(
          "Fill in the full shipping address (recipient name, phone, address)".to_string(),
        ));
      }
    }
    Ok(())
  }

  fn base_request(&self) -> CreateOrderRequest {
    CreateOrderRequest {
      order_type: self.order_type,
      items: self.cart.as_request_items(),
      payment_method: self.payment_method,
      note: self.note.trim().to_string(),
      recipient_name: None,
      phone: None,
      shipping_address: if self.order_type == OrderType::Delivery {
        self.shipping_address.clone()
      } else {
        None
      },
    }
  }

  /// Start the QR step: validates the draft and hands back the payload
  /// for `POST /orders/generate-qr`. Only legal from `Init`, and only
  /// for non-cash methods.
  pub fn begin_qr(&self) -> Result<CreateOrderRequest> {
    if !self.payment_method.requires_qr() {
      return Err(AdminError::Checkout(
        "Cash orders are created directly; there is no QR step".to_string(),
      ));
    }
    match self.stage {
      PaymentStage::Init => {}
      PaymentStage::QrDisplayed => {
        return Err(AdminError::Checkout("QR code already displayed".to_string()))
      }
      PaymentStage::OrderCreated => {
        return Err(AdminError::Checkout("Order already created".to_string()))
      }
    }
    self.validate()?;

    let mut request = self.base_request();
    // The QR endpoint also wants the recipient fields at the top level.
    if let Some(address) = &self.shipping_address {
      request.recipient_name = Some(address.recipient_name.trim().to_string());
      request.phone = Some(address.phone.trim().to_string());
    }
    Ok(request)
  }

  /// Record that the QR was fetched and shown to the customer.
  pub fn qr_displayed(&mut self, qr_code_url: String) -> Result<()> {
    if self.stage != PaymentStage::Init {
      return Err(AdminError::Checkout(format!(
        "Cannot display a QR from stage {}",
        self.stage
      )));
    }
    tracing::info!(%qr_code_url, "Checkout: QR displayed, awaiting confirmation.");
    self.qr_code_url = Some(qr_code_url);
    self.stage = PaymentStage::QrDisplayed;
    Ok(())
  }

  /// Start order creation: validates and hands back the payload for
  /// `POST /orders`. Cash goes straight from `Init`; non-cash methods
  /// must have displayed the QR first — the stage is never skipped.
  pub fn begin_create(&self) -> Result<CreateOrderRequest> {
    match (self.payment_method.requires_qr(), self.stage) {
      (_, PaymentStage::OrderCreated) => {
        return Err(AdminError::Checkout("Order already created".to_string()))
      }
      (true, PaymentStage::Init) => {
        return Err(AdminError::Checkout(format!(
          "{} payment requires the QR step before the order is created",
          self.payment_method
        )))
      }
      (false, PaymentStage::QrDisplayed) => {
        // Unreachable through the public API, but keep the invariant tight.
        return Err(AdminError::Checkout(
          "Cash orders never enter the QR stage".to_string(),
        ));
      }
      (true, PaymentStage::QrDisplayed) | (false, PaymentStage::Init) => {}
    }
    self.validate()?;
    Ok(self.base_request())
  }

  /// Record the successful `POST /orders`: the cart and note reset and
  /// the flow reaches its terminal stage.
  pub fn order_created(&mut self) {
    tracing::info!(
      method = %self.payment_method,
      total = self.cart.total(),
      "Checkout: order created."
    );
    self.cart.clear();
    self.note.clear();
    self.qr_code_url = None;
    self.stage = PaymentStage::OrderCreated;
  }
}
