// core/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ProductRef;
use crate::error::AdminError;

/// Lifecycle of an order on the remote API. `Purched` is the wire
/// value the server stores for "paid"; it is kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Purched,
  Processing,
  Shipped,
  Delivered,
  Cancelled,
  Completed,
}

impl OrderStatus {
  pub const ALL: [OrderStatus; 7] = [
    OrderStatus::Pending,
    OrderStatus::Purched,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
    OrderStatus::Completed,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Purched => "purched",
      OrderStatus::Processing => "processing",
      OrderStatus::Shipped => "shipped",
      OrderStatus::Delivered => "delivered",
      OrderStatus::Cancelled => "cancelled",
      OrderStatus::Completed => "completed",
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OrderStatus {
  type Err = AdminError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    OrderStatus::ALL
      .iter()
      .copied()
      .find(|status| status.as_str() == s)
      .ok_or_else(|| AdminError::Validation(format!("Unknown order status '{}'", s)))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
  Cash,
  Momo,
  Card,
}

impl PaymentMethod {
  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentMethod::Cash => "cash",
      PaymentMethod::Momo => "momo",
      PaymentMethod::Card => "card",
    }
  }

  /// Cash settles at the counter; every other method goes through the
  /// QR payment stage first.
  pub fn requires_qr(&self) -> bool {
    !matches!(self, PaymentMethod::Cash)
  }
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PaymentMethod {
  type Err = AdminError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "cash" => Ok(PaymentMethod::Cash),
      "momo" => Ok(PaymentMethod::Momo),
      "card" => Ok(PaymentMethod::Card),
      other => Err(AdminError::Validation(format!(
        "Unknown payment method '{}'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
  Store,
  Delivery,
}

impl OrderType {
  pub fn as_str(&self) -> &'static str {
    match self {
      OrderType::Store => "store",
      OrderType::Delivery => "delivery",
    }
  }
}

impl fmt::Display for OrderType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OrderType {
  type Err = AdminError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "store" => Ok(OrderType::Store),
      "delivery" => Ok(OrderType::Delivery),
      other => Err(AdminError::Validation(format!(
        "Unknown order type '{}'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
  pub recipient_name: String,
  pub phone: String,
  #[serde(default)]
  pub address: String,
}

impl ShippingAddress {
  /// Delivery orders need all three fields filled in before submission.
  pub fn is_complete(&self) -> bool {
    !self.recipient_name.trim().is_empty()
      && !self.phone.trim().is_empty()
      && !self.address.trim().is_empty()
  }
}

/// A line item as stored on an order: a snapshot of the product plus
/// the quantity and the unit price at purchase time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
  #[serde(default)]
  pub product: Option<ProductRef>,
  pub quantity: u32,
  pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
  #[serde(rename = "_id")]
  pub id: String,
  #[serde(rename = "orderCode", default)]
  pub order_code: String,
  #[serde(rename = "orderType")]
  pub order_type: OrderType,
  pub items: Vec<OrderItem>,
  #[serde(rename = "totalAmount")]
  pub total_amount: f64,
  pub status: OrderStatus,
  #[serde(rename = "paymentMethod")]
  pub payment_method: PaymentMethod,
  #[serde(default)]
  pub note: Option<String>,
  #[serde(rename = "shippingAddress", default)]
  pub shipping_address: Option<ShippingAddress>,
  #[serde(rename = "createdAt", default)]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(rename = "updatedAt", default)]
  pub updated_at: Option<DateTime<Utc>>,
}

// --- Request payloads ---

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderItem {
  /// Product id (the API resolves the snapshot server-side).
  pub product: String,
  pub quantity: u32,
}

/// Body for `POST /orders` and `POST /orders/generate-qr`. The QR
/// endpoint additionally receives the recipient fields at the top
/// level, which is why they are optional here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
  pub order_type: OrderType,
  pub items: Vec<CreateOrderItem>,
  pub payment_method: PaymentMethod,
  pub note: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub recipient_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub shipping_address: Option<ShippingAddress>,
}
