// core/src/api/orders.rs

use serde::Deserialize;
use std::collections::HashMap;

use super::{ApiClient, Envelope};
use crate::error::Result;
use crate::models::{
  CreateOrderRequest, DailySales, MonthReport, Order, OrderStatus, PurchedReport, StatusPercent,
  TodayReport, TopProduct,
};

/// One page of the server-paginated orders list.
#[derive(Debug)]
pub struct OrderPage {
  pub orders: Vec<Order>,
  /// Total matching orders across all pages.
  pub total: u64,
}

/// Body of `POST /orders/generate-qr`. Bare, not enveloped.
#[derive(Debug, Deserialize)]
pub struct QrResponse {
  #[serde(rename = "qrCodeUrl")]
  pub qr_code_url: String,
}

#[derive(Deserialize)]
struct TopProductResponse {
  #[serde(rename = "topSoldProduct")]
  top_sold_product: Option<TopProduct>,
}

#[derive(Deserialize)]
struct StatusPercentResponse {
  #[serde(rename = "statusPercentages", default)]
  status_percentages: HashMap<String, StatusPercent>,
}

impl ApiClient {
  /// `GET /orders?page&limit&search`. The orders list is the only
  /// server-paginated collection; `page` is 1-based on the wire.
  pub async fn list_orders(&self, page: usize, limit: usize, search: &str) -> Result<OrderPage> {
    let request = self.http().get(self.url("/orders")).query(&[
      ("page", page.to_string()),
      ("limit", limit.to_string()),
      ("search", search.to_string()),
    ]);
    let response = self.send(request).await?;
    let envelope: Envelope<Vec<Order>> = response.json().await?;
    let total = envelope.total.unwrap_or(0);
    let orders = envelope.into_data("orders")?;
    Ok(OrderPage { orders, total })
  }

  /// `GET /orders/{id}`. Unlike the list, the detail endpoint returns
  /// the order document bare.
  pub async fn get_order(&self, id: &str) -> Result<Order> {
    self.get_bare(&format!("/orders/{}", id)).await
  }

  pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<()> {
    self
      .send(self.http().post(self.url("/orders")).json(request))
      .await?;
    Ok(())
  }

  /// Fetch the payment QR for a draft order (the first half of the
  /// non-cash checkout flow).
  pub async fn generate_order_qr(&self, request: &CreateOrderRequest) -> Result<QrResponse> {
    let response = self
      .send(self.http().post(self.url("/orders/generate-qr")).json(request))
      .await?;
    Ok(response.json().await?)
  }

  /// `PUT /orders/{id}/status?status=...` with an empty body.
  pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<()> {
    let request = self
      .http()
      .put(self.url(&format!("/orders/{}/status", id)))
      .query(&[("status", status.as_str())]);
    self.send(request).await?;
    Ok(())
  }

  pub async fn delete_order(&self, id: &str) -> Result<()> {
    self.delete(&format!("/orders/{}", id)).await
  }

  // --- Statistics (dashboard overview) ---

  /// Today-vs-yesterday revenue.
  pub async fn today_report(&self) -> Result<TodayReport> {
    self.get_bare("/orders/stats/daily-sales").await
  }

  /// This-month-vs-last-month revenue.
  pub async fn month_report(&self) -> Result<MonthReport> {
    self.get_bare("/orders/stats/monthly-sales").await
  }

  /// Share of this month's orders that reached the paid state.
  pub async fn purched_report(&self) -> Result<PurchedReport> {
    self.get_bare("/orders/stats/monthly-purched").await
  }

  pub async fn top_product(&self) -> Result<Option<TopProduct>> {
    let body: TopProductResponse = self.get_bare("/orders/stats/monthly-top-product").await?;
    Ok(body.top_sold_product)
  }

  pub async fn status_percentages(&self) -> Result<HashMap<String, StatusPercent>> {
    let body: StatusPercentResponse = self.get_bare("/orders/stats/monthly-status").await?;
    Ok(body.status_percentages)
  }

  /// Per-day revenue for the chart, for one year/month.
  pub async fn daily_sales(&self, year: i32, month: u32) -> Result<Vec<DailySales>> {
    self
      .get_bare(&format!("/orders/stats/daily-sales/{}/{}", year, month))
      .await
  }
}
