// core/src/models/stats.rs

//! Report shapes behind the dashboard overview cards and charts.

use serde::{Deserialize, Serialize};

/// Revenue of one day within a month, for the daily-sales chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
  pub day: u32,
  pub total_amount: f64,
}

/// Today versus yesterday, with the percentage delta and a trend
/// marker ("up" / "down") computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayReport {
  pub total_today: f64,
  pub total_yesterday: f64,
  pub percent_change: f64,
  pub trend: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthReport {
  pub total_this_month: f64,
  pub total_last_month: f64,
  pub percent_change: f64,
  pub trend: String,
}

/// How many of this month's orders reached the paid ("purched") state,
/// by count and by revenue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchedReport {
  pub total_orders: u64,
  pub purched_orders: u64,
  pub percent_purched_orders: f64,
  pub total_revenue: f64,
  pub purched_revenue: f64,
  pub percent_purched_revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
  pub total_quantity: u64,
  pub name: String,
}

/// One slice of the monthly status breakdown. The endpoint returns a
/// map keyed by status name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPercent {
  pub title: String,
  pub percent: f64,
}
