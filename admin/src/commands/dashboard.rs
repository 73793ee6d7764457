// admin/src/commands/dashboard.rs

use chrono::{Datelike, Utc};

use backoffice::{ApiClient, Result};

use crate::render;

/// The overview page: the four summary cards, the status breakdown and
/// the daily-sales series for the selected month.
pub async fn run(client: &ApiClient, year: Option<i32>, month: Option<u32>) -> Result<()> {
  let now = Utc::now();
  let year = year.unwrap_or_else(|| now.year());
  let month = month.unwrap_or_else(|| now.month());

  let (today, this_month, purched, top_product, statuses) = futures_util::try_join!(
    client.today_report(),
    client.month_report(),
    client.purched_report(),
    client.top_product(),
    client.status_percentages(),
  )?;

  println!(
    "Today:      {} (yesterday {}, {:+.1}% {})",
    render::money(today.total_today),
    render::money(today.total_yesterday),
    today.percent_change,
    today.trend
  );
  println!(
    "This month: {} (last month {}, {:+.1}% {})",
    render::money(this_month.total_this_month),
    render::money(this_month.total_last_month),
    this_month.percent_change,
    this_month.trend
  );
  println!(
    "Paid:       {}/{} orders ({:.1}%), revenue {} of {} ({:.1}%)",
    purched.purched_orders,
    purched.total_orders,
    purched.percent_purched_orders,
    render::money(purched.purched_revenue),
    render::money(purched.total_revenue),
    purched.percent_purched_revenue
  );
  match top_product {
    Some(top) => println!("Top seller: {} ({} sold)", top.name, top.total_quantity),
    None => println!("Top seller: -"),
  }

  if !statuses.is_empty() {
    println!("Status breakdown:");
    let mut entries: Vec<_> = statuses.values().collect();
    entries.sort_by(|a, b| b.percent.partial_cmp(&a.percent).unwrap_or(std::cmp::Ordering::Equal));
    for entry in entries {
      println!("  {:<12} {:>5.1}%", entry.title, entry.percent);
    }
  }

  let daily = client.daily_sales(year, month).await?;
  println!("Daily sales {}/{}:", month, year);
  let rows: Vec<Vec<String>> = daily
    .iter()
    .map(|day| vec![day.day.to_string(), render::money(day.total_amount)])
    .collect();
  render::table(&["Day", "Revenue"], &rows);
  Ok(())
}
