// admin/src/commands/orders.rs

use std::io::{BufRead, Write};

use backoffice::checkout::{CartProduct, QuantityOutcome};
use backoffice::models::{OrderStatus, OrderType, PaymentMethod, ShippingAddress};
use backoffice::{AdminError, ApiClient, CheckoutFlow, Result};

use crate::cli::OrderAction;
use crate::render;

pub async fn run(client: &ApiClient, action: OrderAction) -> Result<()> {
  match action {
    OrderAction::List { page, rows, search } => list(client, page, rows, &search).await,
    OrderAction::Show { id } => show(client, &id).await,
    OrderAction::Create {
      order_type,
      payment,
      items,
      note,
      recipient,
      phone,
      address,
      yes,
    } => {
      create(
        client,
        order_type.parse()?,
        payment.parse()?,
        &items,
        note,
        recipient,
        phone,
        address,
        yes,
      )
      .await
    }
    OrderAction::SetStatus { id, status } => {
      let status: OrderStatus = status.parse()?;
      client.update_order_status(&id, status).await?;
      render::success(&format!("Order status set to {}", status));
      Ok(())
    }
    OrderAction::Delete { id } => {
      client.delete_order(&id).await?;
      render::success("Order deleted");
      Ok(())
    }
  }
}

async fn list(client: &ApiClient, page: usize, rows: usize, search: &str) -> Result<()> {
  // The API paginates orders server-side with a 1-based page number.
  let order_page = client.list_orders(page + 1, rows, search).await?;
  let table_rows: Vec<Vec<String>> = order_page
    .orders
    .iter()
    .map(|order| {
      vec![
        order.id.clone(),
        order.order_type.to_string(),
        order.items.len().to_string(),
        render::money(order.total_amount),
        order.status.to_string(),
        order.payment_method.to_string(),
        order
          .created_at
          .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
          .unwrap_or_default(),
      ]
    })
    .collect();
  render::table(
    &["Id", "Type", "Items", "Total", "Status", "Payment", "Created"],
    &table_rows,
  );
  render::footer(page, table_rows.len(), order_page.total as usize);
  Ok(())
}

async fn show(client: &ApiClient, id: &str) -> Result<()> {
  let order = client.get_order(id).await?;
  println!("Order:   {} ({})", order.order_code, order.id);
  println!("Type:    {}", order.order_type);
  println!("Status:  {}", order.status);
  println!("Payment: {}", order.payment_method);
  println!("Total:   {}", render::money(order.total_amount));
  if let Some(note) = &order.note {
    if !note.is_empty() {
      println!("Note:    {}", note);
    }
  }
  if let Some(address) = &order.shipping_address {
    println!(
      "Ship to: {} / {} / {}",
      address.recipient_name, address.phone, address.address
    );
  }
  println!("Items:");
  for item in &order.items {
    let name = item
      .product
      .as_ref()
      .and_then(|product| product.name.as_deref())
      .unwrap_or("(deleted product)");
    println!(
      "  {:<30} x{:<4} @ {}",
      name,
      item.quantity,
      render::money(item.price)
    );
  }
  Ok(())
}

fn parse_item_spec(spec: &str) -> Result<(String, u32)> {
  let (id, quantity) = spec.split_once('=').ok_or_else(|| {
    AdminError::Validation(format!("Invalid --item '{}': expected <product-id>=<quantity>", spec))
  })?;
  let quantity: u32 = quantity
    .parse()
    .map_err(|_| AdminError::Validation(format!("Invalid quantity in --item '{}'", spec)))?;
  Ok((id.to_string(), quantity))
}

#[allow(clippy::too_many_arguments)]
async fn create(
  client: &ApiClient,
  order_type: OrderType,
  payment: PaymentMethod,
  item_specs: &[String],
  note: String,
  recipient: Option<String>,
  phone: Option<String>,
  address: Option<String>,
  yes: bool,
) -> Result<()> {
  let mut flow = CheckoutFlow::new(order_type, payment);
  flow.note = note;
  if recipient.is_some() || phone.is_some() || address.is_some() {
    flow.shipping_address = Some(ShippingAddress {
      recipient_name: recipient.unwrap_or_default(),
      phone: phone.unwrap_or_default(),
      address: address.unwrap_or_default(),
    });
  }

  // Assemble the cart from live product records so stock and price are
  // current at submission time.
  for spec in item_specs {
    let (product_id, quantity) = parse_item_spec(spec)?;
    let product = client.get_product(&product_id).await?;
    flow.cart.add(CartProduct::from(&product))?;
    if quantity > 1 {
      match flow.cart.set_quantity(&product_id, quantity)? {
        QuantityOutcome::Clamped(stock) => {
          render::warn(&format!(
            "'{}': requested {} but only {} in stock; quantity clamped",
            product.name, quantity, stock
          ));
        }
        QuantityOutcome::Set(_) | QuantityOutcome::Ignored => {}
      }
    }
  }

  println!("Cart:");
  for line in flow.cart.lines() {
    println!(
      "  {:<30} x{:<4} @ {}",
      line.product.name,
      line.quantity,
      render::money(line.product.price)
    );
  }
  println!("Total: {}", render::money(flow.cart.total()));

  if payment.requires_qr() {
    // Two-step path: display the QR, wait for the operator, then create.
    let qr_request = flow.begin_qr()?;
    let qr = client.generate_order_qr(&qr_request).await?;
    flow.qr_displayed(qr.qr_code_url)?;
    println!("Payment QR: {}", flow.qr_code_url().unwrap_or_default());

    if !yes {
      print!("Press Enter once the customer has paid (Ctrl-C to abort): ");
      std::io::stdout().flush()?;
      let mut line = String::new();
      std::io::stdin().lock().read_line(&mut line)?;
    }
  }

  let request = flow.begin_create()?;
  client.create_order(&request).await?;
  flow.order_created();
  render::success("Order created");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn item_spec_parses_id_and_quantity() {
    let (id, quantity) = parse_item_spec("664f1c=3").unwrap();
    assert_eq!(id, "664f1c");
    assert_eq!(quantity, 3);
  }

  #[test]
  fn malformed_item_specs_are_rejected() {
    assert!(parse_item_spec("no-equals").is_err());
    assert!(parse_item_spec("p1=three").is_err());
  }
}
