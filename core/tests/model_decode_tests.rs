// tests/model_decode_tests.rs

//! Wire-format fixtures: the models must decode exactly what the
//! remote API sends, odd field names and all.

use backoffice::models::{Order, OrderStatus, OrderType, PaymentMethod, Product};

#[test]
fn product_decodes_with_embedded_refs() {
  let raw = r#"{
    "_id": "664f1c2ab1",
    "name": "Espresso Beans 1kg",
    "description": "<p>Dark roast</p>",
    "price": 250000,
    "stock": 14,
    "category": {"_id": "c1", "name": "Coffee", "description": "", "image": "", "slug": "coffee"},
    "brand": {"_id": "b1", "name": "Acme", "description": "", "logo": "", "slug": "acme"},
    "supplier": {"_id": "s1", "name": "Beans Co", "contact": "09", "address": "HCMC", "slug": "beans-co"},
    "variants": [{"_id": "v1", "name": "1kg", "price": 250000, "stock": 14, "description": "", "image": "", "slug": "1kg"}],
    "images": ["https://cdn.example/p1.jpg"],
    "barcode": "8930001234",
    "barcodeImage": "https://cdn.example/bc1.png",
    "slug": "espresso-beans-1kg",
    "createdAt": "2024-05-23T10:15:00.000Z",
    "updatedAt": "2024-05-24T08:00:00.000Z",
    "__v": 0
  }"#;

  let product: Product = serde_json::from_str(raw).unwrap();
  assert_eq!(product.id, "664f1c2ab1");
  assert_eq!(product.barcode, "8930001234");
  assert_eq!(product.barcode_image, "https://cdn.example/bc1.png");
  assert_eq!(product.category.as_ref().unwrap().slug, "coffee");
  assert_eq!(product.variants.len(), 1);
  assert!(product.created_at.is_some());
}

#[test]
fn product_tolerates_sparse_documents() {
  // Older documents miss barcode/images entirely.
  let raw = r#"{"_id": "p2", "name": "Filter Paper", "price": 30000, "stock": 3, "slug": "filter-paper"}"#;
  let product: Product = serde_json::from_str(raw).unwrap();
  assert!(product.images.is_empty());
  assert!(product.brand.is_none());
  assert_eq!(product.barcode, "");
}

#[test]
fn order_decodes_with_nullable_item_products() {
  let raw = r#"{
    "_id": "o1",
    "orderCode": "ORD-2024-0001",
    "orderType": "delivery",
    "items": [
      {"product": {"_id": "p1", "name": "Espresso Beans 1kg", "price": 250000}, "quantity": 2, "price": 250000},
      {"product": null, "quantity": 1, "price": 30000}
    ],
    "totalAmount": 530000,
    "status": "purched",
    "paymentMethod": "momo",
    "note": "",
    "shippingAddress": {"recipientName": "Alex Tran", "phone": "0900000001", "address": "12 Market St"},
    "createdAt": "2024-06-01T03:20:00.000Z",
    "updatedAt": "2024-06-01T03:25:00.000Z"
  }"#;

  let order: Order = serde_json::from_str(raw).unwrap();
  assert_eq!(order.order_code, "ORD-2024-0001");
  assert_eq!(order.order_type, OrderType::Delivery);
  assert_eq!(order.status, OrderStatus::Purched);
  assert_eq!(order.payment_method, PaymentMethod::Momo);
  assert_eq!(order.items.len(), 2);
  // A deleted product leaves a null snapshot, not a decode failure.
  assert!(order.items[1].product.is_none());
  assert!(order.shipping_address.as_ref().unwrap().is_complete());
}

#[test]
fn order_status_round_trips_every_wire_value() {
  for status in OrderStatus::ALL {
    let encoded = serde_json::to_string(&status).unwrap();
    assert_eq!(encoded, format!("\"{}\"", status.as_str()));
    let decoded: OrderStatus = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, status);
  }
  // The misspelled wire value is intentional.
  assert_eq!(OrderStatus::Purched.as_str(), "purched");
}

#[test]
fn unknown_status_fails_parse_with_a_clear_message() {
  let err = "refunded".parse::<OrderStatus>().unwrap_err();
  assert!(err.to_string().contains("refunded"));
}
