//! Order aggregate models
//!
//! An [`Order`] owns its [`Product`]s and [`OrderUpdate`] history rows;
//! children live in their own tables and are removed by FK cascade with
//! the parent. JSON field names follow the service's wire format
//! (`orderId`, `totalAmount`, `handledBy`, ...).

use serde::{Deserialize, Serialize};

/// Order lifecycle status, stored as TEXT and CHECK-constrained in the
/// schema. No transition validation is applied — any value may be
/// written directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "OrderPending")]
    #[sqlx(rename = "OrderPending")]
    Pending,
    #[serde(rename = "OrderProcessing")]
    #[sqlx(rename = "OrderProcessing")]
    Processing,
    #[serde(rename = "OrderShipped")]
    #[sqlx(rename = "OrderShipped")]
    Shipped,
    #[serde(rename = "OrderDelivered")]
    #[sqlx(rename = "OrderDelivered")]
    Delivered,
    #[serde(rename = "OrderCancelled")]
    #[sqlx(rename = "OrderCancelled")]
    Cancelled,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "orderId")]
    pub id: i64,
    /// Optimistic-lock stamp, bumped on every save
    pub version: i64,
    /// Unix millis, set on insert
    pub created_at: i64,
    /// Unix millis, set on every write
    pub updated_at: i64,
    /// Owning user id or name
    pub user: String,
    pub total_amount: f64,
    pub status: OrderStatus,

    // -- Relations (populated by repository code, skipped by FromRow) --
    #[sqlx(skip)]
    #[serde(default)]
    pub products: Vec<Product>,
    #[sqlx(skip)]
    #[serde(default)]
    pub updates: Vec<OrderUpdate>,
}

/// Product entity — belongs to exactly one order
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub order_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    /// Free-form product status
    pub status: String,
    pub remarks: String,
    pub updated_at: i64,
}

/// Order update history entry — belongs to exactly one order
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub id: i64,
    pub order_id: i64,
    pub updated_at: i64,
    pub notes: String,
    pub handled_by: String,
}

// ── Create / save DTOs ──────────────────────────────────────────────

/// Nested product input (create / save)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub remarks: String,
}

/// Nested order-update input (create / save)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdateInput {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub handled_by: String,
}

/// Order creation payload — `products` is required by the handler
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub total_amount: f64,
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub products: Vec<ProductInput>,
    #[serde(default)]
    pub updates: Vec<OrderUpdateInput>,
}

/// Order save payload (upsert by id)
///
/// `orderId` 0 inserts a fresh order; an existing id must carry the
/// current `version`. When `products`/`updates` are present the child
/// sets are replaced wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSave {
    #[serde(rename = "orderId", default)]
    pub id: i64,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub total_amount: f64,
    pub status: Option<OrderStatus>,
    pub products: Option<Vec<ProductInput>>,
    pub updates: Option<Vec<OrderUpdateInput>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"OrderPending\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"OrderCancelled\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"OrderShipped\"").unwrap();
        assert_eq!(parsed, OrderStatus::Shipped);
    }

    #[test]
    fn order_uses_camel_case_field_names() {
        let order = Order {
            id: 7,
            version: 0,
            created_at: 1,
            updated_at: 2,
            user: "alice".into(),
            total_amount: 19.98,
            status: OrderStatus::Pending,
            products: vec![],
            updates: vec![],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderId"], 7);
        assert_eq!(json["totalAmount"], 19.98);
        assert_eq!(json["status"], "OrderPending");
        assert!(json["products"].as_array().unwrap().is_empty());
    }

    #[test]
    fn create_payload_defaults_optional_fields() {
        let payload: OrderCreate = serde_json::from_str(
            r#"{"products":[{"name":"Widget","price":9.99,"quantity":2}]}"#,
        )
        .unwrap();
        assert_eq!(payload.user, "");
        assert_eq!(payload.total_amount, 0.0);
        assert!(payload.status.is_none());
        assert_eq!(payload.products.len(), 1);
        assert_eq!(payload.products[0].remarks, "");
    }
}
