//! Order Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use cafe::items::OrderItem;
use cafe_app::domain::orders::records::OrderRecord;

/// Order line item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// Item name
    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Number of units
    pub quantity: u32,
}

impl From<&OrderItem> for ItemResponse {
    fn from(item: &OrderItem) -> Self {
        ItemResponse {
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// Full order representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// Order id
    pub id: i64,

    /// Table the order belongs to
    pub table_number: i32,

    /// Ordered line items
    pub items: Vec<ItemResponse>,

    /// Derived total, two decimal places
    pub total_price: String,

    /// Lifecycle state: `pending`, `ready` or `paid`
    pub status: String,

    /// Human-readable status label
    pub status_display: String,

    /// The date and time the order was created
    pub created_at: String,

    /// The date and time the order was last updated
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(record: OrderRecord) -> Self {
        let order = &record.order;

        OrderResponse {
            id: record.id.into_id(),
            table_number: order.table_number().get(),
            items: order.items().iter().map(ItemResponse::from).collect(),
            total_price: format!("{:.2}", order.total_price()),
            status: order.status().as_str().to_string(),
            status_display: order.status().label().to_string(),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}
