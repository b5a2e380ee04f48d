//! Cafe prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    items::{ItemsSchemaError, OrderItem, ParseMode, parse_items},
    orders::{Order, OrderError, ValidationError},
    pricing::{MAX_TOTAL_PRICE, total_price},
    receipt::ItemsTable,
    status::{InvalidStatus, OrderStatus},
    tables::TableNumber,
};
