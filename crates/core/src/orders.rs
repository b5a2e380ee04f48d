//! Orders
//!
//! The order aggregate keeps its total price derived from its items: every mutation of the
//! item list recomputes the total, and [`Order::recalculate`] is run again before the order is
//! written anywhere.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    items::{ItemsSchemaError, OrderItem},
    pricing::{MAX_TOTAL_PRICE, total_price},
    status::{InvalidStatus, OrderStatus},
    tables::TableNumber,
};

/// Field-level validation failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Table numbers start at 1.
    #[error("table number must be at least 1 (got {0})")]
    InvalidTableNumber(i64),

    /// A typed item carried a negative price.
    #[error("item {index} has a negative price")]
    NegativePrice {
        /// Position of the offending item.
        index: usize,
    },

    /// The derived total does not fit the stored precision.
    #[error("order total exceeds {}", MAX_TOTAL_PRICE)]
    TotalOutOfRange,
}

/// Any failure raised by the order aggregate or its boundary decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Field-level validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Items were not a list of well-formed records.
    #[error(transparent)]
    Schema(#[from] ItemsSchemaError),

    /// Status outside the known set.
    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatus),
}

/// A cafe order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    table_number: TableNumber,
    items: Vec<OrderItem>,
    status: OrderStatus,
    total_price: Decimal,
}

impl Order {
    /// Creates a pending order for a table.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when an item price is negative or the total is out of range.
    pub fn new(table_number: TableNumber, items: Vec<OrderItem>) -> Result<Self, ValidationError> {
        Self::from_parts(table_number, items, OrderStatus::Pending)
    }

    /// Rebuilds an order from its stored parts, re-deriving the total.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when an item price is negative or the total is out of range.
    pub fn from_parts(
        table_number: TableNumber,
        items: Vec<OrderItem>,
        status: OrderStatus,
    ) -> Result<Self, ValidationError> {
        let total_price = derive_total(&items)?;

        Ok(Self {
            table_number,
            items,
            status,
            total_price,
        })
    }

    /// Table the order belongs to.
    pub const fn table_number(&self) -> TableNumber {
        self.table_number
    }

    /// Ordered line items.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Current lifecycle state.
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Total price derived from the items.
    pub const fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// Moves the order to another table.
    pub fn set_table_number(&mut self, table_number: TableNumber) {
        self.table_number = table_number;
    }

    /// Replaces the items and re-derives the total. The order is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when an item price is negative or the total is out of range.
    pub fn set_items(&mut self, items: Vec<OrderItem>) -> Result<(), ValidationError> {
        self.total_price = derive_total(&items)?;
        self.items = items;

        Ok(())
    }

    /// Sets a known status.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Transitions to the named status. The order is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStatus`] when the name is not `pending`, `ready` or `paid`.
    pub fn transition_status(&mut self, status: &str) -> Result<OrderStatus, InvalidStatus> {
        self.status = status.parse()?;

        Ok(self.status)
    }

    /// Re-derives the total from the current items. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the total is out of range.
    pub fn recalculate(&mut self) -> Result<Decimal, ValidationError> {
        self.total_price = derive_total(&self.items)?;

        Ok(self.total_price)
    }
}

fn derive_total(items: &[OrderItem]) -> Result<Decimal, ValidationError> {
    if let Some(index) = items.iter().position(|item| item.price < Decimal::ZERO) {
        return Err(ValidationError::NegativePrice { index });
    }

    total_price(items)
        .filter(|total| *total <= MAX_TOTAL_PRICE)
        .ok_or(ValidationError::TotalOutOfRange)
}
