//! Orders Data

use cafe::{items::OrderItem, status::OrderStatus, tables::TableNumber};
use jiff::Timestamp;

use crate::domain::orders::records::OrderRecord;

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub table_number: TableNumber,
    pub items: Vec<OrderItem>,
}

/// Order Update Data
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderUpdate {
    pub table_number: Option<TableNumber>,
    pub items: Option<Vec<OrderItem>>,
    pub status: Option<OrderStatus>,
}

/// Order listing filters. Every populated field narrows the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdersFilter {
    pub table_number: Option<i32>,
    pub status: Option<OrderStatus>,

    /// Matches either the order id or the table number.
    pub search: Option<i64>,

    /// Inclusive lower bound on `created_at`.
    pub created_after: Option<Timestamp>,

    /// Exclusive upper bound on `created_at`.
    pub created_before: Option<Timestamp>,

    /// Inclusive lower bound on `updated_at`.
    pub updated_after: Option<Timestamp>,

    /// Exclusive upper bound on `updated_at`.
    pub updated_before: Option<Timestamp>,
}

/// A window into the listing, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Builds the window for a 1-based page number.
    #[must_use]
    pub fn page(number: u64, size: u64) -> Self {
        Self {
            offset: number.saturating_sub(1).saturating_mul(size),
            limit: size,
        }
    }

    /// Every matching row.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            offset: 0,
            limit: i64::MAX.unsigned_abs(),
        }
    }
}

/// One page of orders plus the unpaged match count.
#[derive(Debug, Clone, Default)]
pub struct OrdersPage {
    pub orders: Vec<OrderRecord>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_starts_at_zero() {
        assert_eq!(
            PageRequest::page(1, 10),
            PageRequest {
                offset: 0,
                limit: 10
            }
        );
    }

    #[test]
    fn test_page_zero_is_treated_as_first() {
        assert_eq!(PageRequest::page(0, 10).offset, 0);
    }

    #[test]
    fn test_third_page_offset() {
        assert_eq!(PageRequest::page(3, 20).offset, 40);
    }
}
