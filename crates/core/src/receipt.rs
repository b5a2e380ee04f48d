//! Receipt

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

use crate::{items::OrderItem, orders::Order};

/// Text rendering of an order's items: `Name | Quantity | Price` plus a total line.
#[derive(Debug, Clone, Copy)]
pub struct ItemsTable<'a> {
    items: &'a [OrderItem],
    total: Decimal,
}

impl<'a> ItemsTable<'a> {
    /// Builds a table for an order.
    pub fn new(order: &'a Order) -> Self {
        Self {
            items: order.items(),
            total: order.total_price(),
        }
    }
}

impl Display for ItemsTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.items.is_empty() {
            return f.write_str("No items");
        }

        let mut builder = Builder::default();

        builder.push_record(["Name", "Quantity", "Price"]);

        for item in self.items {
            builder.push_record([
                item.name.clone(),
                item.quantity.to_string(),
                format!("${:.2}", item.price),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..3), Alignment::right());
        table.modify(Rows::first(), Alignment::left());

        writeln!(f, "{table}")?;
        write!(f, " Total: ${:.2}", self.total)
    }
}
