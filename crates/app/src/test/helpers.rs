//! Test Helpers

use cafe::{items::OrderItem, tables::TableNumber};

use crate::{
    domain::orders::{OrdersService, OrdersServiceError, data::NewOrder, records::OrderRecord},
    test::TestContext,
};

pub(crate) async fn create_order(
    ctx: &TestContext,
    table_number: i64,
    items: Vec<OrderItem>,
) -> Result<OrderRecord, OrdersServiceError> {
    ctx.orders
        .create_order(NewOrder {
            table_number: TableNumber::new(table_number)?,
            items,
        })
        .await
}
