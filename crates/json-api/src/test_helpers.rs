//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use cafe::{items::OrderItem, orders::Order, status::OrderStatus, tables::TableNumber};
use cafe_app::{
    context::AppContext,
    domain::orders::{
        MockOrdersService,
        records::{OrderId, OrderRecord},
    },
};

use crate::{config::api::ApiConfig, state::State};

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    State::from_app_context(
        AppContext {
            orders: Arc::new(orders),
        },
        ApiConfig::default(),
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .push(route),
    )
}

/// A pending order for table 1: two coffees at 3.50 and a sandwich at 5.00.
pub(crate) fn make_record(id: i64) -> OrderRecord {
    make_record_with_status(id, OrderStatus::Pending)
}

pub(crate) fn make_record_with_status(id: i64, status: OrderStatus) -> OrderRecord {
    let items = vec![
        OrderItem::new("Coffee", Decimal::new(350, 2), 2),
        OrderItem::new("Sandwich", Decimal::new(500, 2), 1),
    ];

    let table_number = TableNumber::new(1).expect("table 1 is valid");
    let order = Order::from_parts(table_number, items, status).expect("test order is valid");

    OrderRecord {
        id: OrderId::from_id(id),
        order,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
