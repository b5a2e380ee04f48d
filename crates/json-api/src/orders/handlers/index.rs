//! Order Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use cafe::tables::TableNumber;
use cafe_app::domain::orders::data::{OrdersFilter, PageRequest};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::OrderResponse, payload},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// Orders, newest first
    pub orders: Vec<OrderResponse>,
}

/// Order Index Handler
///
/// Returns every order, optionally narrowed to one table or status.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    responses(
        (status_code = StatusCode::OK, description = "Orders listed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid filter"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    table_number: QueryParam<String, false>,
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = OrdersFilter {
        table_number: table_number
            .into_inner()
            .map(|raw| payload::parse_table_number(&raw))
            .transpose()?
            .map(TableNumber::get),
        status: status
            .into_inner()
            .map(|raw| payload::parse_status(&raw))
            .transpose()?,
        ..OrdersFilter::default()
    };

    let page = state
        .app
        .orders
        .list_orders(filter, PageRequest::all())
        .await
        .map_err(into_api_error)?;

    Ok(Json(OrdersResponse {
        orders: page.orders.into_iter().map(Into::into).collect(),
    }))
}
