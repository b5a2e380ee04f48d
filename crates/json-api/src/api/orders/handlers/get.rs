//! Get Order Resource Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cafe_app::domain::orders::records::OrderId;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::OrderResponse},
    state::State,
};

/// Get Order Resource Handler
#[endpoint(
    tags("api"),
    summary = "Retrieve Order",
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .orders
        .get_order(OrderId::from_id(id.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(record.into()))
}
