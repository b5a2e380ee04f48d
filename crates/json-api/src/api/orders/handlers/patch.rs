//! Patch Order Resource Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cafe_app::domain::orders::records::OrderId;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::OrderResponse, payload},
    state::State,
};

/// Patch Order Resource Handler
///
/// Only the fields present in the body change.
#[endpoint(
    tags("api"),
    summary = "Update Order",
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid order"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let update = payload::partial_update(&read_json(req).await?)?;

    let record = state
        .app
        .orders
        .update_order(OrderId::from_id(id.into_inner()), update)
        .await
        .map_err(into_api_error)?;

    Ok(Json(record.into()))
}
