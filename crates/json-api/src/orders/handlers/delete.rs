//! Delete Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cafe_app::domain::orders::records::OrderId;

use crate::{errors::ApiError, extensions::*, orders::errors::into_api_error, state::State};

/// Delete Order Handler
///
/// Mounted for both `DELETE` and `POST`.
#[endpoint(
    tags("orders"),
    summary = "Delete Order",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Order deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(id: PathParam<i64>, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .orders
        .delete_order(OrderId::from_id(id.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}
