//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cafe_app::domain::orders::records::OrderId;

use crate::{errors::ApiError, extensions::*, orders::errors::into_api_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatedResponse {
    /// Always `updated`
    pub status: String,
}

/// Update Order Status Handler
///
/// Accepts `{status}` naming one of `pending`, `ready` or `paid`.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let body = read_json(req).await?;

    let Some(status) = body.get("status").and_then(Value::as_str) else {
        return Err(ApiError::bad_request("Invalid status"));
    };

    state
        .app
        .orders
        .update_status(OrderId::from_id(id.into_inner()), status.to_string())
        .await
        .map_err(into_api_error)?;

    Ok(Json(UpdatedResponse {
        status: "updated".to_string(),
    }))
}
