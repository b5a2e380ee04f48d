//! Create Order Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, payload},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatedResponse {
    /// Id of the new order
    pub id: i64,

    /// Always `created`
    pub status: String,
}

/// Create Order Handler
///
/// Accepts `{table_number, items}` and stores a pending order.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid order"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order = payload::new_order(&read_json(req).await?)?;

    let created = state
        .app
        .orders
        .create_order(order)
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(CreatedResponse {
        id: created.id.into_id(),
        status: "created".to_string(),
    }))
}
