//! Revenue Report Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, orders::errors::into_api_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RevenueResponse {
    /// Sum of paid order totals, two decimal places
    pub total_revenue: String,
}

/// Revenue Report Handler
///
/// Totals every paid order.
#[endpoint(
    tags("reporting"),
    summary = "Total Revenue",
    responses(
        (status_code = StatusCode::OK, description = "Revenue computed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<RevenueResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let total = state
        .app
        .orders
        .total_revenue()
        .await
        .map_err(into_api_error)?;

    Ok(Json(RevenueResponse {
        total_revenue: format!("{total:.2}"),
    }))
}
