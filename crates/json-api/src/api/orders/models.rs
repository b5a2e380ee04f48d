//! Order Resource Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use crate::orders::models::OrderResponse;

/// One page of the order collection
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersListResponse {
    /// Orders matching across all pages
    pub count: u64,

    /// Next page number, if any
    pub next: Option<u64>,

    /// Previous page number, if any
    pub previous: Option<u64>,

    /// Orders on this page, newest first
    pub results: Vec<OrderResponse>,
}
