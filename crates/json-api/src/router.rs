//! App Router

use salvo::Router;

use crate::{api, healthcheck, observability::metrics_handler, orders, revenue};

/// Every route the server exposes, without state or middleware.
///
/// Paths match with or without a trailing slash.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(Router::with_path("create").post(orders::create::handler))
                .push(
                    Router::with_path("{id:num}")
                        .get(orders::get::handler)
                        .push(
                            Router::with_path("update_status")
                                .post(orders::update_status::handler),
                        )
                        .push(
                            Router::with_path("delete")
                                .delete(orders::delete::handler)
                                .post(orders::delete::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("api/v1/orders")
                .get(api::orders::index::handler)
                .post(api::orders::create::handler)
                .push(
                    Router::with_path("{id:num}")
                        .get(api::orders::get::handler)
                        .put(api::orders::update::handler)
                        .patch(api::orders::patch::handler)
                        .delete(api::orders::delete::handler),
                ),
        )
        .push(Router::with_path("revenue").get(revenue::handler))
}
