//! Order Collection Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use cafe_app::domain::orders::data::OrdersFilter;

use crate::{
    api::orders::models::OrdersListResponse,
    errors::ApiError,
    extensions::*,
    orders::errors::into_api_error,
    state::State,
};

/// Order Collection Handler
///
/// Returns one page of orders, newest first.
#[endpoint(
    tags("api"),
    summary = "List Orders (paginated)",
    responses(
        (status_code = StatusCode::OK, description = "Page of orders"),
        (status_code = StatusCode::NOT_FOUND, description = "Invalid page"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    page: QueryParam<String, false>,
    page_size: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersListResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let params = PageParams::resolve(page.as_deref(), page_size.as_deref(), state.api)?;

    let page = state
        .app
        .orders
        .list_orders(OrdersFilter::default(), params.request())
        .await
        .map_err(into_api_error)?;

    params.ensure_in_range(page.total)?;

    let links = PageLinks::new(params, page.total);

    Ok(Json(OrdersListResponse {
        count: page.total,
        next: links.next,
        previous: links.previous,
        results: page.orders.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use cafe_app::domain::orders::{
        MockOrdersService,
        data::{OrdersPage, PageRequest},
    };

    use crate::test_helpers::{make_record, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("api/v1/orders").get(handler))
    }

    #[tokio::test]
    async fn test_first_page_uses_default_size() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .withf(|_, page| *page == PageRequest { offset: 0, limit: 10 })
            .return_once(|_, _| {
                Ok(OrdersPage {
                    orders: (1..=10).rev().map(make_record).collect(),
                    total: 12,
                })
            });

        let mut res = TestClient::get("http://example.com/api/v1/orders/")
            .send(&make_service(orders))
            .await;

        let body: OrdersListResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.count, 12);
        assert_eq!(body.next, Some(2));
        assert_eq!(body.previous, None);
        assert_eq!(body.results.len(), 10);

        Ok(())
    }

    #[tokio::test]
    async fn test_last_page_has_no_next() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .withf(|_, page| *page == PageRequest { offset: 5, limit: 5 })
            .return_once(|_, _| {
                Ok(OrdersPage {
                    orders: vec![make_record(2), make_record(1)],
                    total: 7,
                })
            });

        let mut res = TestClient::get("http://example.com/api/v1/orders?page=2&page_size=5")
            .send(&make_service(orders))
            .await;

        let body: OrdersListResponse = res.take_json().await?;

        assert_eq!(body.next, None);
        assert_eq!(body.previous, Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn test_page_past_the_end_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .return_once(|_, _| Ok(OrdersPage { orders: Vec::new(), total: 3 }));

        let res = TestClient::get("http://example.com/api/v1/orders?page=9")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_numeric_page_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_list_orders().never();

        let res = TestClient::get("http://example.com/api/v1/orders?page=first")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
