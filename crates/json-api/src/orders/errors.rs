//! Order Errors

use tracing::error;

use cafe_app::domain::orders::OrdersServiceError;

use crate::{errors::ApiError, orders::payload::PayloadError};

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::NotFound => ApiError::not_found("Order not found"),
        OrdersServiceError::Order(source) => ApiError::bad_request(source.to_string()),
        OrdersServiceError::MissingRequiredData | OrdersServiceError::InvalidData => {
            ApiError::bad_request("Invalid data")
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage failure: {source}");

            ApiError::internal()
        }
    }
}

impl From<PayloadError> for ApiError {
    fn from(error: PayloadError) -> Self {
        ApiError::bad_request(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use cafe::{orders::OrderError, status::InvalidStatus};
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn test_not_found_is_404() {
        assert_eq!(
            into_api_error(OrdersServiceError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_domain_errors_are_400() {
        let error = OrdersServiceError::Order(OrderError::InvalidStatus(InvalidStatus(
            "served".to_string(),
        )));

        assert_eq!(into_api_error(error).status(), StatusCode::BAD_REQUEST);
    }
}
