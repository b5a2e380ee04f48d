//! Internal failures that never reach the client verbatim.

use std::fmt::Display;

use tracing::error;

use crate::errors::ApiError;

/// Logs the error with `context` and answers with a generic 500.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            ApiError::internal()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn test_error_becomes_internal() {
        let result: Result<(), &str> = Err("header value contains a newline");

        assert_eq!(
            result.or_500("failed to set header").map_err(|error| error.status()),
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[test]
    fn test_ok_passes_through() {
        let result: Result<u8, &str> = Ok(7);

        assert_eq!(result.or_500("unused").ok(), Some(7));
    }
}
