//! Raw JSON request bodies.

use salvo::Request;
use serde_json::Value;

use crate::errors::ApiError;

/// Reads the body as untyped JSON so field-level validation can report its own errors.
pub(crate) async fn read_json(req: &mut Request) -> Result<Value, ApiError> {
    req.parse_json::<Value>()
        .await
        .map_err(|error| ApiError::bad_request(format!("invalid JSON body: {error}")))
}
