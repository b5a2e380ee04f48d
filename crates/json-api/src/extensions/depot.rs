//! Typed depot lookups.

use std::any::{Any, type_name};

use salvo::prelude::Depot;
use tracing::error;

use crate::errors::ApiError;

/// Reads injected state, treating its absence as a wiring bug.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!("depot is missing {}", type_name::<T>());

            ApiError::internal()
        })
    }
}
