//! Page-number pagination for resource collections.

use cafe_app::domain::orders::data::PageRequest;

use crate::{config::api::ApiConfig, errors::ApiError};

const INVALID_PAGE: &str = "Invalid page.";

/// A validated `page` / `page_size` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageParams {
    pub page: u64,
    pub page_size: u64,
}

impl PageParams {
    /// `page` defaults to 1 and must be a positive integer. `page_size` falls back to the
    /// configured default when absent or unusable and is capped at the configured maximum.
    pub(crate) fn resolve(
        page: Option<&str>,
        page_size: Option<&str>,
        config: ApiConfig,
    ) -> Result<Self, ApiError> {
        let page = match page {
            None => 1,
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|page| *page >= 1)
                .ok_or_else(|| ApiError::not_found(INVALID_PAGE))?,
        };

        let page_size = page_size
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|size| *size >= 1)
            .map_or(config.default_page_size, |size| {
                size.min(config.max_page_size)
            })
            .max(1);

        Ok(Self { page, page_size })
    }

    pub(crate) fn request(self) -> PageRequest {
        PageRequest::page(self.page, self.page_size)
    }

    /// Number of pages needed for `total` rows. An empty collection still has one page.
    pub(crate) fn page_count(self, total: u64) -> u64 {
        total.div_ceil(self.page_size).max(1)
    }

    /// Pages past the end are an error, except the first page of an empty collection.
    pub(crate) fn ensure_in_range(self, total: u64) -> Result<(), ApiError> {
        if self.page > self.page_count(total) {
            return Err(ApiError::not_found(INVALID_PAGE));
        }

        Ok(())
    }
}

/// Neighbouring page numbers, `None` at either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageLinks {
    pub next: Option<u64>,
    pub previous: Option<u64>,
}

impl PageLinks {
    pub(crate) fn new(params: PageParams, total: u64) -> Self {
        let last = params.page_count(total);

        Self {
            next: (params.page < last).then(|| params.page + 1),
            previous: (params.page > 1).then(|| params.page - 1),
        }
    }
}
