//! Resource API Config

use clap::Args;

/// Pagination settings for `/api/v1` collections.
#[derive(Debug, Clone, Copy, Args)]
pub struct ApiConfig {
    /// Page size used when a request does not ask for one
    #[arg(long, env = "API_DEFAULT_PAGE_SIZE", default_value_t = 10)]
    pub default_page_size: u64,

    /// Largest page size a request may ask for
    #[arg(long, env = "API_MAX_PAGE_SIZE", default_value_t = 100)]
    pub max_page_size: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}
