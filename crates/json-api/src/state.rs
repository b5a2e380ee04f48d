//! State

use std::sync::Arc;

use cafe_app::context::AppContext;

use crate::config::api::ApiConfig;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) api: ApiConfig,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, api: ApiConfig) -> Self {
        Self { app, api }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, api: ApiConfig) -> Arc<Self> {
        Arc::new(Self::new(app, api))
    }
}
