use std::sync::Arc;

use wellness_storage::AssessmentStore;

use crate::config::Config;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AssessmentStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn AssessmentStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
