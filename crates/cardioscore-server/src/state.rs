//! Shared application state

use crate::config::ServiceConfig;
use cardioscore_model::Classifier;
use std::sync::Arc;

/// State injected into every request handler.
///
/// The classifier is loaded once at startup and never mutated afterwards, so
/// it is shared across handlers without synchronization.
#[derive(Clone)]
pub struct AppState {
    /// The loaded classifier
    pub classifier: Arc<dyn Classifier>,

    /// Service configuration
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>, config: ServiceConfig) -> Self {
        Self {
            classifier,
            config: Arc::new(config),
        }
    }
}
