use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Default: `GeminiClient`; tests use in-process stubs.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
