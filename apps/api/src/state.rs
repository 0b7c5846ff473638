use std::sync::Arc;

use crate::generation::counter::SessionCounter;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, swapped for a fake in tests.
    pub llm: Arc<dyn CompletionBackend>,
    pub counter: SessionCounter,
}
