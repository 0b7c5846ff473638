pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;
use crate::ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form
        .route("/", get(ui::handle_form).post(ui::handle_form_submit))
        // Generation API
        .route("/api/v1/generate", post(handlers::handle_generate))
        .route("/api/v1/counter", get(handlers::handle_counter))
        .with_state(state)
}
