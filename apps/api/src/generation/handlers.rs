//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{generate_and_count, GenerationOutcome, GenerationRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CounterResponse {
    pub generated_count: u64,
}

/// POST /api/v1/generate
///
/// Generates ATS-friendly text from the submitted job posting and skills.
/// Provider failures still return 200, with `failed: true` and the error text in `text`.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationOutcome>, AppError> {
    let outcome = generate_and_count(state.llm.as_ref(), &state.counter, &request).await?;
    Ok(Json(outcome))
}

/// GET /api/v1/counter
pub async fn handle_counter(State(state): State<AppState>) -> Json<CounterResponse> {
    Json(CounterResponse {
        generated_count: state.counter.get(),
    })
}
