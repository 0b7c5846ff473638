//! Text generation — validates a submission, builds the prompt, calls the
//! completion backend and turns the outcome into a displayable result.
//!
//! Flow: validate → build_prompt → backend.complete → GenerationResult → counter.
//!
//! Provider failures never fail the request: they become result text with an
//! error prefix, and `failed` is set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::counter::SessionCounter;
use crate::generation::language::Language;
use crate::generation::prompts::build_prompt;
use crate::llm_client::prompts::SYSTEM_MESSAGE;
use crate::llm_client::{CompletionBackend, LlmError};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One form submission. Every field except `job_description` may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub job_description: String,
    pub mandatory_requirements: String,
    pub preferred_requirements: String,
    pub tech_stack: String,
    pub language: Language,
}

impl GenerationRequest {
    /// Rejects a blank job description with a message in the request's language.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.job_description.trim().is_empty() {
            return Err(AppError::Validation(
                self.language.empty_description_error().to_string(),
            ));
        }
        Ok(())
    }

    pub fn prompt(&self) -> String {
        build_prompt(
            &self.job_description,
            &self.mandatory_requirements,
            &self.preferred_requirements,
            &self.tech_stack,
            self.language,
        )
    }
}

/// Text shown to the user, either a completion or an error message.
///
/// `character_count` is always derived from `text`; there is no way to set it independently.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    text: String,
    character_count: usize,
    model: String,
    failed: bool,
    generated_at: DateTime<Utc>,
}

impl GenerationResult {
    fn new(text: String, model: &str, failed: bool) -> Self {
        Self {
            character_count: text.chars().count(),
            text,
            model: model.to_string(),
            failed,
            generated_at: Utc::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn character_count(&self) -> usize {
        self.character_count
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn failed(&self) -> bool {
        self.failed
    }
}

/// A finished interaction: the result plus the counter value after it.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    #[serde(flatten)]
    pub result: GenerationResult,
    pub generated_count: u64,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Calls the backend once and converts any failure into user-visible text.
pub async fn generate_text(
    backend: &dyn CompletionBackend,
    request: &GenerationRequest,
) -> GenerationResult {
    let prompt = request.prompt();

    match backend.complete(&prompt, SYSTEM_MESSAGE).await {
        Ok(text) => {
            info!(
                "Generated {} characters with {}",
                text.chars().count(),
                backend.model()
            );
            GenerationResult::new(text, backend.model(), false)
        }
        Err(e) => {
            warn!("Generation failed: {e}");
            GenerationResult::new(failure_message(&e), backend.model(), true)
        }
    }
}

/// Full interaction: validate, generate, then count the attempt.
///
/// The counter moves on every attempted call, successful or not. A blank
/// description is rejected before the call and is not counted.
pub async fn generate_and_count(
    backend: &dyn CompletionBackend,
    counter: &SessionCounter,
    request: &GenerationRequest,
) -> Result<GenerationOutcome, AppError> {
    request.validate()?;

    let result = generate_text(backend, request).await;
    let generated_count = counter.increment();
    info!("Generation #{generated_count} finished (failed={})", result.failed());

    Ok(GenerationOutcome {
        result,
        generated_count,
    })
}

/// Maps a client error onto the message shown in place of the generated text.
pub fn failure_message(error: &LlmError) -> String {
    match error {
        LlmError::MissingApiKey | LlmError::Http(_) | LlmError::Api { .. } => {
            format!("Erro na API OpenAI: {error}")
        }
        LlmError::Parse(_) => format!("Erro de valor inválido: {error}"),
        LlmError::EmptyContent => format!("Erro ao acessar resposta da API: {error}"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
