//! Server-rendered HTML form. Same pipeline as the JSON API, rendered through minijinja.

use std::sync::OnceLock;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use minijinja::{AutoEscape, Environment};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::errors::AppError;
use crate::generation::generator::{generate_and_count, GenerationRequest, GenerationResult};
use crate::generation::language::{Labels, Language};
use crate::state::AppState;

const PAGE_TEMPLATE_NAME: &str = "page.html";
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Template environment, compiled once. A template that fails to compile is
/// logged here and surfaces as a not-found error on every render.
fn environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| {
        let mut env = Environment::new();
        // All user text ends up inside HTML.
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        if let Err(err) = env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE) {
            error!("failed to compile page template: {err}");
        }
        env
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[derive(Serialize)]
struct PageContext<'a> {
    lang: &'static str,
    labels: &'static Labels,
    model: &'a str,
    generated_count: u64,
    form: &'a GenerationRequest,
    error: Option<&'a str>,
    result: Option<&'a GenerationResult>,
}

fn render_page(
    state: &AppState,
    form: &GenerationRequest,
    generated_count: u64,
    error: Option<&str>,
    result: Option<&GenerationResult>,
) -> Result<String, AppError> {
    let language = form.language;
    let ctx = PageContext {
        lang: language.code(),
        labels: language.labels(),
        model: state.llm.model(),
        generated_count,
        form,
        error,
        result,
    };
    Ok(environment().get_template(PAGE_TEMPLATE_NAME)?.render(&ctx)?)
}

/// GET /?lang=pt|en
pub async fn handle_form(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Result<Html<String>, AppError> {
    let form = GenerationRequest {
        language: query.lang.as_deref().map(Language::parse).unwrap_or_default(),
        ..GenerationRequest::default()
    };
    let page = render_page(&state, &form, state.counter.get(), None, None)?;
    Ok(Html(page))
}

/// POST / (application/x-www-form-urlencoded)
///
/// Renders the form again with either the validation error or the generated text.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(form): Form<GenerationRequest>,
) -> Result<(StatusCode, Html<String>), AppError> {
    debug!("Form submitted (language={})", form.language.code());

    match generate_and_count(state.llm.as_ref(), &state.counter, &form).await {
        Ok(outcome) => {
            let page = render_page(
                &state,
                &form,
                outcome.generated_count,
                None,
                Some(&outcome.result),
            )?;
            Ok((StatusCode::OK, Html(page)))
        }
        Err(AppError::Validation(message)) => {
            let page = render_page(&state, &form, state.counter.get(), Some(&message), None)?;
            Ok((StatusCode::BAD_REQUEST, Html(page)))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::counter::SessionCounter;
    use crate::generation::generator::tests::FakeBackend;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState {
            llm: Arc::new(FakeBackend::replying("irrelevant")),
            counter: SessionCounter::new(),
        }
    }

    #[test]
    fn test_page_template_is_registered_once() {
        let env = environment();
        assert!(env.get_template(PAGE_TEMPLATE_NAME).is_ok());
        assert!(std::ptr::eq(env, environment()));
    }

    #[test]
    fn test_template_compiles_and_shows_localized_labels() {
        let state = state();
        let en = GenerationRequest {
            language: Language::English,
            ..Default::default()
        };
        let page = render_page(&state, &en, 3, None, None).unwrap();
        assert!(page.contains("ATS-Friendly Text Generator"));
        assert!(page.contains("Generate Text"));
        assert!(page.contains("<code>fake-model</code>"));
        assert!(page.contains(r#"<div id="generated-count">3</div>"#));

        let pt = GenerationRequest::default();
        let page = render_page(&state, &pt, 0, None, None).unwrap();
        assert!(page.contains("Gerador de Texto ATS-Friendly"));
        assert!(page.contains("Descrição da Vaga"));
    }

    #[test]
    fn test_user_text_is_html_escaped() {
        let state = state();
        let form = GenerationRequest {
            job_description: "<script>alert(1)</script>".to_string(),
            ..Default::default()
        };
        let page = render_page(&state, &form, 0, None, None).unwrap();
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_message_is_rendered() {
        let state = state();
        let form = GenerationRequest::default();
        let page = render_page(
            &state,
            &form,
            0,
            Some("A descrição da vaga não pode estar vazia."),
            None,
        )
        .unwrap();
        assert!(page.contains("A descrição da vaga não pode estar vazia."));
        assert!(!page.contains(r#"id="character-count""#));
    }
}
