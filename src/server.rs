//! HTTP surface: routing, handlers and the outermost error boundary.

use crate::advisor::ProfileInput;
use crate::config::Config;
use crate::error::system_error_message;
use crate::i18n::Language;
use crate::{openai, render};
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::sync::{Arc, Once};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

thread_local! {
    /// Backtrace of the last panic on this thread, recorded by the panic hook
    static PANIC_BACKTRACE: RefCell<Option<String>> = const { RefCell::new(None) };
}

static PANIC_HOOK: Once = Once::new();

/// Record a backtrace for every panic so the error boundary can report it.
///
/// The boundary runs on the panicking thread after unwinding, where the
/// original stack is gone. Safe to call more than once.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let backtrace = Backtrace::force_capture().to_string();
            PANIC_BACKTRACE.with(|slot| *slot.borrow_mut() = Some(backtrace));
            previous(info);
        }));
    });
}

/// Shared, read-only state handed to every handler
pub struct AppState {
    pub config: Config,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: Config, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatbotRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatbotResponse {
    pub reply: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    let language = state.config.language;
    let expose_error_details = state.config.expose_error_details;

    Router::new()
        .route("/", get(index))
        .route("/career-result", post(career_result))
        .route("/chatbot", post(chatbot))
        .route("/health", get(health))
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
            panic_response(panic, language, expose_error_details)
        }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `0.0.0.0:PORT` and serve until the process is stopped
pub async fn serve(config: Config) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render::index_page(state.config.language))
}

async fn health() -> &'static str {
    "OK"
}

async fn career_result(
    State(state): State<Arc<AppState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let language = state.config.language;

    // Unreadable bodies behave like an empty form
    let submitted = match form {
        Ok(Form(pairs)) => ProfileInput::from_form_pairs(&pairs).trimmed(),
        Err(rejection) => {
            warn!("Could not read career form: {}", rejection);
            ProfileInput::default()
        }
    };

    info!(
        "Data received: MBTI={}, Holland={}",
        submitted.mbti, submitted.holland
    );

    // The model gets the normalized codes; the page shows what was typed
    let profile = match submitted.validate() {
        Ok(profile) => profile,
        Err(e) => {
            info!("Profile rejected: {}", e);
            return error_response(StatusCode::BAD_REQUEST, language, e.message(language), None);
        }
    };

    match openai::suggest_career(&state.client, &state.config, &profile).await {
        Ok(suggestion) => {
            Html(render::result_page(language, &submitted, &suggestion)).into_response()
        }
        Err(e) => {
            error!("Suggestion request failed: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                language,
                &e.user_message(language),
                None,
            )
        }
    }
}

async fn chatbot(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatbotRequest>, JsonRejection>,
) -> (StatusCode, Json<ChatbotResponse>) {
    let strings = state.config.language.strings();
    let failure = || {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatbotResponse {
                reply: strings.chat_failure.to_string(),
            }),
        )
    };

    let message = match payload {
        Ok(Json(request)) => request.message.trim().to_string(),
        Err(rejection) => {
            error!("Could not read chat request: {}", rejection);
            return failure();
        }
    };

    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatbotResponse {
                reply: strings.chat_empty.to_string(),
            }),
        );
    }

    info!("User message: {}", message);

    match openai::chat_reply(&state.client, &state.config, &message).await {
        Ok(reply) => {
            info!("Bot reply: {}", reply);
            (StatusCode::OK, Json(ChatbotResponse { reply }))
        }
        Err(e) => {
            error!("Chat request failed: {}", e);
            failure()
        }
    }
}

fn error_response(
    status: StatusCode,
    language: Language,
    message: &str,
    detail: Option<&str>,
) -> Response {
    (status, Html(render::error_page(language, message, detail))).into_response()
}

fn panic_response(
    panic: Box<dyn Any + Send + 'static>,
    language: Language,
    expose_error_details: bool,
) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };

    let backtrace = PANIC_BACKTRACE.with(|slot| slot.borrow_mut().take());
    error!(
        "Unexpected error: {}\n{}",
        detail,
        backtrace.as_deref().unwrap_or("<no backtrace recorded>")
    );

    let message = system_error_message(&detail, language);
    let shown = backtrace.as_deref().filter(|_| expose_error_details);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, language, &message, shown)
}
