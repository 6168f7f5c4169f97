use crate::i18n::Language;
use anyhow::{Context, Result};

/// Fine-tuned model used when `OPENAI_MODEL` is not set
pub const DEFAULT_MODEL: &str = "ft:gpt-3.5-turbo-0125:personal::BLnytmJ2";

pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_PORT: u16 = 5000;

/// Process configuration, read once at startup and immutable afterwards
#[derive(Debug, Clone)]
pub struct Config {
    // OpenAI
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_api_url: String,

    // Server
    pub port: u16,

    /// Language for messages, prompts and pages
    pub language: Language,

    /// Show the recorded panic backtrace on the 500 page of a crashed handler.
    /// Service-error pages never carry it.
    pub expose_error_details: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", v))?,
            Err(_) => DEFAULT_PORT,
        };

        let language = match std::env::var("APP_LANGUAGE") {
            Ok(code) => Language::from_code(&code).context("Invalid APP_LANGUAGE")?,
            Err(_) => Language::default(),
        };

        Ok(Self {
            // OpenAI
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY not set")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),

            // Server
            port,
            language,
            expose_error_details: std::env::var("EXPOSE_ERROR_DETAILS")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
        })
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
