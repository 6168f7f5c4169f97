use crate::advisor::ProfileInput;
use crate::config::Config;
use crate::error::ServiceError;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

impl Message {
    fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Build the user prompt describing the profile
fn build_suggestion_user_prompt(profile: &ProfileInput, language: Language) -> String {
    fill_placeholders(
        language.strings().suggestion_user_prompt,
        &[
            ("{mbti}", profile.mbti.as_str()),
            ("{holland}", profile.holland.as_str()),
            ("{skills}", profile.skills.as_str()),
            ("{interests}", profile.interests.as_str()),
        ],
    )
}

/// Single pass, so user text containing a placeholder is left as typed.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                result.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                result.push('{');
                rest = &tail[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Ask the model for careers matching a validated profile
pub async fn suggest_career(
    client: &reqwest::Client,
    config: &Config,
    profile: &ProfileInput,
) -> Result<String, ServiceError> {
    let strings = config.language.strings();
    let messages = vec![
        Message::system(strings.suggestion_system_prompt),
        Message::user(build_suggestion_user_prompt(profile, config.language)),
    ];

    chat_completion(client, config, messages).await
}

/// Relay a single chat message behind the fixed chatbot preamble
pub async fn chat_reply(
    client: &reqwest::Client,
    config: &Config,
    user_message: &str,
) -> Result<String, ServiceError> {
    let messages = vec![
        Message::system(config.language.strings().chat_system_prompt),
        Message::user(user_message),
    ];

    chat_completion(client, config, messages).await
}

/// One chat-completion round trip. Returns the first choice's content, trimmed.
async fn chat_completion(
    client: &reqwest::Client,
    config: &Config,
    messages: Vec<Message>,
) -> Result<String, ServiceError> {
    let request = ChatRequest {
        model: config.openai_model.clone(),
        messages,
    };

    debug!("Sending chat completion request with model {}", request.model);

    let response = client
        .post(&config.openai_api_url)
        .header("Authorization", format!("Bearer {}", config.openai_api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        return Err(ServiceError::from_status(status, &body));
    }

    // Only a malformed body is Unknown; a stalled or dropped body keeps its kind
    let chat_response: ChatResponse = response.json().await.map_err(|e| {
        if e.is_decode() {
            ServiceError::Unknown(format!("Failed to parse OpenAI response: {}", e))
        } else {
            ServiceError::from(e)
        }
    })?;

    chat_response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content.trim().to_string())
        .ok_or_else(|| ServiceError::Unknown("OpenAI response contained no choices".to_string()))
}
