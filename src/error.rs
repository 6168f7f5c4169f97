//! External-service failures and their user-facing messages.
//!
//! Failures from the language-model API are classified into a closed set of
//! kinds at the call boundary. The localized message is looked up by kind.

use crate::i18n::Language;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("authentication with the API key failed: {0}")]
    Auth(String),

    #[error("request limit exceeded: {0}")]
    RateLimited(String),

    #[error("could not connect to OpenAI: {0}")]
    ConnectionFailed(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("timed out waiting for a response: {0}")]
    Timeout(String),

    #[error("{0}")]
    Unknown(String),
}

/// Trigger phrases for failures that only reach us as text, checked in order.
const TEXT_TRIGGERS: [(&str, fn(String) -> ServiceError); 5] = [
    ("Lỗi xác thực API Key", ServiceError::Auth),
    ("Vượt quá giới hạn request", ServiceError::RateLimited),
    ("Không thể kết nối đến OpenAI", ServiceError::ConnectionFailed),
    ("Yêu cầu không hợp lệ", ServiceError::InvalidRequest),
    ("Quá thời gian chờ phản hồi", ServiceError::Timeout),
];

impl ServiceError {
    /// Classify free error text by literal substring. First trigger wins;
    /// anything else is `Unknown` carrying the text unchanged.
    pub fn classify(text: &str) -> ServiceError {
        TEXT_TRIGGERS
            .iter()
            .find(|(trigger, _)| text.contains(trigger))
            .map(|(_, kind)| kind(text.to_string()))
            .unwrap_or_else(|| ServiceError::Unknown(text.to_string()))
    }

    /// Classify a non-success HTTP response from the API
    pub fn from_status(status: StatusCode, body: &str) -> ServiceError {
        let detail = format!("OpenAI API error ({}): {}", status, body);
        match status.as_u16() {
            401 | 403 => ServiceError::Auth(detail),
            429 => ServiceError::RateLimited(detail),
            400 | 404 | 422 => ServiceError::InvalidRequest(detail),
            408 | 504 => ServiceError::Timeout(detail),
            _ => ServiceError::Unknown(detail),
        }
    }

    /// Localized, user-facing message for this failure
    pub fn user_message(&self, language: Language) -> String {
        let strings = language.strings();
        match self {
            ServiceError::Auth(_) => strings.error_auth.to_string(),
            ServiceError::RateLimited(_) => strings.error_rate_limited.to_string(),
            ServiceError::ConnectionFailed(_) => strings.error_connection.to_string(),
            ServiceError::InvalidRequest(_) => strings.error_invalid_request.to_string(),
            ServiceError::Timeout(_) => strings.error_timeout.to_string(),
            ServiceError::Unknown(text) => system_error_message(text, language),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        let detail = e.to_string();
        if e.is_timeout() {
            ServiceError::Timeout(detail)
        } else if e.is_connect() {
            ServiceError::ConnectionFailed(detail)
        } else if let Some(status) = e.status() {
            ServiceError::from_status(status, &detail)
        } else {
            ServiceError::Unknown(detail)
        }
    }
}

/// "System error: <text>" in the given language
pub fn system_error_message(text: &str, language: Language) -> String {
    format!("{}{}", language.strings().error_system_prefix, text)
}

/// Translate stringified error text into a user-facing message
pub fn translate_error_text(text: &str, language: Language) -> String {
    ServiceError::classify(text).user_message(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: Language = Language::ENGLISH;
    const VI: Language = Language::VIETNAMESE;

    // ==================== classify Tests ====================

    #[test]
    fn test_classify_rate_limit_with_surrounding_text() {
        let text = "upstream said: Vượt quá giới hạn request (retry in 20s)";
        assert_eq!(
            ServiceError::classify(text),
            ServiceError::RateLimited(text.to_string())
        );
        assert_eq!(
            translate_error_text(text, VI),
            "Đã vượt quá giới hạn yêu cầu. Vui lòng thử lại sau."
        );
    }

    #[test]
    fn test_classify_each_trigger() {
        assert!(matches!(
            ServiceError::classify("Lỗi xác thực API Key"),
            ServiceError::Auth(_)
        ));
        assert!(matches!(
            ServiceError::classify("Không thể kết nối đến OpenAI"),
            ServiceError::ConnectionFailed(_)
        ));
        assert!(matches!(
            ServiceError::classify("Yêu cầu không hợp lệ"),
            ServiceError::InvalidRequest(_)
        ));
        assert!(matches!(
            ServiceError::classify("Quá thời gian chờ phản hồi"),
            ServiceError::Timeout(_)
        ));
    }

    #[test]
    fn test_classify_first_trigger_wins() {
        let text = "Quá thời gian chờ phản hồi sau Lỗi xác thực API Key";
        assert!(matches!(ServiceError::classify(text), ServiceError::Auth(_)));
    }

    #[test]
    fn test_unknown_text_is_embedded() {
        let message = translate_error_text("boom", EN);
        assert_eq!(message, "System error: boom");

        let message = translate_error_text("boom", VI);
        assert_eq!(message, "Lỗi hệ thống: boom");
    }

    #[test]
    fn test_empty_text_is_unknown() {
        assert_eq!(
            ServiceError::classify(""),
            ServiceError::Unknown(String::new())
        );
    }

    // ==================== from_status Tests ====================

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            ServiceError::from_status(StatusCode::UNAUTHORIZED, ""),
            ServiceError::Auth(_)
        ));
        assert!(matches!(
            ServiceError::from_status(StatusCode::FORBIDDEN, ""),
            ServiceError::Auth(_)
        ));
        assert!(matches!(
            ServiceError::from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            ServiceError::RateLimited(_)
        ));
        assert!(matches!(
            ServiceError::from_status(StatusCode::BAD_REQUEST, ""),
            ServiceError::InvalidRequest(_)
        ));
        assert!(matches!(
            ServiceError::from_status(StatusCode::GATEWAY_TIMEOUT, ""),
            ServiceError::Timeout(_)
        ));
    }

    #[test]
    fn test_from_status_unknown_keeps_body() {
        let error = ServiceError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "overloaded");
        let message = error.user_message(EN);
        assert!(message.starts_with("System error: "));
        assert!(message.contains("500"));
        assert!(message.contains("overloaded"));
    }

    // ==================== user_message Tests ====================

    #[test]
    fn test_user_message_ignores_detail() {
        let a = ServiceError::Auth("a".to_string()).user_message(EN);
        let b = ServiceError::Auth("completely different".to_string()).user_message(EN);
        assert_eq!(a, b);
        assert_eq!(a, "The API key is invalid or has expired.");
    }

    #[test]
    fn test_user_message_vietnamese() {
        assert_eq!(
            ServiceError::Timeout(String::new()).user_message(VI),
            "Yêu cầu mất quá nhiều thời gian. Hãy thử lại sau hoặc rút gọn dữ liệu."
        );
        assert_eq!(
            ServiceError::InvalidRequest(String::new()).user_message(VI),
            "Yêu cầu gửi đến OpenAI không hợp lệ. Hãy kiểm tra dữ liệu đầu vào."
        );
    }

    #[test]
    fn test_display_includes_detail() {
        let error = ServiceError::ConnectionFailed("connection refused".to_string());
        assert!(error.to_string().contains("connection refused"));
    }
}
