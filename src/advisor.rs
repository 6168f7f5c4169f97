//! Profile input validation.
//!
//! Checks run in a fixed order (MBTI, Holland code, skills, interests) and the
//! first failure wins. Only character-set membership and length are checked:
//! "EEEE" is accepted as an MBTI code.

use crate::i18n::Language;
use thiserror::Error;

const MBTI_LETTERS: &str = "EISNTFJP";
const HOLLAND_LETTERS: &str = "RIASEC";
const MBTI_LEN: usize = 4;
const HOLLAND_LEN: usize = 2;

/// Raw profile as submitted by the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileInput {
    pub mbti: String,
    pub holland: String,
    pub skills: String,
    pub interests: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("MBTI must be 4 characters from EISNTFJP")]
    InvalidMbti,
    #[error("Holland code must be 2 characters from RIASEC")]
    InvalidHolland,
    #[error("skills are empty")]
    MissingSkills,
    #[error("interests are empty")]
    MissingInterests,
}

impl ValidationError {
    /// User-facing message in the given language
    pub fn message(&self, language: Language) -> &'static str {
        let strings = language.strings();
        match self {
            ValidationError::InvalidMbti => strings.mbti_invalid,
            ValidationError::InvalidHolland => strings.holland_invalid,
            ValidationError::MissingSkills => strings.skills_missing,
            ValidationError::MissingInterests => strings.interests_missing,
        }
    }
}

/// Outcome of validating one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Localized failure message, empty when valid
    pub message: String,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    fn invalid(error: ValidationError, language: Language) -> Self {
        Self {
            is_valid: false,
            message: error.message(language).to_string(),
        }
    }
}

impl ProfileInput {
    pub fn new(
        mbti: impl Into<String>,
        holland: impl Into<String>,
        skills: impl Into<String>,
        interests: impl Into<String>,
    ) -> Self {
        Self {
            mbti: mbti.into(),
            holland: holland.into(),
            skills: skills.into(),
            interests: interests.into(),
        }
    }

    /// Build from url-encoded form pairs. The first value of a repeated key
    /// wins; absent keys are empty; unknown keys are ignored.
    pub fn from_form_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };

        Self::new(
            first("mbti"),
            first("holland"),
            first("skills"),
            first("interests"),
        )
    }

    /// Every field trimmed, case left as typed
    pub fn trimmed(&self) -> ProfileInput {
        ProfileInput::new(
            self.mbti.trim(),
            self.holland.trim(),
            self.skills.trim(),
            self.interests.trim(),
        )
    }

    /// Validate and normalize the profile.
    ///
    /// On success the codes are trimmed and uppercased and the free text is
    /// trimmed.
    pub fn validate(&self) -> Result<ProfileInput, ValidationError> {
        let mbti = self.mbti.trim().to_uppercase();
        let holland = self.holland.trim().to_uppercase();

        if !is_code(&mbti, MBTI_LEN, MBTI_LETTERS) {
            return Err(ValidationError::InvalidMbti);
        }
        if !is_code(&holland, HOLLAND_LEN, HOLLAND_LETTERS) {
            return Err(ValidationError::InvalidHolland);
        }

        let skills = self.skills.trim();
        if skills.is_empty() {
            return Err(ValidationError::MissingSkills);
        }
        let interests = self.interests.trim();
        if interests.is_empty() {
            return Err(ValidationError::MissingInterests);
        }

        Ok(ProfileInput {
            mbti,
            holland,
            skills: skills.to_string(),
            interests: interests.to_string(),
        })
    }
}

/// Length is counted in characters, not bytes.
fn is_code(code: &str, len: usize, allowed: &str) -> bool {
    code.chars().count() == len && code.chars().all(|c| allowed.contains(c))
}

/// Validate the four profile fields, reporting the first failure in `language`.
pub fn validate(
    mbti: &str,
    holland: &str,
    skills: &str,
    interests: &str,
    language: Language,
) -> ValidationResult {
    match ProfileInput::new(mbti, holland, skills, interests).validate() {
        Ok(_) => ValidationResult::valid(),
        Err(e) => ValidationResult::invalid(e, language),
    }
}
