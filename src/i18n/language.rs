//! Language type: a language validated against the registry.

use super::registry::{LanguageConfig, LanguageRegistry};
use super::strings::LanguageStrings;
use anyhow::{bail, Result};

/// A validated language.
///
/// Only languages present in the registry can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "vi", "en")
    code: &'static str,
}

impl Language {
    pub const VIETNAMESE: Language = Language { code: "vi" };
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// Codes are matched case-insensitively after trimming.
    pub fn from_code(code: &str) -> Result<Language> {
        let normalized = code.trim().to_lowercase();
        let registry = LanguageRegistry::get();

        match registry.get_by_code(&normalized) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// All user-facing strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }
}

impl Default for Language {
    fn default() -> Self {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vietnamese_constant() {
        let vi = Language::VIETNAMESE;
        assert_eq!(vi.code(), "vi");
        assert_eq!(vi.name(), "Vietnamese");
    }

    #[test]
    fn test_default_is_vietnamese() {
        assert_eq!(Language::default(), Language::VIETNAMESE);
    }

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::ENGLISH);
    }

    #[test]
    fn test_from_code_normalizes_case_and_whitespace() {
        let language = Language::from_code("  VI ").expect("Should succeed");
        assert_eq!(language, Language::VIETNAMESE);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_strings_follow_language() {
        assert_eq!(
            Language::ENGLISH.strings().skills_missing,
            "Please enter your skills"
        );
        assert_eq!(
            Language::VIETNAMESE.strings().skills_missing,
            "Vui lòng nhập kỹ năng của bạn."
        );
    }
}
