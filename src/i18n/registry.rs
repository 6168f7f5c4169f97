//! Language registry: Single source of truth for all supported languages.
//!
//! Uses a singleton with `OnceLock`; the registry is immutable after first access.

use super::strings::{LanguageStrings, ENGLISH_STRINGS, VIETNAMESE_STRINGS};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "vi", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Vietnamese")
    pub name: &'static str,

    /// Whether this is the language used when none is configured (only one should be true)
    pub is_default: bool,

    /// User-facing strings
    pub strings: &'static LanguageStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if zero or several languages are flagged as default (a
    /// configuration error in `default_languages`).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

/// Vietnamese (default) and English.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "vi",
            name: "Vietnamese",
            is_default: true,
            strings: &VIETNAMESE_STRINGS,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            is_default: false,
            strings: &ENGLISH_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_vietnamese() {
        let config = LanguageRegistry::get()
            .get_by_code("vi")
            .expect("vi should exist");

        assert_eq!(config.name, "Vietnamese");
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_exactly_one_default() {
        let default = LanguageRegistry::get().default_language();
        assert_eq!(default.code, "vi");
    }

    #[test]
    fn test_get_by_code_english_is_not_default() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("en should exist");

        assert_eq!(config.name, "English");
        assert!(!config.is_default);
    }
}
