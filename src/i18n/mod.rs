//! Internationalization (i18n) module.
//!
//! Every user-facing string (validation messages, service error messages,
//! chat replies, prompts and page labels) lives here, one table per language.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language handle validated against the registry
//! - `strings`: Localized string tables
//!
//! # Example
//!
//! ```rust,ignore
//! use career_advisor::i18n::Language;
//!
//! let english = Language::from_code("en")?;
//! println!("{}", english.strings().skills_missing);
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
