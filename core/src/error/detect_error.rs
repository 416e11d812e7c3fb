// core/src/error/detect_error.rs
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    /// Carries the hint exactly as the caller supplied it.
    #[error("language '{0}' is not supported")]
    UnsupportedLanguage(String),

    #[error("unable to detect language from request and code_snippet does not have a recognized extension")]
    LanguageUndetermined,
}
