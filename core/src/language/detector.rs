use std::path::Path;

use crate::error::DetectError;
use crate::models::AnalysisRequest;

use super::table::{is_supported, language_for_extension};

pub trait LanguageDetector: Send + Sync {
    fn detect(&self, request: &AnalysisRequest) -> Result<String, DetectError>;
}

/// Hint first, then file extension of `code_snippet`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtensionDetector;

impl LanguageDetector for ExtensionDetector {
    fn detect(&self, request: &AnalysisRequest) -> Result<String, DetectError> {
        // Only an empty string counts as "no hint"; whitespace is a hint that fails.
        if let Some(raw) = request.language.as_deref().filter(|l| !l.is_empty()) {
            let normalized = raw.trim().to_lowercase();
            if is_supported(&normalized) {
                return Ok(normalized);
            }
            return Err(DetectError::UnsupportedLanguage(raw.to_string()));
        }

        snippet_extension(&request.code_snippet)
            .and_then(language_for_extension)
            .map(str::to_string)
            .ok_or(DetectError::LanguageUndetermined)
    }
}

/// The trailing extension when the snippet reads like a single file name.
fn snippet_extension(snippet: &str) -> Option<&str> {
    let trimmed = snippet.trim();
    if trimmed.is_empty() || trimmed.contains('\n') {
        return None;
    }
    Path::new(trimmed).extension().and_then(|e| e.to_str())
}
