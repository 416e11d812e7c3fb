//! Human-readable outcome lines. Transport status mapping keys off some of
//! these substrings, so keep the wording stable.

pub(crate) const DETECTION_FAILED: &str = "Failed to detect language from request.";
pub(crate) const UNSUPPORTED: &str = "Language is not supported for analysis.";

pub(crate) fn detection_error(detail: &str) -> String {
    format!("Language detection failed: {detail}")
}

pub(crate) fn analysis_complete(language: &str, count: usize) -> String {
    format!(
        "{} analysis complete. Found {} issues.",
        display_name(language),
        count
    )
}

pub(crate) fn analysis_failed(language: &str) -> String {
    format!("{} analysis encountered an error.", display_name(language))
}

pub(crate) fn analysis_error(language: &str, detail: &str) -> String {
    format!("{} analysis error: {}", display_name(language), detail)
}

pub(crate) fn not_implemented(language: &str) -> String {
    format!("Analysis for {language} is not yet implemented.")
}

pub(crate) fn unsupported_error(language: &str) -> String {
    format!("Unsupported language for analysis: {language}")
}

fn display_name(language: &str) -> String {
    let mut chars = language.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
