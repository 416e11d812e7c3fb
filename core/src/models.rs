//! Wire types shared by the dispatcher, the runners and the transport.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque tool options forwarded from the request to the runner untouched.
pub type ToolOptions = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub code_snippet: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config: ToolOptions,
}

impl AnalysisRequest {
    pub fn new(code_snippet: impl Into<String>) -> Self {
        Self {
            code_snippet: code_snippet.into(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized finding. Lines and columns are 1-based.
///
/// `file_path` is the base name of the temporary artifact the tool was pointed
/// at; it does not identify anything in the caller's project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub rule_id: String,
    pub message: String,
    pub severity: Severity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    pub line_start: u32,
    pub line_end: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_start: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_end: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub request_id: String,

    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub issues: Vec<Issue>,

    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl AnalysisResponse {
    /// `true` when no data-level failure was recorded. A "not yet implemented"
    /// response is a success.
    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_accepts_minimal_body() {
        let req: AnalysisRequest = serde_json::from_str(r#"{"code_snippet":"x = 1"}"#).unwrap();
        assert_eq!(req.code_snippet, "x = 1");
        assert_eq!(req.language, None);
        assert!(req.config.is_empty());
    }

    #[test]
    fn request_keeps_config_values_verbatim() {
        let req: AnalysisRequest = serde_json::from_str(
            r#"{"code_snippet":"a.py","language":"Python","project_url":"https://x","config":{"select":["E","F"],"line_length":100}}"#,
        )
        .unwrap();
        assert_eq!(req.language.as_deref(), Some("Python"));
        assert_eq!(req.config["select"], serde_json::json!(["E", "F"]));
        assert_eq!(req.config["line_length"], serde_json::json!(100));
    }

    #[test]
    fn response_omits_empty_error_and_keeps_empty_issues() {
        let resp = AnalysisResponse {
            request_id: "req_1".into(),
            language: "go".into(),
            issues: vec![],
            summary: "Analysis for go is not yet implemented.".into(),
            error: String::new(),
        };
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["issues"], serde_json::json!([]));
        assert!(v.get("error").is_none());
        assert!(resp.is_success());
    }

    #[test]
    fn issue_serializes_lowercase_severity_and_skips_missing_columns() {
        let issue = Issue {
            rule_id: "F401".into(),
            message: "`os` imported but unused".into(),
            severity: Severity::Error,
            file_path: Some("snippet_ab12.py".into()),
            line_start: 1,
            line_end: 1,
            column_start: None,
            column_end: None,
            suggestion: None,
        };
        let v = serde_json::to_value(&issue).unwrap();
        assert_eq!(v["severity"], "error");
        assert!(v.get("column_start").is_none());
        assert!(v.get("suggestion").is_none());
    }
}
