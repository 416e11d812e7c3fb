// core/src/error/core_error.rs
use thiserror::Error;

/// Failures that prevent the dispatcher from producing any response at all.
///
/// Detection and tool failures never surface here; they are reported inside
/// `AnalysisResponse::error` instead.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("dependency error: {0}")]
    Dependency(String),
}
