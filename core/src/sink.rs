//! Where finished responses are persisted.
//!
//! Exactly one attempt is made per response. Errors are observational only:
//! the dispatcher logs them and never lets them reach the caller.

use async_trait::async_trait;

use crate::error::SinkError;
use crate::models::AnalysisResponse;

#[async_trait]
pub trait ResultSink: Send + Sync {
    fn name(&self) -> &str;

    async fn persist(&self, response: &AnalysisResponse) -> Result<(), SinkError>;
}

/// When persistence happens relative to returning the response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistMode {
    /// Await the sink before returning. Failures are still only logged.
    Inline,
    /// Spawn the sink call on the runtime and return immediately.
    #[default]
    Background,
}
