use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::RunnerError;
use crate::models::{Issue, ToolOptions};

/// Runs one external analyzer against a snippet and normalizes its findings.
///
/// Issues come back in the order the tool reported them.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    fn name(&self) -> &str;

    async fn run(
        &self,
        ctx: &RequestContext,
        code_snippet: &str,
        options: &ToolOptions,
    ) -> Result<Vec<Issue>, RunnerError>;
}
