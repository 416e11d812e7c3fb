use std::sync::Arc;

use tracing::Instrument;

use crate::context::RequestContext;
use crate::error::CoreError;
use crate::language::LanguageDetector;
use crate::models::{AnalysisRequest, AnalysisResponse};
use crate::registry::{Capability, ToolRegistry};
use crate::sink::{PersistMode, ResultSink};

use super::summary;

/// Ties detection, tool execution and persistence together.
///
/// Every known failure is reported inside the returned response; `Err` is
/// reserved for conditions where no response can be built at all.
pub struct AnalysisDispatcher {
    detector: Arc<dyn LanguageDetector>,
    registry: Arc<ToolRegistry>,
    sink: Option<Arc<dyn ResultSink>>,
    persist_mode: PersistMode,
}

impl AnalysisDispatcher {
    pub fn new(detector: Arc<dyn LanguageDetector>, registry: Arc<ToolRegistry>) -> Self {
        Self {
            detector,
            registry,
            sink: None,
            persist_mode: PersistMode::default(),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn ResultSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_persist_mode(mut self, mode: PersistMode) -> Self {
        self.persist_mode = mode;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, CoreError> {
        let ctx = RequestContext::generate();
        let span = tracing::info_span!("analyze", request_id = %ctx.request_id);

        async move {
            let response = self.build_response(&ctx, request).await;
            self.persist(&response).await;
            Ok(response)
        }
        .instrument(span)
        .await
    }

    async fn build_response(&self, ctx: &RequestContext, request: &AnalysisRequest) -> AnalysisResponse {
        let language = match self.detector.detect(request) {
            Ok(lang) => lang,
            Err(e) => {
                tracing::error!(error = %e, "language detection failed");
                return AnalysisResponse {
                    request_id: ctx.request_id.clone(),
                    language: String::new(),
                    issues: vec![],
                    summary: summary::DETECTION_FAILED.to_string(),
                    error: summary::detection_error(&e.to_string()),
                };
            }
        };

        tracing::info!(
            detected_language = %language,
            provided_language = request.language.as_deref().unwrap_or(""),
            "language detected"
        );

        let mut response = AnalysisResponse {
            request_id: ctx.request_id.clone(),
            language: language.clone(),
            issues: vec![],
            summary: String::new(),
            error: String::new(),
        };

        match self.registry.lookup(&language) {
            Some(Capability::Runner(runner)) => {
                tracing::info!(runner = runner.name(), "dispatching to analyzer");
                match runner.run(ctx, &request.code_snippet, &request.config).await {
                    Ok(issues) => {
                        response.summary = summary::analysis_complete(&language, issues.len());
                        response.issues = issues;
                    }
                    Err(e) => {
                        tracing::error!(runner = runner.name(), kind = ?e.kind(), error = %e, "analysis failed");
                        response.summary = summary::analysis_failed(&language);
                        response.error = summary::analysis_error(&language, &e.to_string());
                    }
                }
            }
            Some(Capability::NotImplemented) => {
                tracing::info!(language = %language, "language supported but analysis not yet implemented");
                response.summary = summary::not_implemented(&language);
            }
            None => {
                tracing::warn!(language = %language, "no analyzer registered for detected language");
                response.summary = summary::UNSUPPORTED.to_string();
                response.error = summary::unsupported_error(&language);
            }
        }

        response
    }

    async fn persist(&self, response: &AnalysisResponse) {
        let Some(sink) = self.sink.clone() else {
            tracing::warn!("no result sink configured, skipping save");
            return;
        };

        match self.persist_mode {
            PersistMode::Inline => persist_once(sink.as_ref(), response).await,
            PersistMode::Background => {
                let response = response.clone();
                tokio::spawn(
                    async move { persist_once(sink.as_ref(), &response).await }
                        .instrument(tracing::Span::current()),
                );
            }
        }
    }
}

async fn persist_once(sink: &dyn ResultSink, response: &AnalysisResponse) {
    match sink.persist(response).await {
        Ok(()) => tracing::info!(sink = sink.name(), "analysis result saved"),
        Err(e) => tracing::error!(sink = sink.name(), error = %e, "failed to save analysis result"),
    }
}
