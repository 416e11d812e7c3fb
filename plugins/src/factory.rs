use std::sync::Arc;

use anyhow::Result;

use snipcheck_core::api::{
    AnalysisDispatcher, AppConfig, ExtensionDetector, ResultSink, ToolRegistry,
};

use crate::runner::RuffRunner;
use crate::sink::HttpResultSink;

/// Languages that are recognized but have no analyzer yet.
const PENDING_LANGUAGES: &[&str] = &["go", "javascript", "typescript"];

pub fn build_registry(cfg: &AppConfig) -> ToolRegistry {
    let ruff = RuffRunner::new(&cfg.tools.ruff);
    ruff.probe();

    PENDING_LANGUAGES
        .iter()
        .fold(ToolRegistry::builder(), |b, lang| b.not_implemented(lang))
        .runner("python", Arc::new(ruff))
        .build()
}

pub fn build_sink(cfg: &AppConfig) -> Result<Option<Arc<dyn ResultSink>>> {
    if !cfg.storage.enabled {
        return Ok(None);
    }
    let sink = HttpResultSink::new(
        &cfg.storage.base_url,
        &cfg.storage.api_key,
        cfg.storage.timeout_ms,
    )?;
    tracing::info!(url = %sink.endpoint(), "result sink initialized");
    Ok(Some(Arc::new(sink)))
}

pub fn build_dispatcher(cfg: &AppConfig) -> Result<AnalysisDispatcher> {
    let registry = Arc::new(build_registry(cfg));
    let dispatcher = AnalysisDispatcher::new(Arc::new(ExtensionDetector), registry)
        .with_persist_mode(cfg.storage.persist);

    Ok(match build_sink(cfg)? {
        Some(sink) => dispatcher.with_sink(sink),
        None => dispatcher,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipcheck_core::api::Capability;

    #[test]
    fn registry_wires_python_and_marks_the_rest_pending() {
        let reg = build_registry(&AppConfig::default());
        assert!(matches!(reg.lookup("python"), Some(Capability::Runner(r)) if r.name() == "ruff"));
        for lang in PENDING_LANGUAGES {
            assert!(matches!(reg.lookup(lang), Some(Capability::NotImplemented)));
        }
        assert_eq!(reg.languages(), vec!["go", "javascript", "python", "typescript"]);
    }

    #[test]
    fn disabled_storage_has_no_sink() {
        let mut cfg = AppConfig::default();
        cfg.storage.enabled = false;
        assert!(build_sink(&cfg).unwrap().is_none());
        cfg.storage.enabled = true;
        assert!(build_sink(&cfg).unwrap().is_some());
    }
}
