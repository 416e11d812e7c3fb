use std::sync::Arc;

use crate::config::AppConfig;
use crate::engine::AnalysisDispatcher;
use crate::error::CoreError;

/// Per-call context handed to every collaborator of one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: String,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Fresh `req_<uuid>` identifier.
    pub fn generate() -> Self {
        Self::new(format!("req_{}", uuid::Uuid::new_v4().simple()))
    }
}

/// Builds the wired dispatcher from configuration. Implemented by the plugins crate.
pub trait ServicesFactory: Send + Sync {
    fn build_dispatcher(&self, cfg: &AppConfig) -> Result<AnalysisDispatcher, CoreError>;
}

#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    services: Arc<dyn ServicesFactory>,
}

impl AppContext {
    pub fn new(cfg: AppConfig, services: Arc<dyn ServicesFactory>) -> Self {
        Self { cfg, services }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    /// Same services, different configuration.
    pub fn with_cfg(&self, cfg: AppConfig) -> Self {
        Self {
            cfg,
            services: self.services.clone(),
        }
    }

    pub fn build_dispatcher(&self) -> Result<AnalysisDispatcher, CoreError> {
        self.services.build_dispatcher(&self.cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let a = RequestContext::generate();
        let b = RequestContext::generate();
        assert!(a.request_id.starts_with("req_"));
        assert_eq!(a.request_id.len(), "req_".len() + 32);
        assert_ne!(a, b);
    }
}
