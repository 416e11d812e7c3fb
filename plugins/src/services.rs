//! ServicesFactory implementation: builds the dispatcher and its collaborators from config for the CLI.
use snipcheck_core::api::{AnalysisDispatcher, AppConfig, CoreError, ServicesFactory};

use crate::factory;

#[derive(Debug, Default, Clone, Copy)]
pub struct PluginServicesFactory;

impl ServicesFactory for PluginServicesFactory {
    fn build_dispatcher(&self, cfg: &AppConfig) -> Result<AnalysisDispatcher, CoreError> {
        factory::build_dispatcher(cfg).map_err(|e| CoreError::Dependency(e.to_string()))
    }
}
