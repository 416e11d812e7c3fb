//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `snipcheck_core::api` instead of reaching into internal modules.

pub use crate::config::{
    AppConfig, HttpServerConfig, LoggingConfig, RuffConfig, StorageConfig, ToolsConfig,
};
pub use crate::context::{AppContext, RequestContext, ServicesFactory};
pub use crate::engine::AnalysisDispatcher;
pub use crate::error::{
    CliError, ConfigError, CoreError, DetectError, RunnerError, RunnerErrorKind, SinkError,
};
pub use crate::language::{ExtensionDetector, LanguageDetector, SUPPORTED_LANGUAGES};
pub use crate::models::{AnalysisRequest, AnalysisResponse, Issue, Severity, ToolOptions};
pub use crate::registry::{Capability, ToolRegistry, ToolRegistryBuilder};
pub use crate::runner::{
    classify, run_tool, ExitClass, ProcessOutput, ScopedArtifact, ToolCommand, ToolRunner,
};
pub use crate::sink::{PersistMode, ResultSink};
