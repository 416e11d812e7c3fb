//! Analysis pipeline for code snippets: resolve the language, run the matching
//! external tool, normalize its findings and hand the result to a sink.

pub mod api;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod language;
pub mod models;
pub mod registry;
pub mod runner;
pub mod sink;

pub use context::{AppContext, RequestContext};
pub use engine::AnalysisDispatcher;
