//! Concrete collaborators for `snipcheck-core`: tool runners, result sinks,
//! and the factory that wires them from configuration.

pub mod factory;
pub mod runner;
pub mod services;
pub mod sink;

pub use services::PluginServicesFactory;
