mod cli_error;
mod config_error;
mod core_error;
mod detect_error;
mod runner_error;
mod sink_error;

pub use cli_error::CliError;
pub use config_error::ConfigError;
pub use core_error::CoreError;
pub use detect_error::DetectError;
pub use runner_error::{RunnerError, RunnerErrorKind};
pub use sink_error::SinkError;
