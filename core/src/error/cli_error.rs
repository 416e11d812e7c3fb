// core/src/error/cli_error.rs
use thiserror::Error;

use super::{ConfigError, CoreError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("failed to read input: {path}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command failed: {0}")]
    Command(String),
}
