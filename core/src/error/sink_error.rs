// core/src/error/sink_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to encode analysis result")]
    Encode(#[source] serde_json::Error),

    #[error("result sink unreachable: {0}")]
    Network(String),

    #[error("result sink returned status {status}")]
    Status { status: u16, body: String },
}
