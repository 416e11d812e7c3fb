// core/src/error/runner_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to prepare temporary artifact: {stage}")]
    Artifact {
        stage: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to spawn process: {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error while waiting for {program}")]
    StreamIo {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} timed out after {timeout_ms}ms and was killed")]
    Timeout { program: String, timeout_ms: u64 },

    #[error("{program} execution failed: exit code {code} (stderr: {stderr})")]
    ToolExecution {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("failed to parse {program} output: {source} (stdout: {stdout})")]
    OutputParse {
        program: String,
        stdout: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse failure classes exposed to callers that map errors onto outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerErrorKind {
    ToolExecution,
    OutputParse,
}

impl RunnerError {
    pub fn kind(&self) -> RunnerErrorKind {
        match self {
            RunnerError::OutputParse { .. } => RunnerErrorKind::OutputParse,
            RunnerError::Artifact { .. }
            | RunnerError::Spawn { .. }
            | RunnerError::StreamIo { .. }
            | RunnerError::Timeout { .. }
            | RunnerError::ToolExecution { .. } => RunnerErrorKind::ToolExecution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_and_spawn_are_execution_failures() {
        let timeout = RunnerError::Timeout {
            program: "ruff".into(),
            timeout_ms: 10,
        };
        let spawn = RunnerError::Spawn {
            program: "ruff".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(timeout.kind(), RunnerErrorKind::ToolExecution);
        assert_eq!(spawn.kind(), RunnerErrorKind::ToolExecution);
    }

    #[test]
    fn parse_failure_is_its_own_class() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RunnerError::OutputParse {
            program: "ruff".into(),
            stdout: "{".into(),
            source,
        };
        assert_eq!(err.kind(), RunnerErrorKind::OutputParse);
        assert!(err.to_string().contains("stdout: {"));
    }

    #[test]
    fn execution_error_message_carries_stderr() {
        let err = RunnerError::ToolExecution {
            program: "ruff".into(),
            code: 2,
            stderr: "error: unexpected argument".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("exit code 2"));
        assert!(msg.contains("unexpected argument"));
    }
}
