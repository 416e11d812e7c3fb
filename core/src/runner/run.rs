use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};

use crate::error::RunnerError;

use super::exit::normalize_exit;

#[derive(Debug, Clone)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

/// Captured result of one tool invocation. Streams are kept apart.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub duration_ms: u64,
}

impl ProcessOutput {
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Spawns the tool, waits for it under a hard deadline and captures both
/// streams. On expiry the tool and everything it started are killed before
/// this returns an error.
pub async fn run_tool(spec: &ToolCommand) -> Result<ProcessOutput, RunnerError> {
    tracing::debug!(program = %spec.program, args = ?spec.args, "spawning tool");

    let started = Instant::now();
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    // Own process group, so wrapper scripts can be killed with their children.
    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = cmd.spawn().map_err(|source| RunnerError::Spawn {
        program: spec.program.clone(),
        source,
    })?;
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let waited = tokio::time::timeout(spec.timeout, async {
        tokio::try_join!(child.wait(), drain(stdout), drain(stderr))
    })
    .await;

    let (status, stdout, stderr) = match waited {
        Ok(res) => res.map_err(|source| RunnerError::StreamIo {
            program: spec.program.clone(),
            source,
        })?,
        Err(_) => {
            tracing::error!(
                program = %spec.program,
                timeout_ms = spec.timeout.as_millis() as u64,
                "tool timed out, killing process"
            );
            kill_tree(&mut child).await;
            return Err(RunnerError::Timeout {
                program: spec.program.clone(),
                timeout_ms: spec.timeout.as_millis() as u64,
            });
        }
    };

    let out = ProcessOutput {
        code: normalize_exit(status),
        stdout,
        stderr,
        duration_ms: started.elapsed().as_millis() as u64,
    };
    tracing::debug!(
        program = %spec.program,
        code = out.code,
        stdout_bytes = out.stdout.len(),
        stderr_bytes = out.stderr.len(),
        duration_ms = out.duration_ms,
        "tool finished"
    );
    Ok(out)
}

async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

/// Kills the child's process group (unix), then the child itself, and reaps it.
async fn kill_tree(child: &mut Child) {
    #[cfg(unix)]
    if let Some(pid) = child.id() {
        // A negative pid addresses the whole group created by `process_group(0)`.
        let group = format!("-{pid}");
        match Command::new("kill")
            .args(["-KILL", "--", group.as_str()])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
        {
            Ok(status) if status.success() => {}
            Ok(status) => tracing::warn!(pid, code = ?status.code(), "failed to kill tool process group"),
            Err(e) => tracing::warn!(pid, error = %e, "failed to kill tool process group"),
        }
    }
    if let Err(e) = child.kill().await {
        tracing::warn!(error = %e, "failed to kill tool process");
    }
}
