use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use snipcheck_core::api::{
    classify, run_tool, ExitClass, Issue, ProcessOutput, RequestContext, RuffConfig, RunnerError,
    ScopedArtifact, Severity, ToolCommand, ToolOptions, ToolRunner,
};

const ARTIFACT_PREFIX: &str = "snippet_";
const ARTIFACT_SUFFIX: &str = ".py";
const SYNTAX_ERROR_RULE: &str = "syntax-error";

/// One record of `ruff check --format json`.
#[derive(Debug, Deserialize)]
struct RuffIssue {
    /// `null` for syntax errors.
    code: Option<String>,
    message: String,
    #[serde(default)]
    location: RuffLocation,
    #[serde(default)]
    end_location: RuffLocation,
    #[serde(default)]
    fix: Option<RuffFix>,
}

#[derive(Debug, Default, Deserialize)]
struct RuffLocation {
    #[serde(default)]
    row: u32,
    #[serde(default)]
    column: u32,
}

#[derive(Debug, Deserialize)]
struct RuffFix {
    #[serde(default)]
    message: Option<String>,
}

/// Python analysis through the ruff linter.
pub struct RuffRunner {
    program: String,
    format_flag: String,
    timeout: Duration,
    issues_found_exit_code: i32,
    error_prefixes: Vec<String>,
    artifact_dir: Option<PathBuf>,
}

impl RuffRunner {
    pub fn new(cfg: &RuffConfig) -> Self {
        Self {
            program: cfg.program.clone(),
            format_flag: cfg.format_flag.clone(),
            timeout: Duration::from_millis(cfg.timeout_ms),
            issues_found_exit_code: cfg.issues_found_exit_code,
            error_prefixes: cfg.error_prefixes.clone(),
            artifact_dir: cfg.artifact_dir.as_ref().map(PathBuf::from),
        }
    }

    /// Logs a warning when the program cannot be found on PATH. Returns whether it was found.
    pub fn probe(&self) -> bool {
        match which::which(&self.program) {
            Ok(path) => {
                tracing::info!(program = %self.program, path = %path.display(), "ruff found");
                true
            }
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "ruff not found, python analysis will fail");
                false
            }
        }
    }

    fn command(&self, artifact: &Path) -> ToolCommand {
        ToolCommand {
            program: self.program.clone(),
            args: vec![
                "check".to_string(),
                self.format_flag.clone(),
                "json".to_string(),
                artifact.to_string_lossy().into_owned(),
            ],
            timeout: self.timeout,
        }
    }

    fn interpret(&self, output: &ProcessOutput, file_name: &str) -> Result<Vec<Issue>, RunnerError> {
        let execution_failed = || RunnerError::ToolExecution {
            program: self.program.clone(),
            code: output.code,
            stderr: output.stderr_lossy(),
        };

        let raw = match classify(output.code, &output.stdout, self.issues_found_exit_code) {
            ExitClass::Failed => {
                tracing::error!(
                    code = output.code,
                    stdout = %output.stdout_lossy(),
                    stderr = %output.stderr_lossy(),
                    "ruff execution failed"
                );
                return Err(execution_failed());
            }
            ExitClass::Clean if is_blank(&output.stdout) => {
                tracing::info!("no issues found by ruff");
                return Ok(vec![]);
            }
            ExitClass::Clean => {
                serde_json::from_slice::<Vec<RuffIssue>>(&output.stdout).map_err(|source| {
                    tracing::error!(error = %source, stdout = %output.stdout_lossy(), "failed to parse ruff output");
                    RunnerError::OutputParse {
                        program: self.program.clone(),
                        stdout: output.stdout_lossy(),
                        source,
                    }
                })?
            }
            ExitClass::IssuesFound => {
                // Without a well-formed report the exit code cannot be trusted.
                serde_json::from_slice::<Vec<RuffIssue>>(&output.stdout).map_err(|e| {
                    tracing::error!(error = %e, stdout = %output.stdout_lossy(), "ruff exited with issues code but output is not a report");
                    execution_failed()
                })?
            }
        };

        let issues: Vec<Issue> = raw
            .into_iter()
            .map(|r| self.normalize(r, file_name))
            .collect();
        tracing::info!(issues_found = issues.len(), "parsed ruff output");
        Ok(issues)
    }

    fn normalize(&self, raw: RuffIssue, file_name: &str) -> Issue {
        let (rule_id, severity) = match raw.code {
            Some(code) if !code.is_empty() => {
                let severity = severity_for(&code, &self.error_prefixes);
                (code, severity)
            }
            _ => (SYNTAX_ERROR_RULE.to_string(), Severity::Error),
        };

        let line_start = raw.location.row.max(1);
        Issue {
            rule_id,
            message: raw.message,
            severity,
            file_path: Some(file_name.to_string()),
            line_start,
            line_end: raw.end_location.row.max(line_start),
            column_start: non_zero(raw.location.column),
            column_end: non_zero(raw.end_location.column),
            suggestion: raw
                .fix
                .and_then(|f| f.message)
                .filter(|m| !m.trim().is_empty()),
        }
    }
}

#[async_trait]
impl ToolRunner for RuffRunner {
    fn name(&self) -> &str {
        "ruff"
    }

    async fn run(
        &self,
        ctx: &RequestContext,
        code_snippet: &str,
        options: &ToolOptions,
    ) -> Result<Vec<Issue>, RunnerError> {
        tracing::info!(request_id = %ctx.request_id, "starting ruff analysis");
        if !options.is_empty() {
            tracing::debug!(options = ?options, "tool options received");
        }

        let artifact = ScopedArtifact::create(
            self.artifact_dir.as_deref(),
            ARTIFACT_PREFIX,
            ARTIFACT_SUFFIX,
            code_snippet.as_bytes(),
        )?;
        tracing::debug!(filename = %artifact.path().display(), "code snippet written to temporary file");

        // `artifact` is dropped (and removed) if the tool cannot be run.
        let output = run_tool(&self.command(artifact.path())).await?;

        let stderr = output.stderr_lossy();
        if !stderr.trim().is_empty() {
            tracing::info!(stderr = %stderr.trim_end(), "ruff stderr output");
        }

        let result = self.interpret(&output, &artifact.file_name());
        artifact.close();
        result
    }
}

/// Rule ids starting with one of `error_prefixes` are errors; the rest are warnings.
pub fn severity_for(rule_id: &str, error_prefixes: &[String]) -> Severity {
    if error_prefixes
        .iter()
        .any(|p| !p.is_empty() && rule_id.starts_with(p.as_str()))
    {
        Severity::Error
    } else {
        Severity::Warning
    }
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| b.is_ascii_whitespace())
}

fn non_zero(v: u32) -> Option<u32> {
    (v > 0).then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn runner() -> RuffRunner {
        RuffRunner::new(&RuffConfig::default())
    }

    fn output(code: i32, stdout: &str, stderr: &str) -> ProcessOutput {
        ProcessOutput {
            code,
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
            duration_ms: 1,
        }
    }

    const REPORT: &str = r#"[
        {"code":"F401","message":"`os` imported but unused","location":{"row":1,"column":8},"end_location":{"row":1,"column":10},"filename":"/tmp/snippet_x.py","fix":{"message":"Remove unused import: `os`","edits":[]}},
        {"code":"W291","message":"Trailing whitespace","location":{"row":2,"column":5},"end_location":{"row":2,"column":6},"filename":"/tmp/snippet_x.py","fix":null},
        {"code":null,"message":"SyntaxError: Expected an expression","location":{"row":3,"column":1},"end_location":{"row":3,"column":1},"filename":"/tmp/snippet_x.py"}
    ]"#;

    #[test]
    fn severity_follows_rule_prefix() {
        let prefixes = RuffConfig::default().error_prefixes;
        for rule in ["E501", "F401", "E1", "F"] {
            assert_eq!(severity_for(rule, &prefixes), Severity::Error, "{rule}");
        }
        for rule in ["W291", "I001", "UP006", "B008", "e501", ""] {
            assert_eq!(severity_for(rule, &prefixes), Severity::Warning, "{rule}");
        }
    }

    #[test]
    fn empty_prefix_does_not_match_everything() {
        assert_eq!(severity_for("W291", &["".to_string()]), Severity::Warning);
    }

    #[test]
    fn report_is_normalized_in_order() {
        let issues = runner()
            .interpret(&output(1, REPORT, ""), "snippet_x.py")
            .unwrap();
        assert_eq!(issues.len(), 3);

        assert_eq!(issues[0].rule_id, "F401");
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].column_start, Some(8));
        assert_eq!(issues[0].column_end, Some(10));
        assert_eq!(
            issues[0].suggestion.as_deref(),
            Some("Remove unused import: `os`")
        );
        assert_eq!(issues[0].file_path.as_deref(), Some("snippet_x.py"));

        assert_eq!(issues[1].rule_id, "W291");
        assert_eq!(issues[1].severity, Severity::Warning);
        assert_eq!(issues[1].suggestion, None);

        assert_eq!(issues[2].rule_id, "syntax-error");
        assert_eq!(issues[2].severity, Severity::Error);
        assert_eq!(issues[2].line_start, 3);
    }

    #[test]
    fn clean_exit_without_output_has_no_issues() {
        assert!(runner().interpret(&output(0, "", ""), "f.py").unwrap().is_empty());
        assert!(runner().interpret(&output(0, "\n", ""), "f.py").unwrap().is_empty());
        assert!(runner().interpret(&output(0, "[]", ""), "f.py").unwrap().is_empty());
    }

    #[test]
    fn clean_exit_with_garbage_is_a_parse_error() {
        let err = runner()
            .interpret(&output(0, "Found 0 errors.", ""), "f.py")
            .unwrap_err();
        assert!(matches!(err, RunnerError::OutputParse { .. }));
    }

    #[test]
    fn issues_code_without_report_is_an_execution_error() {
        let err = runner()
            .interpret(&output(1, "", "error: Failed to parse"), "f.py")
            .unwrap_err();
        match err {
            RunnerError::ToolExecution { code, stderr, .. } => {
                assert_eq!(code, 1);
                assert_eq!(stderr, "error: Failed to parse");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = runner()
            .interpret(&output(1, "garbage", "warn"), "f.py")
            .unwrap_err();
        assert!(matches!(err, RunnerError::ToolExecution { code: 1, .. }));
    }

    #[test]
    fn other_exit_codes_fail() {
        let err = runner()
            .interpret(&output(2, REPORT, "unexpected argument '--format'"), "f.py")
            .unwrap_err();
        assert!(matches!(err, RunnerError::ToolExecution { code: 2, .. }));
    }

    #[test]
    fn zero_columns_are_absent() {
        let report = r#"[{"code":"E902","message":"No such file","location":{"row":0,"column":0},"end_location":{"row":0,"column":0},"filename":"f.py","fix":null}]"#;
        let issues = runner().interpret(&output(1, report, ""), "f.py").unwrap();
        assert_eq!(issues[0].line_start, 1);
        assert_eq!(issues[0].line_end, 1);
        assert_eq!(issues[0].column_start, None);
        assert_eq!(issues[0].column_end, None);
    }

    #[test]
    fn command_has_fixed_shape() {
        let cmd = runner().command(Path::new("/tmp/snippet_abc.py"));
        assert_eq!(cmd.program, "ruff");
        assert_eq!(cmd.args, vec!["check", "--format", "json", "/tmp/snippet_abc.py"]);

        let modern = RuffRunner::new(&RuffConfig {
            format_flag: "--output-format".into(),
            ..RuffConfig::default()
        });
        assert_eq!(
            modern.command(Path::new("a.py")).args[1],
            "--output-format"
        );
    }
}
