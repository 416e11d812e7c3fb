pub fn normalize_exit(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(code) = status.code() {
            code
        } else if let Some(sig) = status.signal() {
            128 + sig
        } else {
            1
        }
    }
    #[cfg(windows)]
    {
        status.code().unwrap_or(1)
    }
}

/// How a finished tool run should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitClass {
    /// Exit 0. Empty stdout means no findings.
    Clean,
    /// The tool's "issues found" code together with non-empty stdout.
    IssuesFound,
    /// Anything else, including the "issues found" code with nothing on stdout.
    Failed,
}

/// A nonzero exit is only trusted as "issues found" when the tool also printed
/// something. Whitespace-only stdout counts as empty.
pub fn classify(code: i32, stdout: &[u8], issues_found_code: i32) -> ExitClass {
    let has_output = stdout.iter().any(|b| !b.is_ascii_whitespace());
    match code {
        0 => ExitClass::Clean,
        c if c == issues_found_code && c != 0 && has_output => ExitClass::IssuesFound,
        _ => ExitClass::Failed,
    }
}
