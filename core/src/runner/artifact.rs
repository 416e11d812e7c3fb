use std::io::Write;
use std::path::Path;

use tempfile::TempPath;

use crate::error::RunnerError;

/// A uniquely named temporary file holding one snippet.
///
/// The file is removed when the value is dropped or closed, so every exit path
/// of a run (including `?` returns and panics) cleans it up.
#[derive(Debug)]
pub struct ScopedArtifact {
    path: TempPath,
}

impl ScopedArtifact {
    /// Creates the file in `dir` (the system temp dir when `None`) and writes
    /// `contents` into it. Names carry 16 random characters.
    pub fn create(
        dir: Option<&Path>,
        prefix: &str,
        suffix: &str,
        contents: &[u8],
    ) -> Result<Self, RunnerError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix).suffix(suffix).rand_bytes(16);

        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|source| RunnerError::Artifact {
            stage: "create",
            source,
        })?;

        file.write_all(contents)
            .and_then(|_| file.flush())
            .map_err(|source| RunnerError::Artifact {
                stage: "write",
                source,
            })?;

        // Closes the handle; the path still owns deletion.
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the artifact, used as the informational `file_path` of issues.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Removes the file now and reports failures instead of swallowing them.
    pub fn close(self) {
        let filename = self.path.display().to_string();
        if let Err(e) = self.path.close() {
            tracing::warn!(filename = %filename, error = %e, "failed to remove temporary artifact");
        }
    }
}
