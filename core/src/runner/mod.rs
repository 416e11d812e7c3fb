//! Contract and subprocess plumbing shared by every external analysis tool.

mod artifact;
pub mod exit;
mod run;
mod traits;

pub use artifact::ScopedArtifact;
pub use exit::{classify, normalize_exit, ExitClass};
pub use run::{run_tool, ProcessOutput, ToolCommand};
pub use traits::ToolRunner;
