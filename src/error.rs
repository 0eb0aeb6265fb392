//! Typed failures surfaced by the assembler.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors the assembler can report beyond plain I/O failures.
///
/// The original packaging flow let every filesystem error escape as a raw
/// trace; standing alone, the tool distinguishes the conditions a caller can
/// actually act on.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// An expected source directory is absent from the project tree.
    #[error("source directory not found: {0}")]
    SourceMissing(PathBuf),

    /// A non-merging copy found its destination already present.
    #[error("destination already exists: {0}")]
    DestinationConflict(PathBuf),

    /// The external compile script ran but exited unsuccessfully.
    #[error("build step `{command}` failed with {status}")]
    BuildStepFailed {
        command: String,
        status: ExitStatus,
    },

    /// The external compile script could not be started at all.
    #[error("build step `{command}` could not be started")]
    BuildStepUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
