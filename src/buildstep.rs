//! External compile-script invocation.
//!
//! The actual compilation is owned by a shell script in the project root;
//! this module only launches it and verifies the exit status. A failed or
//! unlaunchable script aborts the run instead of letting the copy phase
//! package stale artifacts.

use anyhow::Result;
use log::info;
use std::path::Path;

use crate::error::AssembleError;
use crate::runtime::Runtime;

/// Name of the compile script expected in the project root.
pub const COMPILE_SCRIPT: &str = "compile.sh";

/// Run `sh compile.sh` in `root`, blocking until it finishes.
pub fn run_build_step<R: Runtime>(runtime: &R, root: &Path) -> Result<()> {
    let command = format!("sh {}", COMPILE_SCRIPT);
    info!("Running build step: {}", command);

    let status = runtime
        .run_command("sh", &[COMPILE_SCRIPT.to_string()], root)
        .map_err(|source| AssembleError::BuildStepUnavailable {
            command: command.clone(),
            source,
        })?;

    if !status.success() {
        return Err(AssembleError::BuildStepFailed { command, status }.into());
    }

    info!("Build step finished");
    Ok(())
}
