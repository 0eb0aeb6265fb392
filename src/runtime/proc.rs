//! Subprocess execution.

use std::path::Path;
use std::process::{Command, ExitStatus};

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_command_impl(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<ExitStatus, std::io::Error> {
        Command::new(program).args(args).current_dir(cwd).status()
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[cfg(unix)]
    #[test]
    fn test_run_command_reports_exit_status() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();

        let ok = runtime
            .run_command("sh", &["-c".to_string(), "exit 0".to_string()], dir.path())
            .unwrap();
        assert!(ok.success());

        let failed = runtime
            .run_command("sh", &["-c".to_string(), "exit 3".to_string()], dir.path())
            .unwrap();
        assert!(!failed.success());
        assert_eq!(failed.code(), Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_command_uses_working_directory() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();

        let status = runtime
            .run_command(
                "sh",
                &["-c".to_string(), "echo hi > marker.txt".to_string()],
                dir.path(),
            )
            .unwrap();
        assert!(status.success());
        assert!(dir.path().join("marker.txt").exists());
    }

    #[test]
    fn test_run_command_missing_program() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();

        let result = runtime.run_command("definitely-not-a-real-program", &[], dir.path());
        assert!(result.is_err());
    }
}
