//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the filesystem and
//! subprocess primitives the assembler drives, enabling dependency injection
//! and testability.
//!
//! # Structure
//!
//! - `fs` - File system operations (copy, directories, listing)
//! - `proc` - Subprocess execution (the external compile script)

mod fs;
mod proc;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // File System
    fn copy(&self, from: &Path, to: &Path) -> Result<u64>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn remove_dir_all(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    // Subprocess
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    /// The raw exit status is returned so callers can decide what a
    /// failure means; only a spawn failure is an `Err`.
    fn run_command(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<ExitStatus, std::io::Error>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        self.copy_impl(from, to)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        self.remove_dir_all_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.read_dir_impl(path)
    }

    fn run_command(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<ExitStatus, std::io::Error> {
        self.run_command_impl(program, args, cwd)
    }
}
