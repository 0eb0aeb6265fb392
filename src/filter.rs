//! Pattern-based directory filtering for tree copies.

use glob::{Pattern, PatternError};
use std::collections::HashSet;
use std::path::Path;

/// Include/ignore name filter applied to one directory level.
///
/// A name is kept when it matches any include pattern and no ignore pattern.
/// Directories are never filtered by name; only regular entries that fail the
/// include-minus-ignore test end up in the excluded set, so directory
/// structure is always traversed.
#[derive(Debug)]
pub struct NameFilter {
    include: Vec<Pattern>,
    ignore: Vec<Pattern>,
}

impl NameFilter {
    pub fn new(include: &[&str], ignore: &[&str]) -> Result<Self, PatternError> {
        Ok(Self {
            include: compile(include)?,
            ignore: compile(ignore)?,
        })
    }

    /// Whether a non-directory entry with this name should be copied.
    pub fn keeps(&self, name: &str) -> bool {
        self.include.iter().any(|p| p.matches(name))
            && !self.ignore.iter().any(|p| p.matches(name))
    }

    /// Names under `dir` that a copy should skip.
    pub fn excluded(&self, dir: &Path, names: &[String]) -> HashSet<String> {
        names
            .iter()
            .filter(|name| !self.keeps(name) && !dir.join(name.as_str()).is_dir())
            .cloned()
            .collect()
    }
}

fn compile(patterns: &[&str]) -> Result<Vec<Pattern>, PatternError> {
    patterns.iter().map(|p| Pattern::new(p)).collect()
}
