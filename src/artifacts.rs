//! Flat library/binary copier driven by filename heuristics.
//!
//! Build output directories are flat; whether a file ships is decided purely
//! by its name: the extension must belong to the requested set, the stem must
//! carry the project marker, and the stem must not contain any blocklisted
//! substring. The blocklist covers example/sample artifacts, cross-language
//! bindings and test binaries that land next to the real libraries.

use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::error::AssembleError;
use crate::layout::PROJECT_TOKEN;
use crate::runtime::Runtime;

/// Static library extensions (without the leading dot).
pub const LIB_EXTENSIONS: &[&str] = &["lib", "a", "so"];

/// Binary extensions; the empty string admits extensionless executables.
pub const BIN_EXTENSIONS: &[&str] = &["dll", ""];

/// The exact substrings that disqualify an artifact. This set is the
/// compatibility contract with the historical packaging script; do not
/// broaden it.
const BLOCKLIST: &[&str] = &["example", "csharp", "test"];

/// Filename contract for shippable build artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactFilter {
    marker: String,
    blocklist: Vec<String>,
}

impl ArtifactFilter {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            blocklist: BLOCKLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether a file stem (name without extension) qualifies for shipping.
    pub fn ships(&self, stem: &str) -> bool {
        stem.contains(&self.marker) && !self.blocklist.iter().any(|b| stem.contains(b))
    }
}

impl Default for ArtifactFilter {
    fn default() -> Self {
        Self::new(PROJECT_TOKEN)
    }
}

/// Copy every qualifying file from the flat directory `src` into `dest`.
///
/// `dest` is created if absent and never cleaned first: the assembler calls
/// this once per build variant into the same destination, so the result is
/// the merge of all passes, later copies overwriting same-named files.
pub fn copy_artifacts<R: Runtime>(
    runtime: &R,
    filter: &ArtifactFilter,
    src: &Path,
    dest: &Path,
    extensions: &[&str],
) -> Result<()> {
    if !runtime.is_dir(src) {
        return Err(AssembleError::SourceMissing(src.to_path_buf()).into());
    }
    if !runtime.exists(dest) {
        runtime.create_dir_all(dest)?;
    }

    for entry in runtime.read_dir(src)? {
        if runtime.is_dir(&entry) {
            continue;
        }
        let extension = entry
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !extensions.contains(&extension.as_str()) {
            continue;
        }
        let Some(stem) = entry.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if !filter.ships(stem) {
            continue;
        }
        let Some(name) = entry.file_name() else {
            continue;
        };
        debug!("Copying artifact {:?}", entry);
        runtime.copy(&entry, &dest.join(name))?;
    }
    Ok(())
}
