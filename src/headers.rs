//! Header tree copier.
//!
//! Copies the public header tree into the release layout, preserving
//! directory structure while shipping only `.h`/`.hpp` files and holding back
//! implementation headers (stems ending in the reserved `impl` suffix).

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::error::AssembleError;
use crate::filter::NameFilter;
use crate::runtime::Runtime;

const INCLUDE_PATTERNS: &[&str] = &["*.h", "*.hpp"];
const IGNORE_PATTERNS: &[&str] = &["*impl.h", "*impl.hpp"];

/// Copy the header tree rooted at `src` into `dest`.
///
/// `dest` must not exist yet; this is a non-merging copy that recreates the
/// whole tree from scratch on every run.
pub fn copy_header_tree<R: Runtime>(runtime: &R, src: &Path, dest: &Path) -> Result<()> {
    if !runtime.is_dir(src) {
        return Err(AssembleError::SourceMissing(src.to_path_buf()).into());
    }
    if runtime.exists(dest) {
        return Err(AssembleError::DestinationConflict(dest.to_path_buf()).into());
    }

    let filter = NameFilter::new(INCLUDE_PATTERNS, IGNORE_PATTERNS)
        .context("Failed to compile header patterns")?;

    runtime.create_dir_all(dest)?;
    copy_level(runtime, &filter, src, dest)
}

fn copy_level<R: Runtime>(
    runtime: &R,
    filter: &NameFilter,
    src: &Path,
    dest: &Path,
) -> Result<()> {
    let entries = runtime.read_dir(src)?;
    let names: Vec<String> = entries
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    let excluded = filter.excluded(src, &names);

    for entry in &entries {
        let Some(name) = entry.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if runtime.is_dir(entry) {
            let child_dest = dest.join(&name);
            runtime.create_dir_all(&child_dest)?;
            copy_level(runtime, filter, entry, &child_dest)?;
        } else if !excluded.contains(&name) {
            debug!("Copying header {:?}", entry);
            runtime.copy(entry, &dest.join(&name))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RealRuntime;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_copies_headers_and_skips_everything_else() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        touch(&src.join("foo.hpp"));
        touch(&src.join("foo.h"));
        touch(&src.join("fooimpl.hpp"));
        touch(&src.join("foo.cpp"));
        touch(&src.join("notes.txt"));

        let dest = dir.path().join("include");
        copy_header_tree(&runtime, &src, &dest).unwrap();

        assert!(dest.join("foo.hpp").exists());
        assert!(dest.join("foo.h").exists());
        assert!(!dest.join("fooimpl.hpp").exists());
        assert!(!dest.join("foo.cpp").exists());
        assert!(!dest.join("notes.txt").exists());
    }

    #[test]
    fn test_preserves_nested_structure() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("math/detail")).unwrap();
        touch(&src.join("core.hpp"));
        touch(&src.join("math/vector.hpp"));
        touch(&src.join("math/vector_impl.hpp"));
        touch(&src.join("math/detail/simd.h"));

        let dest = dir.path().join("include");
        copy_header_tree(&runtime, &src, &dest).unwrap();

        assert!(dest.join("core.hpp").exists());
        assert!(dest.join("math/vector.hpp").exists());
        assert!(!dest.join("math/vector_impl.hpp").exists());
        assert!(dest.join("math/detail/simd.h").exists());
    }

    #[test]
    fn test_empty_directories_are_recreated() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("empty")).unwrap();

        let dest = dir.path().join("include");
        copy_header_tree(&runtime, &src, &dest).unwrap();

        assert!(dest.join("empty").is_dir());
    }

    #[test]
    fn test_missing_source_is_typed_error() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();

        let err = copy_header_tree(
            &runtime,
            &dir.path().join("nope"),
            &dir.path().join("include"),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssembleError>(),
            Some(AssembleError::SourceMissing(_))
        ));
    }

    #[test]
    fn test_existing_destination_is_typed_error() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        let dest = dir.path().join("include");
        fs::create_dir(&dest).unwrap();

        let err = copy_header_tree(&runtime, &src, &dest).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssembleError>(),
            Some(AssembleError::DestinationConflict(_))
        ));
    }
}
