//! Release assembly orchestration.
//!
//! Linear flow: prepare the build-output scaffolding, run the external
//! compile script (non-Windows only), recreate the release tree, then copy
//! headers plus the library and binary artifacts of both build variants into
//! one merged layout. The first error aborts the run; there is no rollback
//! or partial-success reporting.

use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::artifacts::{ArtifactFilter, BIN_EXTENSIONS, LIB_EXTENSIONS, copy_artifacts};
use crate::buildstep::run_build_step;
use crate::headers::copy_header_tree;
use crate::layout::{self, ReleaseLayout, SourceLayout, Variant};
use crate::platform::Platform;
use crate::runtime::Runtime;

pub struct AssembleConfig {
    /// Project root everything is resolved against.
    pub root: PathBuf,
    pub platform: Platform,
    /// Overrides the platform-derived triple when set.
    pub triple: Option<String>,
    /// Package existing build output without running the compile script.
    pub skip_build: bool,
}

#[tracing::instrument(skip(runtime, config))]
pub fn assemble<R: Runtime>(runtime: &R, config: &AssembleConfig) -> Result<()> {
    let triple = config
        .triple
        .clone()
        .unwrap_or_else(|| config.platform.release_triple());
    let source = SourceLayout::new(&config.root);
    let release = ReleaseLayout::new(&config.root, &triple);

    info!(
        "Assembling release for {} at {:?}",
        triple,
        release.triple_root()
    );

    // On Windows the variant directories are populated by MSVC out of band;
    // everywhere else the compile script owns them, so they are reset to a
    // clean slate right before it runs.
    if !config.platform.is_windows() && !config.skip_build {
        prepare_scaffolding(runtime, &source)?;
        run_build_step(runtime, source.root())?;
    }

    if runtime.exists(release.release_root()) {
        debug!("Removing previous release tree {:?}", release.release_root());
        runtime.remove_dir_all(release.release_root())?;
    }
    runtime.create_dir_all(release.triple_root())?;

    copy_header_tree(runtime, &source.header_tree(), &release.header_dir())?;

    let filter = ArtifactFilter::default();
    for variant in Variant::ALL {
        let (lib_src, bin_src) = variant_artifact_dirs(&source, &config.platform, variant);
        copy_artifacts(runtime, &filter, &lib_src, &release.lib_dir(), LIB_EXTENSIONS)?;
        copy_artifacts(runtime, &filter, &bin_src, &release.bin_dir(), BIN_EXTENSIONS)?;
    }

    info!("Release assembled at {:?}", release.triple_root());
    Ok(())
}

/// Remove the assembled release tree, if any.
#[tracing::instrument(skip(runtime))]
pub fn clean<R: Runtime>(runtime: &R, root: &Path) -> Result<()> {
    let release_root = layout::release_root(root);
    if runtime.exists(&release_root) {
        runtime.remove_dir_all(&release_root)?;
        info!("Removed {:?}", release_root);
    } else {
        debug!("Nothing to clean at {:?}", release_root);
    }
    Ok(())
}

/// Where one variant's libraries and binaries live. MSVC drops everything
/// directly into `x64/<Variant>`; the compile script uses `lib`/`bin`
/// subdirectories.
fn variant_artifact_dirs(
    source: &SourceLayout,
    platform: &Platform,
    variant: Variant,
) -> (PathBuf, PathBuf) {
    if platform.is_windows() {
        (source.variant_dir(variant), source.variant_dir(variant))
    } else {
        (
            source.variant_lib_dir(variant),
            source.variant_bin_dir(variant),
        )
    }
}

/// Reset `x64/{Release,Debug}` for a fresh build: create `<variant>/build`
/// for a variant seen for the first time, drop any stale `bin`/`lib`
/// contents, and recreate both empty.
fn prepare_scaffolding<R: Runtime>(runtime: &R, source: &SourceLayout) -> Result<()> {
    for variant in Variant::ALL {
        let variant_dir = source.variant_dir(variant);
        if !runtime.exists(&variant_dir) {
            runtime.create_dir_all(&source.variant_build_dir(variant))?;
        } else {
            for stale in [
                source.variant_bin_dir(variant),
                source.variant_lib_dir(variant),
            ] {
                if runtime.exists(&stale) {
                    debug!("Clearing stale build output {:?}", stale);
                    runtime.remove_dir_all(&stale)?;
                }
            }
        }
        runtime.create_dir_all(&source.variant_bin_dir(variant))?;
        runtime.create_dir_all(&source.variant_lib_dir(variant))?;
    }
    Ok(())
}
