//! Source and release tree path conventions.
//!
//! The project root is always an explicit parameter; nothing in here infers
//! paths from the executable's own location.

use std::path::{Path, PathBuf};

/// Name token of the packaged library family. Doubles as the marker
/// substring shippable artifacts must carry in their filename.
pub const PROJECT_TOKEN: &str = "ospf";

/// Ecosystem subdirectory the release tree is published under.
pub const ECOSYSTEM_DIR: &str = "cpp";

/// Build variants whose outputs are merged into one release tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Release,
    Debug,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Release, Variant::Debug];

    pub fn dir_name(self) -> &'static str {
        match self {
            Variant::Release => "Release",
            Variant::Debug => "Debug",
        }
    }
}

/// Top-level directory all assembled output lands in.
pub fn release_root(project_root: &Path) -> PathBuf {
    project_root.join("release")
}

/// Paths consumed from the project tree.
#[derive(Debug, Clone)]
pub struct SourceLayout {
    root: PathBuf,
}

impl SourceLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Root of the public header tree (`src/ospf`).
    pub fn header_tree(&self) -> PathBuf {
        self.root.join("src").join(PROJECT_TOKEN)
    }

    /// Build output directory for one variant (`x64/Release`, `x64/Debug`).
    pub fn variant_dir(&self, variant: Variant) -> PathBuf {
        self.root.join("x64").join(variant.dir_name())
    }

    pub fn variant_lib_dir(&self, variant: Variant) -> PathBuf {
        self.variant_dir(variant).join("lib")
    }

    pub fn variant_bin_dir(&self, variant: Variant) -> PathBuf {
        self.variant_dir(variant).join("bin")
    }

    pub fn variant_build_dir(&self, variant: Variant) -> PathBuf {
        self.variant_dir(variant).join("build")
    }
}

/// Paths produced under `release/cpp/<triple>/`.
#[derive(Debug, Clone)]
pub struct ReleaseLayout {
    release_root: PathBuf,
    triple_root: PathBuf,
}

impl ReleaseLayout {
    pub fn new(project_root: &Path, triple: &str) -> Self {
        let release_root = release_root(project_root);
        let triple_root = release_root.join(ECOSYSTEM_DIR).join(triple);
        Self {
            release_root,
            triple_root,
        }
    }

    pub fn release_root(&self) -> &Path {
        &self.release_root
    }

    pub fn triple_root(&self) -> &Path {
        &self.triple_root
    }

    pub fn include_dir(&self) -> PathBuf {
        self.triple_root.join("include")
    }

    /// Destination of the header tree; headers keep their `ospf/` nesting so
    /// consumer include paths stay `#include <ospf/...>`.
    pub fn header_dir(&self) -> PathBuf {
        self.include_dir().join(PROJECT_TOKEN)
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.triple_root.join("lib")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.triple_root.join("bin")
    }
}
