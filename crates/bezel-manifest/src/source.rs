//! Manifest sources.
//!
//! The host element fetches the manifest once per instance, fire-and-forget.
//! Where the bytes come from is a deployment detail, so it sits behind the
//! [`ManifestSource`] trait: a file next to the bundle in the common case, a
//! pre-parsed value for embedded bundles and tests.

use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::{Manifest, ManifestError};

/// A source the host element can load the build manifest from.
pub trait ManifestSource {
    /// Load and parse the manifest.
    fn load(&self) -> Result<Manifest, ManifestError>;
}

/// Loads the manifest from a file on disk (e.g. `.vite/manifest.json` under
/// the bundle directory).
#[derive(Debug, Clone)]
pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    /// Create a source reading from the given manifest file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The manifest file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSource for FileManifestSource {
    fn load(&self) -> Result<Manifest, ManifestError> {
        let json = fs::read_to_string(&self.path)?;
        Manifest::from_json(&json)
    }
}

/// A pre-parsed manifest, served as-is.
#[derive(Debug, Clone, Default)]
pub struct StaticManifestSource {
    manifest: Manifest,
}

impl StaticManifestSource {
    /// Create a source serving the given manifest.
    pub fn new(manifest: Manifest) -> Self {
        Self { manifest }
    }
}

impl ManifestSource for StaticManifestSource {
    fn load(&self) -> Result<Manifest, ManifestError> {
        Ok(self.manifest.clone())
    }
}
