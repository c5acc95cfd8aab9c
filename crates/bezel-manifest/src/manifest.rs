//! Build manifest parsing and asset URL resolution.
//!
//! The manifest is the JSON file emitted by the component's bundler (for Vite
//! builds, `.vite/manifest.json`): an object mapping chunk names to chunk
//! records. Only the entry chunk and its `css` list matter to the host
//! element; everything else is tolerated and ignored.

use std::collections::BTreeMap;

use serde::Deserialize;
use url::Url;

/// One chunk record from the build manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestChunk {
    /// Emitted file path, relative to the bundle root
    pub file: String,

    /// Whether this chunk is an entry point
    #[serde(default, rename = "isEntry")]
    pub is_entry: bool,

    /// Stylesheet paths emitted for this chunk, relative to the bundle root
    #[serde(default)]
    pub css: Vec<String>,

    /// Source file the chunk was built from
    #[serde(default)]
    pub src: Option<String>,
}

/// A parsed build manifest: chunk name to chunk record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    chunks: BTreeMap<String, ManifestChunk>,
}

impl Manifest {
    /// Parse a manifest from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The entry chunk: the first chunk (in chunk-name order) flagged as an
    /// entry point. Well-formed component bundles have exactly one.
    pub fn entry(&self) -> Option<&ManifestChunk> {
        self.chunks.values().find(|chunk| chunk.is_entry)
    }

    /// Iterate all chunks in chunk-name order.
    pub fn chunks(&self) -> impl Iterator<Item = (&str, &ManifestChunk)> {
        self.chunks.iter().map(|(name, chunk)| (name.as_str(), chunk))
    }

    /// Number of chunks in the manifest.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the manifest has no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Errors that can occur loading or resolving a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to resolve asset URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Compute the asset base for a bundle: one directory above the given
/// resource location (the adapter module's own URL within the bundle).
pub fn asset_base(resource_url: &Url) -> Result<Url, ManifestError> {
    Ok(resource_url.join("..")?)
}

/// Resolve a manifest-relative asset path against the bundle's asset base.
pub fn resolve_asset(base: &Url, path: &str) -> Result<Url, ManifestError> {
    Ok(base.join(path)?)
}
