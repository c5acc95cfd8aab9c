//! Build-manifest model and stylesheet discovery for bezel host elements.
//!
//! A compiled UI component ships with a JSON manifest describing its entry
//! chunk and associated stylesheets. This crate models that manifest, selects
//! the entry chunk, and resolves stylesheet paths against the bundle's base
//! URL so the host element can inject `<link rel="stylesheet">` equivalents
//! into its style scope.

pub mod manifest;
pub mod source;

pub use manifest::{asset_base, resolve_asset, Manifest, ManifestChunk, ManifestError};
pub use source::{FileManifestSource, ManifestSource, StaticManifestSource};
