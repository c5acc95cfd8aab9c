//! Stylesheet discovery for wrapped components.
//!
//! A compiled component bundle carries its stylesheets next to its entry
//! chunk, described by the build manifest. Each host element instance loads
//! the manifest once at construction, fire-and-forget, and injects one
//! stylesheet link per `css` path into its own isolated style scope. Failures
//! never block attribute or property behavior; they are logged and swallowed.

use std::rc::Rc;

use url::Url;

use bezel_manifest::{resolve_asset, ManifestSource};

/// Where a registered element's stylesheets come from: a manifest source plus
/// the bundle's asset base URL (one directory above the component's own
/// resource location).
#[derive(Clone)]
pub struct StyleChannel {
    source: Rc<dyn ManifestSource>,
    base: Url,
}

impl StyleChannel {
    /// Create a channel loading from `source`, resolving stylesheet paths
    /// against `base`.
    pub fn new(source: Rc<dyn ManifestSource>, base: Url) -> Self {
        Self { source, base }
    }

    /// Load the manifest and inject the entry chunk's stylesheets into the
    /// given scope. Every failure path is recovered locally: a missing or
    /// malformed manifest, a manifest without an entry chunk, or an
    /// unresolvable path leaves the scope as-is apart from a log line.
    pub fn inject_into(&self, scope: &mut StyleScope, tag: &str) {
        let manifest = match self.source.load() {
            Ok(manifest) => manifest,
            Err(error) => {
                tracing::warn!(tag, %error, "manifest fetch failed; skipping stylesheets");
                return;
            }
        };

        let Some(entry) = manifest.entry() else {
            tracing::warn!(tag, "manifest has no entry chunk; skipping stylesheets");
            return;
        };

        for css in &entry.css {
            match resolve_asset(&self.base, css) {
                Ok(href) => scope.append(StylesheetLink::new(href)),
                Err(error) => {
                    tracing::warn!(tag, css, %error, "failed to resolve stylesheet path");
                }
            }
        }
    }
}

impl std::fmt::Debug for StyleChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleChannel").field("base", &self.base).finish()
    }
}

/// One injected stylesheet link (`rel="stylesheet"`, `type="text/css"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetLink {
    href: Url,
}

impl StylesheetLink {
    /// Create a link pointing at the given stylesheet URL.
    pub fn new(href: Url) -> Self {
        Self { href }
    }

    /// The resolved stylesheet URL.
    pub fn href(&self) -> &Url {
        &self.href
    }

    /// The link relation, fixed to `stylesheet`.
    pub fn rel(&self) -> &'static str {
        "stylesheet"
    }

    /// The link MIME type, fixed to `text/css`.
    pub fn mime_type(&self) -> &'static str {
        "text/css"
    }
}

/// The per-instance style scope links are appended into.
///
/// The scope outlives the rendering root, so a manifest load completing after
/// disconnection appends into a detached scope. That is benign.
#[derive(Debug, Default)]
pub struct StyleScope {
    links: Vec<StylesheetLink>,
}

impl StyleScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stylesheet link.
    pub fn append(&mut self, link: StylesheetLink) {
        self.links.push(link);
    }

    /// The injected links, in injection order.
    pub fn links(&self) -> &[StylesheetLink] {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezel_manifest::{FileManifestSource, Manifest, StaticManifestSource};
    use pretty_assertions::assert_eq;

    fn channel_for(json: &str) -> StyleChannel {
        let manifest = Manifest::from_json(json).unwrap();
        StyleChannel::new(
            Rc::new(StaticManifestSource::new(manifest)),
            Url::parse("http://127.0.0.1:8080/micro-ui/").unwrap(),
        )
    }

    #[test]
    fn injects_entry_chunk_stylesheets() {
        let channel = channel_for(
            r#"{"index.html": {"file": "assets/app.js", "isEntry": true,
                "css": ["assets/app.css", "assets/theme.css"]}}"#,
        );
        let mut scope = StyleScope::new();

        channel.inject_into(&mut scope, "x-counter");

        let hrefs: Vec<_> = scope.links().iter().map(|l| l.href().as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "http://127.0.0.1:8080/micro-ui/assets/app.css",
                "http://127.0.0.1:8080/micro-ui/assets/theme.css",
            ]
        );
        assert_eq!(scope.links()[0].rel(), "stylesheet");
        assert_eq!(scope.links()[0].mime_type(), "text/css");
    }

    #[test]
    fn manifest_without_entry_injects_nothing() {
        let channel = channel_for(r#"{"chunk": {"file": "a.js"}}"#);
        let mut scope = StyleScope::new();

        channel.inject_into(&mut scope, "x-counter");

        assert!(scope.links().is_empty());
    }

    #[test]
    fn failed_load_injects_nothing() {
        let channel = StyleChannel::new(
            Rc::new(FileManifestSource::new("/nonexistent/manifest.json")),
            Url::parse("http://127.0.0.1:8080/micro-ui/").unwrap(),
        );
        let mut scope = StyleScope::new();

        channel.inject_into(&mut scope, "x-counter");

        assert!(scope.links().is_empty());
    }
}
