//! The custom element registry.
//!
//! Registration is the one process-wide side effect of the adapter: it binds
//! a tag name to an element definition. The registry is append-only; defining
//! the same tag twice is a caller programming error and propagates as a fatal
//! [`RegistryError::DuplicateTag`], never handled internally.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;

use crate::render::ComponentFactory;
use crate::schema::PropertySchema;
use crate::styles::StyleChannel;

/// Custom element tag names: lowercase, and they must contain a hyphen to be
/// distinguishable from built-in tags.
static TAG_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)+$").expect("Invalid tag name regex")
});

/// Everything the registry knows about one registered tag: the declared
/// property schema, the component constructor, and the optional stylesheet
/// side-channel.
pub struct ElementDefinition {
    tag: String,
    schema: PropertySchema,
    factory: Rc<ComponentFactory>,
    styles: Option<StyleChannel>,
}

impl ElementDefinition {
    /// Create a definition for `tag` wrapping components built by `factory`.
    pub fn new(
        tag: impl Into<String>,
        schema: PropertySchema,
        factory: Rc<ComponentFactory>,
    ) -> Self {
        Self {
            tag: tag.into(),
            schema,
            factory,
            styles: None,
        }
    }

    /// Attach a stylesheet side-channel to the definition.
    pub fn with_styles(mut self, styles: StyleChannel) -> Self {
        self.styles = Some(styles);
        self
    }

    /// The registered tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The declared property schema.
    pub fn schema(&self) -> &PropertySchema {
        &self.schema
    }

    /// The component constructor.
    pub fn factory(&self) -> &ComponentFactory {
        self.factory.as_ref()
    }

    /// The stylesheet side-channel, if one was configured.
    pub fn styles(&self) -> Option<&StyleChannel> {
        self.styles.as_ref()
    }
}

impl std::fmt::Debug for ElementDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementDefinition")
            .field("tag", &self.tag)
            .field("schema", &self.schema)
            .field("styles", &self.styles)
            .finish()
    }
}

/// An append-only registry of tag name to element definition.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    definitions: HashMap<String, Rc<ElementDefinition>>,
}

impl ElementRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under its tag name.
    ///
    /// Fails if the tag name does not follow the custom-element convention or
    /// is already registered.
    pub fn define(
        &mut self,
        definition: ElementDefinition,
    ) -> Result<Rc<ElementDefinition>, RegistryError> {
        let tag = definition.tag().to_string();

        if !TAG_NAME_RE.is_match(&tag) {
            return Err(RegistryError::InvalidTagName(tag));
        }
        if self.definitions.contains_key(&tag) {
            return Err(RegistryError::DuplicateTag(tag));
        }

        let definition = Rc::new(definition);
        self.definitions.insert(tag.clone(), Rc::clone(&definition));
        tracing::info!(%tag, "registered custom element");

        Ok(definition)
    }

    /// Look up the definition for a tag name.
    pub fn get(&self, tag: &str) -> Option<Rc<ElementDefinition>> {
        self.definitions.get(tag).cloned()
    }

    /// Whether a tag name is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }
}

/// Errors that can occur registering an element.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Invalid custom element tag name (must be lowercase and contain a hyphen): {0}")]
    InvalidTagName(String),

    #[error("Tag already registered: {0}")]
    DuplicateTag(String),
}
