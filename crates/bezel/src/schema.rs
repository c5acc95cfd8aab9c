//! Declared property schemas for host elements.
//!
//! A schema is a fixed, ordered list of property descriptors supplied at
//! registration time: the property name, an optional attribute alias (the only
//! name ever visible in markup), and an optional initial value.

use crate::value::PropValue;

/// One declared property on a host element.
#[derive(Debug, Clone)]
pub struct PropSpec {
    name: String,
    attribute: Option<String>,
    initial: Option<PropValue>,
}

impl PropSpec {
    /// Declare a property with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute: None,
            initial: None,
        }
    }

    /// Use a different attribute name in markup.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Seed the property with an initial value.
    pub fn with_initial(mut self, value: impl Into<PropValue>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// The property name (the scripting surface).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute name visible in markup: the alias if one was declared,
    /// the property name otherwise.
    pub fn attribute_name(&self) -> &str {
        self.attribute.as_deref().unwrap_or(&self.name)
    }

    /// The declared initial value, if any.
    pub fn initial(&self) -> Option<&PropValue> {
        self.initial.as_ref()
    }
}

/// An ordered, immutable set of property descriptors.
#[derive(Debug, Clone, Default)]
pub struct PropertySchema {
    specs: Vec<PropSpec>,
}

impl PropertySchema {
    /// Build a schema from descriptors, rejecting duplicate property names.
    pub fn new(specs: Vec<PropSpec>) -> Result<Self, SchemaError> {
        for (index, spec) in specs.iter().enumerate() {
            if specs[..index].iter().any(|other| other.name == spec.name) {
                return Err(SchemaError::DuplicateProperty(spec.name.clone()));
            }
        }

        Ok(Self { specs })
    }

    /// An empty schema (an element with no declared properties).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a descriptor by property name.
    pub fn by_name(&self, name: &str) -> Option<&PropSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Look up a descriptor by its markup-visible attribute name
    /// (alias-or-name match).
    pub fn by_attribute(&self, attribute: &str) -> Option<&PropSpec> {
        self.specs
            .iter()
            .find(|spec| spec.attribute_name() == attribute)
    }

    /// Iterate descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PropSpec> {
        self.specs.iter()
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the schema declares no properties.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Errors that can occur constructing a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Duplicate property name in schema: {0}")]
    DuplicateProperty(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attribute_name_defaults_to_property_name() {
        let spec = PropSpec::new("count");

        assert_eq!(spec.attribute_name(), "count");
    }

    #[test]
    fn attribute_alias_overrides_property_name() {
        let spec = PropSpec::new("userName").with_attribute("user-name");

        assert_eq!(spec.name(), "userName");
        assert_eq!(spec.attribute_name(), "user-name");
    }

    #[test]
    fn looks_up_by_name_and_attribute() {
        let schema = PropertySchema::new(vec![
            PropSpec::new("count").with_initial(0),
            PropSpec::new("userName").with_attribute("user-name"),
        ])
        .unwrap();

        assert!(schema.by_name("count").is_some());
        assert!(schema.by_attribute("user-name").is_some());
        assert!(schema.by_attribute("userName").is_none());
        assert!(schema.by_name("missing").is_none());
    }

    #[test]
    fn rejects_duplicate_property_names() {
        let result = PropertySchema::new(vec![PropSpec::new("count"), PropSpec::new("count")]);

        assert!(matches!(result, Err(SchemaError::DuplicateProperty(name)) if name == "count"));
    }

    #[test]
    fn preserves_declaration_order() {
        let schema = PropertySchema::new(vec![
            PropSpec::new("b"),
            PropSpec::new("a"),
            PropSpec::new("c"),
        ])
        .unwrap();

        let names: Vec<_> = schema.iter().map(PropSpec::name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
