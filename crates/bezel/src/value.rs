//! Typed property values and the attribute encoding.
//!
//! Attributes only ever hold strings (or are absent), while the wrapped
//! component expects typed properties. [`infer_attribute_value`] decodes
//! attribute text into the best-guess typed value; [`PropValue::to_attribute`]
//! is the mirror encoding used when a property write reflects back onto the
//! attribute layer.
//!
//! The inference is deliberately lossy: an attribute holding an arbitrary
//! unquoted string that happens to parse as a number is classified as numeric.
//! Callers that need a numeric-looking string must single-quote it (`"'5'"`),
//! which is exactly what the reflection encoding emits for string values. This
//! asymmetry is a documented limitation of the attribute surface, not a defect.

use serde_json::Value as JsonValue;

/// A typed property value on a host element.
///
/// `Bool`, `Number`, and `Str` are reflectable onto the attribute layer;
/// `Undefined` and `Data` are not and trigger a direct render on assignment
/// instead.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// No value assigned (a declared property with no initial value).
    Undefined,
    /// A boolean flag; reflected as attribute presence/absence.
    Bool(bool),
    /// A number; reflected as its decimal text.
    Number(f64),
    /// A string; reflected wrapped in single quotes.
    Str(String),
    /// Arbitrary structured data; never reflected.
    Data(JsonValue),
}

/// The attribute-layer effect of reflecting a property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeWrite {
    /// Set the attribute to the given text.
    Set(String),
    /// Remove the attribute.
    Remove,
    /// The value is not reflectable; leave the attribute layer untouched.
    Skip,
}

impl PropValue {
    /// Encode this value for the attribute layer, mirroring
    /// [`infer_attribute_value`] so that attribute → property → attribute
    /// round-trips are stable for booleans, numbers, and strings.
    pub fn to_attribute(&self) -> AttributeWrite {
        match self {
            Self::Bool(true) => AttributeWrite::Set(String::new()),
            Self::Bool(false) => AttributeWrite::Remove,
            Self::Number(n) => AttributeWrite::Set(format!("{n}")),
            Self::Str(s) => AttributeWrite::Set(format!("'{s}'")),
            Self::Undefined | Self::Data(_) => AttributeWrite::Skip,
        }
    }

    /// The boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is `Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<JsonValue> for PropValue {
    fn from(value: JsonValue) -> Self {
        Self::Data(value)
    }
}

/// Infer the typed value of an attribute from its raw text.
///
/// Rules, first match wins:
/// 1. Absent attribute → `Bool(false)`; present with empty value → `Bool(true)`
///    (attribute presence models a boolean flag).
/// 2. Text that fully parses as a finite number → `Number`.
/// 3. Text delimited by single quotes → `Str` with the quotes stripped.
/// 4. Anything else → the raw text as `Str`.
pub fn infer_attribute_value(raw: Option<&str>) -> PropValue {
    let Some(text) = raw else {
        return PropValue::Bool(false);
    };

    if text.is_empty() {
        return PropValue::Bool(true);
    }

    if let Ok(number) = text.parse::<f64>() {
        if number.is_finite() {
            return PropValue::Number(number);
        }
    }

    if let Some(inner) = text.strip_prefix('\'').and_then(|rest| rest.strip_suffix('\'')) {
        return PropValue::Str(inner.to_string());
    }

    PropValue::Str(text.to_string())
}
