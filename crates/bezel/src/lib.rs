//! Custom-element adapter runtime for independently-built UI components.
//!
//! A component compiled separately from its host page can only be addressed
//! through the tag the page inserts into markup: string-valued attributes and
//! typed script properties. The component itself expects a fully-typed
//! properties object and wants to re-render only when something actually
//! changed. This crate is the adapter between those two models: register a
//! component with a declared property schema and get back an element type
//! whose instances keep attributes and properties in sync, coalesce changes
//! through a dirty set, and mount the component inside an isolated rendering
//! root.
//!
//! ```
//! use bezel::{Host, PropSpec, PropertySchema, PropsRecord, RenderComponent};
//!
//! struct Counter;
//!
//! impl RenderComponent for Counter {
//!     fn render(&mut self, props: &PropsRecord) {
//!         let _count = props["count"].as_number().unwrap_or(0.0);
//!     }
//! }
//!
//! let host = Host::new();
//! let schema = PropertySchema::new(vec![PropSpec::new("count").with_initial(0)]).unwrap();
//! let counter = host.register(|| Counter, "x-counter", schema).unwrap();
//!
//! let element = counter.create();
//! element.connect();
//! element.set_property("count", 3);
//! host.run_until_idle();
//!
//! assert_eq!(element.attribute("count").as_deref(), Some("3"));
//! ```

pub mod element;
pub mod host;
pub mod registry;
pub mod render;
pub mod scheduler;
pub mod schema;
pub mod styles;
pub mod value;

#[cfg(test)]
mod testing;

pub use element::{HostElement, Lifecycle};
pub use host::{ElementType, Host};
pub use registry::{ElementDefinition, ElementRegistry, RegistryError};
pub use render::{ComponentFactory, PropsRecord, RenderComponent, RenderRoot};
pub use scheduler::Scheduler;
pub use schema::{PropSpec, PropertySchema, SchemaError};
pub use styles::{StyleChannel, StyleScope, StylesheetLink};
pub use value::{infer_attribute_value, AttributeWrite, PropValue};
