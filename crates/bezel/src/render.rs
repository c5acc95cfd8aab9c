//! The rendering contract between a host element and its wrapped component.
//!
//! The wrapped component is built independently of the host page; the adapter
//! only ever hands it a snapshot of the current properties record and asks it
//! to (re)render. Mounting and unmounting happen inside a [`RenderRoot`], an
//! isolated subtree owned by one host element instance.

use std::collections::BTreeMap;

use crate::value::PropValue;

/// The typed properties of one host element instance, keyed by property name.
pub type PropsRecord = BTreeMap<String, PropValue>;

/// A component that can be mounted inside a host element.
///
/// `render` is called with the *entire* current properties record every time
/// the element's dirty set is non-empty — dirty tracking decides whether a
/// render happens, never what is passed. The record is borrowed; the component
/// cannot retain it or mutate it back into the adapter.
pub trait RenderComponent {
    /// Render (or re-render) against the given properties.
    fn render(&mut self, props: &PropsRecord);
}

/// Constructor for per-instance component subtrees.
pub type ComponentFactory = dyn Fn() -> Box<dyn RenderComponent>;

/// The isolated subtree a host element mounts its component into.
///
/// The component is instantiated lazily on the first render and dropped on
/// unmount. Unmounting is permanent for an instance; renders after unmount are
/// ignored (a late render can happen when a scheduled mutation batch runs
/// after disconnection).
#[derive(Default)]
pub struct RenderRoot {
    mounted: Option<Box<dyn RenderComponent>>,
    unmounted: bool,
}

impl RenderRoot {
    /// Create an empty, not-yet-rendered root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount or update the component against the given properties.
    pub fn render(&mut self, factory: &ComponentFactory, props: &PropsRecord) {
        if self.unmounted {
            tracing::debug!("render after unmount ignored");
            return;
        }

        let component = self.mounted.get_or_insert_with(factory);
        component.render(props);
    }

    /// Tear down the mounted subtree. Permanent for this root.
    pub fn unmount(&mut self) {
        self.mounted = None;
        self.unmounted = true;
    }

    /// Whether a component is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Whether this root has been torn down.
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }
}

impl std::fmt::Debug for RenderRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderRoot")
            .field("mounted", &self.mounted.is_some())
            .field("unmounted", &self.unmounted)
            .finish()
    }
}
