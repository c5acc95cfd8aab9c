//! Shared test fixtures: a render-recording component and common schemas.

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{ElementType, Host};
use crate::render::{PropsRecord, RenderComponent};
use crate::schema::{PropSpec, PropertySchema};

/// The schema used by the counter scenarios: one numeric `count` property
/// seeded with `0`.
pub(crate) fn counter_schema() -> PropertySchema {
    PropertySchema::new(vec![PropSpec::new("count").with_initial(0)]).unwrap()
}

/// A component that renders nothing.
pub(crate) fn noop() -> Noop {
    Noop
}

pub(crate) struct Noop;

impl RenderComponent for Noop {
    fn render(&mut self, _props: &PropsRecord) {}
}

/// Records every render's properties snapshot, shared across the component
/// instances one registration produces.
#[derive(Clone, Default)]
pub(crate) struct RenderLog {
    renders: Rc<RefCell<Vec<PropsRecord>>>,
}

impl RenderLog {
    /// Register a recording component under `tag` and return the shared log
    /// alongside the element type.
    pub(crate) fn register(host: &Host, tag: &str, schema: PropertySchema) -> (Self, ElementType) {
        let log = Self::default();
        let captured = log.clone();
        let element_type = host
            .register(move || Probe(captured.clone()), tag, schema)
            .unwrap();
        (log, element_type)
    }

    /// Number of renders recorded so far.
    pub(crate) fn len(&self) -> usize {
        self.renders.borrow().len()
    }

    /// The most recent render's properties snapshot.
    ///
    /// # Panics
    ///
    /// Panics if nothing has rendered yet.
    pub(crate) fn last(&self) -> PropsRecord {
        self.renders
            .borrow()
            .last()
            .cloned()
            .expect("no renders recorded")
    }
}

struct Probe(RenderLog);

impl RenderComponent for Probe {
    fn render(&mut self, props: &PropsRecord) {
        self.0.renders.borrow_mut().push(props.clone());
    }
}
