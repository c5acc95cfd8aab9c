//! The host element: the adapter instance bridging attributes and properties.
//!
//! One `HostElement` exists per tag usage in the host page. It owns the
//! string-valued attribute layer, the typed properties record, the dirty set
//! gating re-renders, an isolated [`RenderRoot`], and a per-instance style
//! scope. Every attribute mutation and every property assignment funnels
//! through the same typed pipeline: infer or reflect the value, update the
//! record if it changed, mark it dirty, and let the render checkpoint decide
//! whether the wrapped component needs to run.
//!
//! Lifecycle is `Constructed → Connected → Disconnected`, one way. An
//! instance created before its tag was defined is upgraded on connect:
//! property writes made in the meantime are captured and replayed through the
//! normal setter so nothing is silently dropped.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::registry::{ElementDefinition, ElementRegistry};
use crate::render::{PropsRecord, RenderRoot};
use crate::scheduler::Scheduler;
use crate::styles::{StyleScope, StylesheetLink};
use crate::value::{infer_attribute_value, AttributeWrite, PropValue};

/// Lifecycle states of a host element instance.
///
/// There is no reconnected state: once disconnected, the rendering root is
/// torn down and observation is detached for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created but not yet inserted into the document.
    Constructed,
    /// Inserted; observation is running and the first render has happened.
    Connected,
    /// Removed; the instance is inert.
    Disconnected,
}

struct ElementState {
    tag: String,
    definition: Option<Rc<ElementDefinition>>,
    lifecycle: Lifecycle,

    /// The string-valued attribute layer visible to markup.
    attributes: BTreeMap<String, String>,
    /// Typed values for declared properties.
    props: PropsRecord,
    /// Pending values since the last render; sole trigger for re-renders.
    dirty: BTreeMap<String, PropValue>,
    /// Property writes made before the instance was upgraded, in write order.
    early: Vec<(String, PropValue)>,
    /// Writes to undeclared property names: plain fields, never tracked.
    expando: BTreeMap<String, PropValue>,

    root: RenderRoot,
    styles: StyleScope,

    observing: bool,
    /// Attribute names mutated since the last batch delivery, in record order.
    pending_mutations: Vec<String>,
    flush_scheduled: bool,
    rendering: bool,
}

/// A handle to one host element instance.
///
/// Handles are cheap to clone and share the same underlying instance, the way
/// multiple references to one element do in a document.
#[derive(Clone)]
pub struct HostElement {
    state: Rc<RefCell<ElementState>>,
    registry: Rc<RefCell<ElementRegistry>>,
    scheduler: Rc<Scheduler>,
}

impl HostElement {
    pub(crate) fn construct(
        tag: impl Into<String>,
        definition: Option<Rc<ElementDefinition>>,
        registry: Rc<RefCell<ElementRegistry>>,
        scheduler: Rc<Scheduler>,
    ) -> Self {
        let element = Self {
            state: Rc::new(RefCell::new(ElementState {
                tag: tag.into(),
                definition: None,
                lifecycle: Lifecycle::Constructed,
                attributes: BTreeMap::new(),
                props: PropsRecord::new(),
                dirty: BTreeMap::new(),
                early: Vec::new(),
                expando: BTreeMap::new(),
                root: RenderRoot::new(),
                styles: StyleScope::new(),
                observing: false,
                pending_mutations: Vec::new(),
                flush_scheduled: false,
                rendering: false,
            })),
            registry,
            scheduler,
        };

        if let Some(definition) = definition {
            element.upgrade_with(&definition);
        }

        element
    }

    /// The element's tag name.
    pub fn tag(&self) -> String {
        self.state.borrow().tag.clone()
    }

    /// The current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.state.borrow().lifecycle
    }

    /// Whether the wrapped component is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.state.borrow().root.is_mounted()
    }

    /// The stylesheet links injected into this instance's style scope so far.
    pub fn stylesheet_links(&self) -> Vec<StylesheetLink> {
        self.state.borrow().styles.links().to_vec()
    }

    /// The current attribute value, if the attribute is present.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    /// Whether the attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.state.borrow().attributes.contains_key(name)
    }

    /// Set an attribute, as markup or host-page script would.
    ///
    /// While the instance is connected, the mutation is recorded and the
    /// batch is delivered on the next scheduler turn; multiple mutations in
    /// one turn coalesce into a single render checkpoint.
    pub fn set_attribute(&self, name: &str, value: impl Into<String>) {
        self.write_attribute(name, Some(value.into()));
    }

    /// Remove an attribute. Removing an absent attribute records nothing.
    pub fn remove_attribute(&self, name: &str) {
        self.write_attribute(name, None);
    }

    /// Read a property.
    ///
    /// Declared names come from the properties record; undeclared names fall
    /// back to the plain-field map; before upgrade, early writes are visible.
    pub fn property(&self, name: &str) -> Option<PropValue> {
        let state = self.state.borrow();
        if state.definition.is_none() {
            return state
                .early
                .iter()
                .find(|(early_name, _)| early_name == name)
                .map(|(_, value)| value.clone());
        }
        state
            .props
            .get(name)
            .cloned()
            .or_else(|| state.expando.get(name).cloned())
    }

    /// A snapshot of the full properties record.
    pub fn properties(&self) -> PropsRecord {
        self.state.borrow().props.clone()
    }

    /// Write a property.
    ///
    /// A declared property updates the record if the value changed, enqueues
    /// one coalescing dirty entry, and reflects onto its attribute when the
    /// value is reflectable; non-reflectable values trigger a render directly,
    /// since no attribute mutation will arrive to do it. Undeclared names
    /// behave as plain instance fields. Writes before upgrade are captured
    /// and absorbed on connect.
    pub fn set_property(&self, name: &str, value: impl Into<PropValue>) {
        let value = value.into();

        let reflection = {
            let mut state = self.state.borrow_mut();

            let Some(definition) = state.definition.clone() else {
                match state.early.iter_mut().find(|(early_name, _)| early_name == name) {
                    Some(entry) => entry.1 = value,
                    None => state.early.push((name.to_string(), value)),
                }
                return;
            };

            let Some(spec) = definition.schema().by_name(name) else {
                state.expando.insert(name.to_string(), value);
                return;
            };

            let changed = state.props.get(name) != Some(&value);
            if changed {
                state.props.insert(name.to_string(), value.clone());
                state.dirty.insert(name.to_string(), value.clone());
            }

            (spec.attribute_name().to_string(), value.to_attribute())
        };

        match reflection {
            (attribute, AttributeWrite::Set(text)) => self.write_attribute(&attribute, Some(text)),
            (attribute, AttributeWrite::Remove) => self.write_attribute(&attribute, None),
            (_, AttributeWrite::Skip) => self.render(),
        }
    }

    /// Insert the element into the document.
    ///
    /// Runs the upgrade step (resolve a late definition, replay early
    /// property writes through the setter), starts attribute observation,
    /// then runs the render checkpoint once — initial seed values are dirty,
    /// so the first render is guaranteed. Reconnecting a disconnected
    /// instance is unsupported and ignored.
    pub fn connect(&self) {
        {
            let state = self.state.borrow();
            match state.lifecycle {
                Lifecycle::Constructed => {}
                Lifecycle::Connected => return,
                Lifecycle::Disconnected => {
                    tracing::debug!(tag = %state.tag, "reconnect is unsupported; ignoring");
                    return;
                }
            }
        }

        // The tag may have been defined after this instance was created.
        if self.state.borrow().definition.is_none() {
            let tag = self.tag();
            if let Some(definition) = self.registry.borrow().get(&tag) {
                self.upgrade_with(&definition);
            }
        }

        if self.state.borrow().definition.is_none() {
            // Unknown tag: connects inertly, like any unrecognized element.
            self.state.borrow_mut().lifecycle = Lifecycle::Connected;
            return;
        }

        self.absorb_early_writes();

        {
            let mut state = self.state.borrow_mut();
            state.observing = true;
            state.lifecycle = Lifecycle::Connected;
        }

        self.render();
    }

    /// Remove the element from the document.
    ///
    /// Stops observation immediately and drops undelivered mutation records.
    /// The rendering subtree is unmounted on the next scheduler turn, never
    /// synchronously: the host runtime may still be mid-removal, and the
    /// wrapped component's own lifecycle bookkeeping must not observe a
    /// teardown inside that turn.
    pub fn disconnect(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.lifecycle != Lifecycle::Connected {
                return;
            }
            state.observing = false;
            state.pending_mutations.clear();
            state.lifecycle = Lifecycle::Disconnected;
        }

        let handle = self.clone();
        self.scheduler
            .schedule(move || handle.state.borrow_mut().root.unmount());
    }

    /// Attach a definition: seed the properties record with declared initial
    /// values (each seed marked dirty) and kick off the manifest fetch.
    fn upgrade_with(&self, definition: &Rc<ElementDefinition>) {
        {
            let mut state = self.state.borrow_mut();
            state.definition = Some(Rc::clone(definition));
            for spec in definition.schema().iter() {
                let value = spec.initial().cloned().unwrap_or(PropValue::Undefined);
                state.props.insert(spec.name().to_string(), value.clone());
                state.dirty.insert(spec.name().to_string(), value);
            }
        }

        // Fire-and-forget: stylesheet injection must never block attribute or
        // property behavior, and its failure is logged, not propagated.
        if let Some(channel) = definition.styles().cloned() {
            let handle = self.clone();
            let tag = definition.tag().to_string();
            self.scheduler.schedule(move || {
                let mut state = handle.state.borrow_mut();
                channel.inject_into(&mut state.styles, &tag);
            });
        }
    }

    /// Replay property writes that landed before the accessor pipeline
    /// existed, so no early assignment is silently dropped.
    fn absorb_early_writes(&self) {
        let early = std::mem::take(&mut self.state.borrow_mut().early);
        for (name, value) in early {
            self.set_property(&name, value);
        }
    }

    fn write_attribute(&self, name: &str, value: Option<String>) {
        let mut state = self.state.borrow_mut();

        let mutated = match value {
            Some(text) => {
                state.attributes.insert(name.to_string(), text);
                true
            }
            // Removing an absent attribute produces no mutation record.
            None => state.attributes.remove(name).is_some(),
        };

        if mutated && state.observing {
            state.pending_mutations.push(name.to_string());
            if !state.flush_scheduled {
                state.flush_scheduled = true;
                let handle = self.clone();
                self.scheduler.schedule(move || handle.flush_mutations());
            }
        }
    }

    /// Deliver one batch of attribute mutations: deduplicate to the distinct
    /// changed names in record order, route each through inference and the
    /// update-if-changed rule, then run the render checkpoint once for the
    /// whole batch.
    fn flush_mutations(&self) {
        let (batch, definition) = {
            let mut state = self.state.borrow_mut();
            state.flush_scheduled = false;
            if !state.observing {
                // Observation stopped before delivery; the records are gone.
                state.pending_mutations.clear();
                return;
            }
            (
                std::mem::take(&mut state.pending_mutations),
                state.definition.clone(),
            )
        };

        let Some(definition) = definition else {
            return;
        };

        let mut distinct: Vec<String> = Vec::new();
        for name in batch {
            if !distinct.contains(&name) {
                distinct.push(name);
            }
        }

        {
            let mut state = self.state.borrow_mut();
            for attribute in &distinct {
                let Some(spec) = definition.schema().by_attribute(attribute) else {
                    tracing::debug!(tag = %state.tag, %attribute, "ignoring unobserved attribute");
                    continue;
                };

                let value =
                    infer_attribute_value(state.attributes.get(attribute).map(String::as_str));
                let name = spec.name().to_string();
                if state.props.get(&name) != Some(&value) {
                    state.props.insert(name.clone(), value.clone());
                    state.dirty.insert(name, value);
                }
            }
        }

        self.render();
    }

    /// The render checkpoint: a no-op unless the dirty set is non-empty.
    ///
    /// The dirty set is cleared *before* the component runs, so a property
    /// write made during the render keeps its dirty entry instead of being
    /// lost; the loop picks it up and renders again within the same turn.
    /// The component always receives the entire current record; dirty
    /// tracking only gates whether it runs.
    fn render(&self) {
        loop {
            let (definition, snapshot, mut root) = {
                let mut state = self.state.borrow_mut();
                if state.rendering {
                    // Re-entrant checkpoint from a write during render; the
                    // outer loop picks the dirty entries up.
                    return;
                }
                if state.dirty.is_empty() {
                    return;
                }
                let Some(definition) = state.definition.clone() else {
                    return;
                };
                state.dirty.clear();
                state.rendering = true;
                (
                    definition,
                    state.props.clone(),
                    std::mem::take(&mut state.root),
                )
            };

            root.render(definition.factory(), &snapshot);

            let mut state = self.state.borrow_mut();
            state.root = root;
            state.rendering = false;
            if state.dirty.is_empty() {
                break;
            }
        }
    }
}

impl std::fmt::Debug for HostElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("HostElement")
            .field("tag", &state.tag)
            .field("lifecycle", &state.lifecycle)
            .field("attributes", &state.attributes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ElementType, Host};
    use crate::render::{PropsRecord, RenderComponent};
    use crate::schema::{PropSpec, PropertySchema};
    use crate::testing::{counter_schema, RenderLog};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn connected_counter(host: &Host) -> (HostElement, RenderLog) {
        let (log, element_type) = RenderLog::register(host, "x-counter", counter_schema());
        let element = element_type.create();
        element.connect();
        host.run_until_idle();
        (element, log)
    }

    /// Writes one property on its own element during the first render.
    struct WritesOnFirstRender {
        renders: Rc<RefCell<Vec<PropsRecord>>>,
        element: Rc<RefCell<Option<HostElement>>>,
        name: &'static str,
        value: PropValue,
    }

    impl RenderComponent for WritesOnFirstRender {
        fn render(&mut self, props: &PropsRecord) {
            let first = self.renders.borrow().is_empty();
            self.renders.borrow_mut().push(props.clone());
            if first {
                let element = self.element.borrow().clone();
                if let Some(element) = element {
                    element.set_property(self.name, self.value.clone());
                }
            }
        }
    }

    type Renders = Rc<RefCell<Vec<PropsRecord>>>;
    type ElementSlot = Rc<RefCell<Option<HostElement>>>;

    fn register_self_writer(
        host: &Host,
        tag: &str,
        schema: PropertySchema,
        name: &'static str,
        value: PropValue,
    ) -> (Renders, ElementSlot, ElementType) {
        let renders: Renders = Rc::default();
        let slot: ElementSlot = Rc::default();
        let element_type = {
            let renders = Rc::clone(&renders);
            let slot = Rc::clone(&slot);
            host.register(
                move || WritesOnFirstRender {
                    renders: Rc::clone(&renders),
                    element: Rc::clone(&slot),
                    name,
                    value: value.clone(),
                },
                tag,
                schema,
            )
            .unwrap()
        };
        (renders, slot, element_type)
    }

    #[test]
    fn first_render_shows_seeded_initial_values() {
        let host = Host::new();
        let (element, log) = connected_counter(&host);

        assert_eq!(element.lifecycle(), Lifecycle::Connected);
        assert_eq!(log.len(), 1);
        assert_eq!(log.last()["count"], PropValue::Number(0.0));
    }

    #[test]
    fn boolean_property_reflects_as_presence() {
        let host = Host::new();
        let schema = PropertySchema::new(vec![PropSpec::new("enabled")]).unwrap();
        let (log, element_type) = RenderLog::register(&host, "x-flag", schema);
        let element = element_type.create();
        element.connect();
        host.run_until_idle();

        element.set_property("enabled", true);
        host.run_until_idle();
        assert_eq!(element.attribute("enabled").as_deref(), Some(""));
        assert_eq!(log.last()["enabled"], PropValue::Bool(true));

        element.set_property("enabled", false);
        host.run_until_idle();
        assert!(!element.has_attribute("enabled"));
        assert_eq!(log.last()["enabled"], PropValue::Bool(false));
    }

    #[test]
    fn number_property_round_trips_through_the_attribute() {
        let host = Host::new();
        let (element, _log) = connected_counter(&host);

        element.set_property("count", 5);
        host.run_until_idle();

        assert_eq!(element.attribute("count").as_deref(), Some("5"));
        assert_eq!(element.property("count"), Some(PropValue::Number(5.0)));
    }

    #[test]
    fn string_property_reflects_quoted() {
        let host = Host::new();
        let schema = PropertySchema::new(vec![PropSpec::new("label")]).unwrap();
        let (_log, element_type) = RenderLog::register(&host, "x-label", schema);
        let element = element_type.create();
        element.connect();
        host.run_until_idle();

        element.set_property("label", "abc");
        host.run_until_idle();

        assert_eq!(element.attribute("label").as_deref(), Some("'abc'"));
        assert_eq!(
            element.property("label"),
            Some(PropValue::Str("abc".to_string()))
        );
    }

    #[test]
    fn quoted_reflection_keeps_numeric_looking_strings_as_strings() {
        let host = Host::new();
        let schema = PropertySchema::new(vec![PropSpec::new("label")]).unwrap();
        let (_log, element_type) = RenderLog::register(&host, "x-label", schema);
        let element = element_type.create();
        element.connect();
        host.run_until_idle();

        element.set_property("label", "5");
        host.run_until_idle();

        assert_eq!(element.attribute("label").as_deref(), Some("'5'"));
        assert_eq!(
            element.property("label"),
            Some(PropValue::Str("5".to_string()))
        );
    }

    #[test]
    fn idempotent_writes_do_not_render() {
        let host = Host::new();
        let (element, log) = connected_counter(&host);
        element.set_property("count", 5);
        host.run_until_idle();
        let renders = log.len();

        element.set_property("count", 5);
        host.run_until_idle();
        element.set_attribute("count", "5");
        host.run_until_idle();

        assert_eq!(log.len(), renders);
    }

    #[test]
    fn attribute_mutations_route_through_inference() {
        let host = Host::new();
        let (element, log) = connected_counter(&host);

        element.set_attribute("count", "7");
        host.run_until_idle();

        assert_eq!(element.property("count"), Some(PropValue::Number(7.0)));
        assert_eq!(log.last()["count"], PropValue::Number(7.0));
    }

    #[test]
    fn attribute_alias_is_the_markup_name() {
        let host = Host::new();
        let schema = PropertySchema::new(vec![
            PropSpec::new("userName").with_attribute("user-name")
        ])
        .unwrap();
        let (log, element_type) = RenderLog::register(&host, "x-user", schema);
        let element = element_type.create();
        element.connect();
        host.run_until_idle();

        element.set_attribute("user-name", "'bob'");
        host.run_until_idle();
        assert_eq!(
            element.property("userName"),
            Some(PropValue::Str("bob".to_string()))
        );
        assert_eq!(log.last()["userName"], PropValue::Str("bob".to_string()));

        element.set_property("userName", "eve");
        host.run_until_idle();
        assert_eq!(element.attribute("user-name").as_deref(), Some("'eve'"));
        assert!(!element.has_attribute("userName"));
    }

    #[test]
    fn simultaneous_attribute_mutations_coalesce_into_one_render() {
        let host = Host::new();
        let schema = PropertySchema::new(vec![
            PropSpec::new("a").with_initial(0),
            PropSpec::new("b").with_initial(0),
            PropSpec::new("c").with_initial(0),
        ])
        .unwrap();
        let (log, element_type) = RenderLog::register(&host, "x-abc", schema);
        let element = element_type.create();
        element.connect();
        host.run_until_idle();
        let renders = log.len();

        element.set_attribute("a", "1");
        element.set_attribute("b", "2");
        element.set_attribute("c", "3");
        host.run_until_idle();

        assert_eq!(log.len(), renders + 1);
        let last = log.last();
        assert_eq!(last["a"], PropValue::Number(1.0));
        assert_eq!(last["b"], PropValue::Number(2.0));
        assert_eq!(last["c"], PropValue::Number(3.0));
    }

    #[test]
    fn non_reflectable_write_renders_immediately_without_attribute() {
        let host = Host::new();
        let schema = PropertySchema::new(vec![PropSpec::new("payload")]).unwrap();
        let (log, element_type) = RenderLog::register(&host, "x-data", schema);
        let element = element_type.create();
        element.connect();
        host.run_until_idle();
        let renders = log.len();

        element.set_property("payload", json!({"count": 1}));

        // Rendered synchronously, before any scheduler turn.
        assert_eq!(log.len(), renders + 1);
        assert!(!element.has_attribute("payload"));
        assert_eq!(
            log.last()["payload"],
            PropValue::Data(json!({"count": 1}))
        );
    }

    #[test]
    fn non_reflectable_write_during_render_triggers_a_follow_up_render() {
        let host = Host::new();
        let schema = PropertySchema::new(vec![
            PropSpec::new("count").with_initial(0),
            PropSpec::new("payload"),
        ])
        .unwrap();
        let (renders, slot, element_type) = register_self_writer(
            &host,
            "x-self-data",
            schema,
            "payload",
            PropValue::Data(json!({"n": 1})),
        );

        let element = element_type.create();
        *slot.borrow_mut() = Some(element.clone());
        element.connect();

        // Both renders happen within the connect turn: the write made during
        // the first render keeps its dirty entry, and the checkpoint loops.
        assert_eq!(renders.borrow().len(), 2);
        assert_eq!(renders.borrow()[1]["payload"], PropValue::Data(json!({"n": 1})));
        assert!(!element.has_attribute("payload"));

        host.run_until_idle();
        assert_eq!(renders.borrow().len(), 2);
    }

    #[test]
    fn reflectable_write_during_render_renders_and_reflects() {
        let host = Host::new();
        let (renders, slot, element_type) = register_self_writer(
            &host,
            "x-self-count",
            counter_schema(),
            "count",
            PropValue::Number(1.0),
        );

        let element = element_type.create();
        *slot.borrow_mut() = Some(element.clone());
        element.connect();
        host.run_until_idle();

        assert_eq!(renders.borrow().len(), 2);
        assert_eq!(renders.borrow()[1]["count"], PropValue::Number(1.0));
        assert_eq!(element.attribute("count").as_deref(), Some("1"));
    }

    #[test]
    fn unknown_attributes_are_ignored() {
        let host = Host::new();
        let (element, log) = connected_counter(&host);
        let renders = log.len();

        element.set_attribute("unrelated", "9");
        host.run_until_idle();

        assert_eq!(log.len(), renders);
        assert!(element.property("unrelated").is_none());
    }

    #[test]
    fn undeclared_property_writes_are_plain_fields() {
        let host = Host::new();
        let (element, log) = connected_counter(&host);
        let renders = log.len();

        element.set_property("extra", "hello");
        host.run_until_idle();

        assert_eq!(log.len(), renders);
        assert!(!element.has_attribute("extra"));
        assert_eq!(
            element.property("extra"),
            Some(PropValue::Str("hello".to_string()))
        );
    }

    #[test]
    fn early_writes_survive_the_upgrade() {
        let host = Host::new();
        // Created before the tag is defined: writes land as plain values.
        let element = host.create_element("x-late");
        element.set_property("count", 5);
        assert_eq!(element.property("count"), Some(PropValue::Number(5.0)));

        let (log, _element_type) = RenderLog::register(&host, "x-late", counter_schema());
        element.connect();
        host.run_until_idle();

        // The first render reflects the early write, not the schema initial.
        assert_eq!(log.len(), 1);
        assert_eq!(log.last()["count"], PropValue::Number(5.0));
        assert_eq!(element.attribute("count").as_deref(), Some("5"));
    }

    #[test]
    fn early_writes_coalesce_last_value_wins() {
        let host = Host::new();
        let element = host.create_element("x-late");
        element.set_property("count", 1);
        element.set_property("count", 2);

        let (log, _element_type) = RenderLog::register(&host, "x-late", counter_schema());
        element.connect();
        host.run_until_idle();

        assert_eq!(log.last()["count"], PropValue::Number(2.0));
    }

    #[test]
    fn connecting_an_undefined_tag_is_inert() {
        let host = Host::new();
        let element = host.create_element("x-undefined");
        element.connect();
        host.run_until_idle();

        assert_eq!(element.lifecycle(), Lifecycle::Connected);
        assert!(!element.is_mounted());
    }

    #[test]
    fn disconnect_defers_the_unmount() {
        let host = Host::new();
        let (element, _log) = connected_counter(&host);
        assert!(element.is_mounted());

        element.disconnect();
        assert!(element.is_mounted());

        host.run_until_idle();
        assert!(!element.is_mounted());
        assert_eq!(element.lifecycle(), Lifecycle::Disconnected);
    }

    #[test]
    fn mutations_recorded_before_disconnect_are_dropped() {
        let host = Host::new();
        let (element, log) = connected_counter(&host);
        let renders = log.len();

        element.set_attribute("count", "9");
        element.disconnect();
        host.run_until_idle();

        assert_eq!(log.len(), renders);
        assert_eq!(element.property("count"), Some(PropValue::Number(0.0)));
    }

    #[test]
    fn reconnect_is_unsupported() {
        let host = Host::new();
        let (element, log) = connected_counter(&host);
        element.disconnect();
        host.run_until_idle();
        let renders = log.len();

        element.connect();
        element.set_attribute("count", "3");
        host.run_until_idle();

        assert_eq!(element.lifecycle(), Lifecycle::Disconnected);
        assert_eq!(log.len(), renders);
    }
}
