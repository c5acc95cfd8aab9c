//! The host runtime facade: registry plus scheduler.
//!
//! `Host` stands in for the page embedding the wrapped components: it owns
//! the element registry and the cooperative scheduler, registers element
//! types, creates instances by tag name (including tags that are not defined
//! yet), and drains the scheduler at the end of each synchronous turn.

use std::cell::RefCell;
use std::rc::Rc;

use crate::element::HostElement;
use crate::registry::{ElementDefinition, ElementRegistry, RegistryError};
use crate::render::RenderComponent;
use crate::scheduler::Scheduler;
use crate::schema::PropertySchema;
use crate::styles::StyleChannel;

/// A host page runtime.
#[derive(Debug, Default)]
pub struct Host {
    registry: Rc<RefCell<ElementRegistry>>,
    scheduler: Rc<Scheduler>,
}

impl Host {
    /// Create a host with an empty registry and an idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new element type wrapping components built by `factory`,
    /// under `tag`, with the given property schema.
    ///
    /// The tag must follow the custom-element naming convention; registering
    /// a tag twice is a fatal caller error and propagates unhandled.
    pub fn register<F, C>(
        &self,
        factory: F,
        tag: &str,
        schema: PropertySchema,
    ) -> Result<ElementType, RegistryError>
    where
        F: Fn() -> C + 'static,
        C: RenderComponent + 'static,
    {
        self.define(ElementDefinition::new(
            tag,
            schema,
            Rc::new(move || Box::new(factory()) as Box<dyn RenderComponent>),
        ))
    }

    /// Like [`Host::register`], with a stylesheet side-channel attached: each
    /// instance will load the build manifest once at construction and inject
    /// the entry chunk's stylesheets into its style scope.
    pub fn register_with_styles<F, C>(
        &self,
        factory: F,
        tag: &str,
        schema: PropertySchema,
        styles: StyleChannel,
    ) -> Result<ElementType, RegistryError>
    where
        F: Fn() -> C + 'static,
        C: RenderComponent + 'static,
    {
        self.define(
            ElementDefinition::new(
                tag,
                schema,
                Rc::new(move || Box::new(factory()) as Box<dyn RenderComponent>),
            )
            .with_styles(styles),
        )
    }

    fn define(&self, definition: ElementDefinition) -> Result<ElementType, RegistryError> {
        let definition = self.registry.borrow_mut().define(definition)?;
        Ok(ElementType {
            definition,
            registry: Rc::clone(&self.registry),
            scheduler: Rc::clone(&self.scheduler),
        })
    }

    /// Create an element by tag name, as parsing markup would.
    ///
    /// The tag does not need to be defined yet: an instance created early is
    /// upgraded when it connects after the definition lands.
    pub fn create_element(&self, tag: &str) -> HostElement {
        let definition = self.registry.borrow().get(tag);
        HostElement::construct(
            tag,
            definition,
            Rc::clone(&self.registry),
            Rc::clone(&self.scheduler),
        )
    }

    /// Whether a tag is defined.
    pub fn is_defined(&self, tag: &str) -> bool {
        self.registry.borrow().contains(tag)
    }

    /// Drain scheduled work: mutation-batch deliveries, deferred unmounts,
    /// manifest-fetch continuations. Models the end of a synchronous turn.
    pub fn run_until_idle(&self) {
        self.scheduler.run_until_idle();
    }

    /// The host's scheduler.
    pub fn scheduler(&self) -> Rc<Scheduler> {
        Rc::clone(&self.scheduler)
    }
}

/// A registered element type; creates instances of its tag.
#[derive(Clone)]
pub struct ElementType {
    definition: Rc<ElementDefinition>,
    registry: Rc<RefCell<ElementRegistry>>,
    scheduler: Rc<Scheduler>,
}

impl ElementType {
    /// The tag this type is registered under.
    pub fn tag(&self) -> &str {
        self.definition.tag()
    }

    /// Create a new instance, as host-page script would.
    pub fn create(&self) -> HostElement {
        HostElement::construct(
            self.definition.tag(),
            Some(Rc::clone(&self.definition)),
            Rc::clone(&self.registry),
            Rc::clone(&self.scheduler),
        )
    }
}

impl std::fmt::Debug for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementType")
            .field("tag", &self.definition.tag())
            .finish()
    }
}
