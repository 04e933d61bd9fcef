//! Per-type changeset handler dispatch.

use crate::error::{ChangesetError, ChangesetResult};
use crate::{AutoOptions, Changeset};
use forma_core::{Attributes, Entity};
use std::collections::HashMap;

/// A per-type changeset builder.
///
/// Implementors encapsulate how one entity type casts and validates its
/// attributes. `changeset` is the canonical entry point; types that
/// accept caller-supplied options also implement `changeset_with_opts`.
pub trait ChangesetHandler {
    /// Build a changeset for the entity from the given attributes.
    fn changeset(&self, entity: Entity, attrs: &Attributes) -> ChangesetResult<Changeset>;

    /// Like [`ChangesetHandler::changeset`], with caller-supplied
    /// options. The default implementation ignores the options.
    fn changeset_with_opts(
        &self,
        entity: Entity,
        attrs: &Attributes,
        opts: &AutoOptions,
    ) -> ChangesetResult<Changeset> {
        let _ = opts;
        self.changeset(entity, attrs)
    }
}

/// A registry of changeset handlers keyed by entity type name.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<dyn ChangesetHandler>>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an entity type, replacing any previous
    /// handler for the same type.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        handler: impl ChangesetHandler + 'static,
    ) {
        self.handlers.insert(type_name.into(), Box::new(handler));
    }

    /// Whether a handler is registered for the type.
    pub fn has(&self, type_name: &str) -> bool {
        self.handlers.contains_key(type_name)
    }

    /// Dispatch to the handler registered for the entity's type.
    ///
    /// Empty options route through the handler's plain entry point, so a
    /// handler that never reads options behaves identically either way.
    pub fn invoke(
        &self,
        entity: Entity,
        attrs: &Attributes,
        opts: &AutoOptions,
    ) -> ChangesetResult<Changeset> {
        let handler = self
            .handlers
            .get(&entity.type_name)
            .ok_or_else(|| ChangesetError::handler_not_found(&entity.type_name))?;

        if opts.is_empty() {
            handler.changeset(entity, attrs)
        } else {
            handler.changeset_with_opts(entity, attrs, opts)
        }
    }
}
