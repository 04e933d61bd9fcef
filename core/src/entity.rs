//! Entity instances and persistence state.
//!
//! An entity is one instance of a schema-declared type: a field map plus
//! a persistence-state tag and slots for its loaded relations. Forma
//! never persists entities itself; the state tag only records what the
//! owning store reported.

use crate::{Attributes, Value};
use std::collections::HashMap;

/// Persistence state of an entity instance.
///
/// An entity is in exactly one state at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityState {
    /// Freshly constructed, not yet persisted.
    Built,
    /// Persisted; unchanged or being updated.
    Loaded,
    /// Persisted, marked for removal.
    Deleted,
}

/// The mutation intent derived from an entity's persistence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Create,
    Update,
}

impl Verb {
    /// Derive the verb from a persistence state: a Built entity is
    /// created, everything else is updated.
    pub fn from_state(state: EntityState) -> Self {
        match state {
            EntityState::Built => Verb::Create,
            EntityState::Loaded | EntityState::Deleted => Verb::Update,
        }
    }
}

/// Load state of a relation on an entity.
///
/// `NotLoaded` means the owning store never materialized the relation;
/// `Absent` means it was loaded and there is no related entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Relation {
    /// The relation was never fetched.
    NotLoaded,
    /// The relation was fetched and is empty.
    Absent,
    /// The relation was fetched and holds a related entity.
    Loaded(Box<Entity>),
}

impl Relation {
    /// Returns true if the relation was never fetched.
    pub fn is_not_loaded(&self) -> bool {
        matches!(self, Relation::NotLoaded)
    }

    /// Get the related entity if one is loaded.
    pub fn loaded(&self) -> Option<&Entity> {
        match self {
            Relation::Loaded(entity) => Some(entity),
            _ => None,
        }
    }
}

/// One instance of a schema-declared entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Name of the schema type this entity belongs to.
    pub type_name: String,
    /// Persistence state reported by the owning store.
    pub state: EntityState,
    /// Field values.
    pub fields: Attributes,
    /// Relation slots, keyed by association name.
    pub relations: HashMap<String, Relation>,
}

impl Entity {
    /// Create a fresh, not-yet-persisted entity with no fields.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            state: EntityState::Built,
            fields: Attributes::new(),
            relations: HashMap::new(),
        }
    }

    /// Create a persisted entity from existing field values.
    pub fn loaded(type_name: impl Into<String>, fields: Attributes) -> Self {
        Self {
            type_name: type_name.into(),
            state: EntityState::Loaded,
            fields,
            relations: HashMap::new(),
        }
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Set a field value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Get a relation slot by association name.
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    /// Set a relation slot.
    pub fn set_relation(&mut self, name: impl Into<String>, relation: Relation) {
        self.relations.insert(name.into(), relation);
    }

    /// The entity's persistence state.
    pub fn state(&self) -> EntityState {
        self.state
    }

    /// Returns true if this entity was never persisted.
    pub fn is_built(&self) -> bool {
        matches!(self.state, EntityState::Built)
    }

    /// Returns true if this entity is persisted and live.
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, EntityState::Loaded)
    }

    /// Returns true if this entity is persisted and marked removed.
    pub fn is_deleted(&self) -> bool {
        matches!(self.state, EntityState::Deleted)
    }

    /// The mutation verb implied by this entity's persistence state.
    pub fn verb(&self) -> Verb {
        Verb::from_state(self.state)
    }
}
