//! The Schema - immutable entity type lookup.

use crate::{AssocDef, EntityDef};
use std::collections::HashMap;

/// The Schema provides runtime lookup of entity type definitions.
/// It is immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Entity type definitions by name.
    entities: HashMap<String, EntityDef>,
}

impl Schema {
    pub(crate) fn new(entities: HashMap<String, EntityDef>) -> Self {
        Self { entities }
    }

    /// Get an entity type definition by name.
    pub fn entity(&self, name: &str) -> Option<&EntityDef> {
        self.entities.get(name)
    }

    /// Check if a type is declared.
    pub fn has_entity(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Get an association descriptor declared on a type.
    pub fn assoc(&self, type_name: &str, relation: &str) -> Option<&AssocDef> {
        self.entities
            .get(type_name)
            .and_then(|def| def.assoc(relation))
    }

    /// All entity type definitions.
    pub fn all_entities(&self) -> impl Iterator<Item = &EntityDef> {
        self.entities.values()
    }

    /// The number of declared types.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}
