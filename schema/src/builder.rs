//! SchemaBuilder for constructing an immutable Schema.

use crate::{AssocDef, EntityDef, FieldDef, Schema};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during schema construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate entity type name: {0}")]
    DuplicateTypeName(String),

    #[error("Duplicate field {field} on type {type_name}")]
    DuplicateField { type_name: String, field: String },

    #[error("Unknown primary key {field} on type {type_name}")]
    UnknownPrimaryKey { type_name: String, field: String },

    #[error("Unknown association target {target} for {type_name}.{relation}")]
    UnknownAssocTarget {
        type_name: String,
        relation: String,
        target: String,
    },
}

/// Builder for constructing an immutable Schema.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    /// Entity types being built.
    entities: Vec<EntityDef>,
}

impl SchemaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start declaring an entity type.
    pub fn add_entity(&mut self, name: impl Into<String>) -> EntityBuilder<'_> {
        EntityBuilder {
            builder: self,
            def: EntityDef::new(name),
        }
    }

    /// Finalize the schema, validating type, field and association names.
    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut entities: HashMap<String, EntityDef> = HashMap::new();

        for def in &self.entities {
            if entities.contains_key(&def.name) {
                return Err(SchemaError::DuplicateTypeName(def.name.clone()));
            }

            let mut seen = std::collections::HashSet::new();
            for field in &def.fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        type_name: def.name.clone(),
                        field: field.name.clone(),
                    });
                }
            }

            if !def.has_field(&def.primary_key) {
                return Err(SchemaError::UnknownPrimaryKey {
                    type_name: def.name.clone(),
                    field: def.primary_key.clone(),
                });
            }

            entities.insert(def.name.clone(), def.clone());
        }

        // Association targets can only be checked once all types exist.
        for def in self.entities {
            for assoc in def.assocs.values() {
                if !entities.contains_key(&assoc.target) {
                    return Err(SchemaError::UnknownAssocTarget {
                        type_name: def.name.clone(),
                        relation: assoc.name.clone(),
                        target: assoc.target.clone(),
                    });
                }
            }
        }

        Ok(Schema::new(entities))
    }
}

/// Builder for a single entity type.
#[derive(Debug)]
pub struct EntityBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    def: EntityDef,
}

impl<'a> EntityBuilder<'a> {
    /// Declare a persisted field.
    pub fn field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.def.fields.push(FieldDef::new(name, type_name));
        self
    }

    /// Override the primary key field name (defaults to "id").
    pub fn primary_key(mut self, name: impl Into<String>) -> Self {
        self.def.primary_key = name.into();
        self
    }

    /// Declare an owned one-to-one association.
    pub fn owned_one(mut self, relation: impl Into<String>, target: impl Into<String>) -> Self {
        let assoc = AssocDef::new(relation, target).owned();
        self.def.assocs.insert(assoc.name.clone(), assoc);
        self
    }

    /// Declare a one-to-many association.
    pub fn many(mut self, relation: impl Into<String>, target: impl Into<String>) -> Self {
        let assoc = AssocDef::new(relation, target).many().owned();
        self.def.assocs.insert(assoc.name.clone(), assoc);
        self
    }

    /// Declare an unowned one-to-one association.
    pub fn references_one(mut self, relation: impl Into<String>, target: impl Into<String>) -> Self {
        let assoc = AssocDef::new(relation, target);
        self.def.assocs.insert(assoc.name.clone(), assoc);
        self
    }

    /// Finish this entity type and return to the schema builder.
    pub fn done(self) -> &'a mut SchemaBuilder {
        self.builder.entities.push(self.def);
        self.builder
    }
}
