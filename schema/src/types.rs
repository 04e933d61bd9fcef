//! Schema definition types.

use std::collections::HashMap;

/// Persisted field declaration within an entity type.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Type name (String, Int, Float, Bool, List).
    pub type_name: String,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Cardinality of an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// At most one related entity.
    One,
    /// Any number of related entities.
    Many,
}

/// Association descriptor declared on an entity type.
#[derive(Debug, Clone)]
pub struct AssocDef {
    /// Association name (the relation key).
    pub name: String,
    /// Target entity type name.
    pub target: String,
    /// Cardinality of the association.
    pub cardinality: Cardinality,
    /// Whether the child's lifecycle is owned by the parent
    /// (linked through the parent's primary key).
    pub owned: bool,
}

impl AssocDef {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            cardinality: Cardinality::One,
            owned: false,
        }
    }

    pub fn many(mut self) -> Self {
        self.cardinality = Cardinality::Many;
        self
    }

    pub fn owned(mut self) -> Self {
        self.owned = true;
        self
    }

    /// Returns true if this is an owned one-to-one association, the only
    /// shape mixin composition accepts.
    pub fn is_owned_one(&self) -> bool {
        self.owned && self.cardinality == Cardinality::One
    }
}

/// Entity type definition.
#[derive(Debug, Clone)]
pub struct EntityDef {
    /// Type name.
    pub name: String,
    /// Primary key field name.
    pub primary_key: String,
    /// Persisted fields, in declaration order.
    pub fields: Vec<FieldDef>,
    /// Association descriptors by name.
    pub assocs: HashMap<String, AssocDef>,
}

impl EntityDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_key: "id".to_string(),
            fields: Vec::new(),
            assocs: HashMap::new(),
        }
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if this type declares a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.get_field(name).is_some()
    }

    /// All persisted field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Get an association descriptor by name.
    pub fn assoc(&self, name: &str) -> Option<&AssocDef> {
        self.assocs.get(name)
    }
}
