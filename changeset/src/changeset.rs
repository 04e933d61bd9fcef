//! The changeset: one proposed mutation of one entity.

use forma_core::{Attributes, Entity, Value, Verb};
use std::collections::HashMap;

/// One validation error attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// The field the error belongs to.
    pub field: String,
    /// Human-readable message describing the violation.
    pub message: String,
    /// Extra key/value context (validator name, counts, ...).
    pub meta: Vec<(String, Value)>,
}

impl FieldError {
    /// Create a new error for a field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            meta: Vec::new(),
        }
    }

    /// Attach a context entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.push((key.into(), value));
        self
    }
}

/// A proposed mutation of one entity.
///
/// Carries the prior entity state, the proposed changes (unique keys),
/// accumulated errors (insertion order preserved) and a validity flag.
/// Validity is monotonic: once a validator marks the changeset invalid
/// it never becomes valid again.
#[derive(Debug, Clone)]
pub struct Changeset {
    /// The entity being mutated, owned by the changeset while in scope.
    pub data: Entity,
    /// Proposed new values by field name.
    pub changes: Attributes,
    /// Accumulated validation errors, in insertion order.
    pub errors: Vec<FieldError>,
    /// Whether the mutation is still considered valid.
    pub valid: bool,
    /// The mutation verb, derived from the entity's persistence state.
    pub action: Verb,
    /// Pending child changesets by relation key.
    pub assocs: HashMap<String, Changeset>,
}

impl Changeset {
    /// Create an empty, valid changeset over an entity.
    pub fn new(data: Entity) -> Self {
        let action = data.verb();
        Self {
            data,
            changes: Attributes::new(),
            errors: Vec::new(),
            valid: true,
            action,
            assocs: HashMap::new(),
        }
    }

    /// Get a proposed change by field name.
    pub fn get_change(&self, field: &str) -> Option<&Value> {
        self.changes.get(field)
    }

    /// Put a proposed change, replacing any previous one for the field.
    pub fn put_change(&mut self, field: impl Into<String>, value: Value) {
        self.changes.insert(field.into(), value);
    }

    /// The current value of a field: the proposed change when one
    /// exists, otherwise the value on the underlying entity.
    pub fn get_field(&self, field: &str) -> Option<&Value> {
        self.changes.get(field).or_else(|| self.data.get(field))
    }

    /// Append an error and mark the changeset invalid.
    pub fn add_error(&mut self, error: FieldError) {
        self.errors.push(error);
        self.valid = false;
    }

    /// Whether the changeset is still valid.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// True iff every changeset in the sequence is valid. An empty sequence
/// is valid.
pub fn all_valid<'a>(changesets: impl IntoIterator<Item = &'a Changeset>) -> bool {
    changesets.into_iter().all(Changeset::is_valid)
}

/// Derive one field's proposed change from another's through a
/// transform. A no-op when the source field has no proposed change.
pub fn replicate_change(
    mut changeset: Changeset,
    from: &str,
    to: &str,
    transform: impl FnOnce(&Value) -> Value,
) -> Changeset {
    if let Some(value) = changeset.get_change(from) {
        let derived = transform(value);
        changeset.put_change(to, derived);
    }
    changeset
}

/// Like [`replicate_change`], but only applied while the changeset is
/// still valid.
pub fn replicate_valid_change(
    changeset: Changeset,
    from: &str,
    to: &str,
    transform: impl FnOnce(&Value) -> Value,
) -> Changeset {
    if changeset.is_valid() {
        replicate_change(changeset, from, to, transform)
    } else {
        changeset
    }
}
