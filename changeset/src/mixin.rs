//! Nested changeset composition for owned one-to-one relations.
//!
//! A mixin builds a child changeset for a parent's owned relation and
//! folds it into the parent. On create the child is always fresh; on
//! update the child comes from the loaded relation, so an unloaded
//! relation is a usage error rather than a silent overwrite.

use crate::dispatch::HandlerRegistry;
use crate::error::{ChangesetError, ChangesetResult};
use crate::{AutoOptions, Changeset};
use forma_core::{Attributes, Entity, Relation, Verb};
use forma_schema::Schema;

/// Build a child changeset for an owned one-to-one relation of the
/// parent changeset's entity.
///
/// The relation must be declared as owned one-to-one on the parent's
/// type. On a create the child starts fresh; on an update the loaded
/// related entity is the base, an absent relation yields a fresh child,
/// and an unloaded relation is an error.
pub fn mixin_changeset(
    schema: &Schema,
    handlers: &HandlerRegistry,
    parent: &Changeset,
    relation: &str,
    attrs: &Attributes,
    opts: &AutoOptions,
) -> ChangesetResult<Changeset> {
    let type_name = &parent.data.type_name;
    let def = schema
        .entity(type_name)
        .ok_or_else(|| ChangesetError::unknown_type(type_name))?;

    let assoc = def
        .assoc(relation)
        .filter(|a| a.is_owned_one())
        .ok_or_else(|| ChangesetError::invalid_association(type_name, relation))?;

    let child = match parent.action {
        Verb::Create => Entity::new(assoc.target.as_str()),
        Verb::Update => match parent.data.relation(relation) {
            None | Some(Relation::NotLoaded) => {
                return Err(ChangesetError::relation_not_loaded(type_name, relation));
            }
            Some(Relation::Loaded(existing)) => (**existing).clone(),
            Some(Relation::Absent) => Entity::new(assoc.target.as_str()),
        },
    };

    handlers.invoke(child, attrs, opts)
}

/// Fold a child changeset into its parent under a relation key.
///
/// A valid child is attached as a pending association. An invalid child
/// is not attached; its errors move onto the parent and the parent is
/// marked invalid.
pub fn put_assoc(mut parent: Changeset, relation: impl Into<String>, child: Changeset) -> Changeset {
    if child.is_valid() {
        parent.assocs.insert(relation.into(), child);
    } else {
        parent.errors.extend(child.errors);
        parent.valid = false;
    }
    parent
}

/// Build the child changeset for a relation and fold it into the parent
/// in one step.
pub fn cast_mixin(
    schema: &Schema,
    handlers: &HandlerRegistry,
    parent: Changeset,
    relation: &str,
    attrs: &Attributes,
    opts: &AutoOptions,
) -> ChangesetResult<Changeset> {
    let child = mixin_changeset(schema, handlers, &parent, relation, attrs, opts)?;
    Ok(put_assoc(parent, relation, child))
}
