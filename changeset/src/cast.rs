//! Casting attribute maps into changesets.

use crate::rename::{rename, RenameTable};
use crate::Changeset;
use forma_core::{Attributes, Entity};

/// Cast an attribute map against a permitted-field whitelist.
///
/// Attribute keys are translated external-to-internal first; only
/// permitted fields are admitted into the changes, everything else is
/// silently dropped. An empty whitelist yields a valid changeset with no
/// changes.
pub fn cast(
    entity: Entity,
    attrs: &Attributes,
    permitted: &[String],
    renames: &RenameTable,
) -> Changeset {
    let renamed = rename(attrs, renames);
    let mut changeset = Changeset::new(entity);

    for field in permitted {
        if let Some(value) = renamed.get(field) {
            changeset.put_change(field.clone(), value.clone());
        }
    }

    changeset
}
