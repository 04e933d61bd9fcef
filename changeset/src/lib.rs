//! Forma Changeset
//!
//! Compose layered validation rules into changesets and fold nested
//! (owned one-to-one) changesets into their parents.
//!
//! Responsibilities:
//! - Cast attribute maps against a permitted-field whitelist
//! - Run the fixed per-field validator battery over proposed changes
//! - Translate attribute and error keys between external and internal names
//! - Dispatch to per-type changeset handlers
//! - Compose and merge child changesets for owned one-to-one relations

mod cast;
mod changeset;
mod dispatch;
mod error;
mod mixin;
mod options;
mod rename;
mod validate;

pub use cast::cast;
pub use changeset::{all_valid, replicate_change, replicate_valid_change, Changeset, FieldError};
pub use dispatch::{ChangesetHandler, HandlerRegistry};
pub use error::{ChangesetError, ChangesetResult};
pub use mixin::{cast_mixin, mixin_changeset, put_assoc};
pub use options::AutoOptions;
pub use rename::{rename, rewrite_errors, RenameTable};
pub use validate::auto;
