//! Changeset error types.
//!
//! These are the fatal failures: rule-configuration mistakes and usage
//! errors. Per-field validation failures are never raised through this
//! type; they accumulate inside the returned changeset.

use thiserror::Error;

/// Result type for changeset operations.
pub type ChangesetResult<T> = Result<T, ChangesetError>;

/// Fatal errors raised by changeset composition.
#[derive(Debug, Error)]
pub enum ChangesetError {
    /// A format rule whose pattern does not compile. This is a mistake
    /// in rule setup, not user input, so the pipeline aborts.
    #[error("Invalid format rule for field {field}: {message} (pattern: {pattern})")]
    InvalidFormatRule {
        field: String,
        pattern: String,
        message: String,
    },

    #[error("No changeset handler registered for type {type_name}")]
    HandlerNotFound { type_name: String },

    #[error("{relation} on type {type_name} is not an owned one-to-one association")]
    InvalidAssociation { type_name: String, relation: String },

    #[error("Association {relation} on type {type_name} is not loaded; preload it or set it to null before casting")]
    RelationNotLoaded { type_name: String, relation: String },

    #[error("Unknown entity type: {type_name}")]
    UnknownType { type_name: String },
}

impl ChangesetError {
    pub fn invalid_format_rule(
        field: impl Into<String>,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidFormatRule {
            field: field.into(),
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn handler_not_found(type_name: impl Into<String>) -> Self {
        Self::HandlerNotFound {
            type_name: type_name.into(),
        }
    }

    pub fn invalid_association(type_name: impl Into<String>, relation: impl Into<String>) -> Self {
        Self::InvalidAssociation {
            type_name: type_name.into(),
            relation: relation.into(),
        }
    }

    pub fn relation_not_loaded(type_name: impl Into<String>, relation: impl Into<String>) -> Self {
        Self::RelationNotLoaded {
            type_name: type_name.into(),
            relation: relation.into(),
        }
    }

    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }
}
