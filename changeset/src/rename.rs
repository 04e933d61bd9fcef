//! Attribute and error-key renaming.
//!
//! A rename table maps externally-visible attribute names to the
//! internal field names the schema declares. Attribute maps are
//! translated external-to-internal before casting; error keys are
//! translated back with the flipped table before results reach the
//! caller. All functions here are pure.

use crate::FieldError;
use forma_core::Attributes;

/// An ordered set of (from, to) key-renaming pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenameTable {
    pairs: Vec<(String, String)>,
}

impl RenameTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style pair append.
    pub fn with(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.pairs.push((from.into(), to.into()));
        self
    }

    /// Look up the renamed key, if the table covers it.
    pub fn renamed(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(from, _)| from == key)
            .map(|(_, to)| to.as_str())
    }

    /// Reverse every pair, turning an external-to-internal table into an
    /// internal-to-external one.
    pub fn flip(&self) -> RenameTable {
        RenameTable {
            pairs: self
                .pairs
                .iter()
                .map(|(from, to)| (to.clone(), from.clone()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Rename the keys of an attribute map. Keys covered by the table are
/// replaced with their pair; everything else passes through unchanged.
/// Keys are never dropped.
pub fn rename(attrs: &Attributes, table: &RenameTable) -> Attributes {
    attrs
        .iter()
        .map(|(key, value)| {
            let key = table.renamed(key).unwrap_or(key);
            (key.to_string(), value.clone())
        })
        .collect()
}

/// Rename the field keys of an error list. Used with a flipped table to
/// externalize internal field names before errors reach the caller.
pub fn rewrite_errors(errors: Vec<FieldError>, table: &RenameTable) -> Vec<FieldError> {
    errors
        .into_iter()
        .map(|mut error| {
            if let Some(renamed) = table.renamed(&error.field) {
                error.field = renamed.to_string();
            }
            error
        })
        .collect()
}
