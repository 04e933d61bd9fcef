//! Per-call validation options.

use crate::RenameTable;
use forma_rules::{Rule, RuleSet};

/// Options supplied by the caller for one validation call.
///
/// `rules` is the highest-precedence rule layer; `cast` is the whitelist
/// of fields admitted into the changeset; `required` lists fields that
/// must hold a non-null value; `renames` maps external attribute names
/// to internal field names.
#[derive(Debug, Clone, Default)]
pub struct AutoOptions {
    /// Fields admitted into the changes. Empty means no changes.
    pub cast: Vec<String>,
    /// Fields that must be present and non-null.
    pub required: Vec<String>,
    /// Caller-supplied rules, overriding configuration and defaults.
    pub rules: RuleSet,
    /// External-to-internal attribute renaming.
    pub renames: RenameTable,
}

impl AutoOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the castable-field whitelist.
    pub fn cast(mut self, fields: &[&str]) -> Self {
        self.cast = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Set the required-field list.
    pub fn require(mut self, fields: &[&str]) -> Self {
        self.required = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Append a caller-supplied rule for a field.
    pub fn rule(mut self, field: impl Into<String>, rule: Rule) -> Self {
        self.rules.push(field, rule);
        self
    }

    /// Append an external-to-internal rename pair.
    pub fn rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.renames = self.renames.with(from, to);
        self
    }

    /// True when nothing was supplied. Handlers are dispatched through
    /// their no-options entry point in that case.
    pub fn is_empty(&self) -> bool {
        self.cast.is_empty()
            && self.required.is_empty()
            && self.rules.is_empty()
            && self.renames.is_empty()
    }
}
