//! Per-type rule configuration.

use crate::RuleSet;
use forma_core::Verb;
use std::collections::HashMap;

/// Rule configuration keyed by (entity type name, verb).
///
/// The configuration is a plain value built by the caller and passed
/// into the validation entry point; there is no process-wide lookup.
#[derive(Debug, Clone, Default)]
pub struct RuleConfig {
    entries: HashMap<(String, Verb), RuleSet>,
    empty: RuleSet,
}

impl RuleConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule set for a type and verb, replacing any previous one.
    pub fn insert(&mut self, type_name: impl Into<String>, verb: Verb, rules: RuleSet) {
        self.entries.insert((type_name.into(), verb), rules);
    }

    /// Builder-style insert.
    pub fn with(mut self, type_name: impl Into<String>, verb: Verb, rules: RuleSet) -> Self {
        self.insert(type_name, verb, rules);
        self
    }

    /// The configured rule set for a type and verb; empty when absent.
    pub fn resolve(&self, type_name: &str, verb: Verb) -> &RuleSet {
        self.entries
            .get(&(type_name.to_string(), verb))
            .unwrap_or(&self.empty)
    }
}
