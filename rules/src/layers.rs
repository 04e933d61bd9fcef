//! Three-layer rule resolution.

use crate::{Rule, RuleKind, RuleSet};

/// The three rule sources for one validation call, in precedence order:
/// caller options first, per-type configuration second, compiled-in
/// defaults last.
///
/// Lookup scans the layers in that order and returns the first rule of
/// the requested kind, so a caller can override a single validator for a
/// single field without restating the type's other rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleLayers<'a> {
    options: &'a RuleSet,
    config: &'a RuleSet,
    defaults: &'a RuleSet,
}

impl<'a> RuleLayers<'a> {
    /// Assemble the layers for one call.
    pub fn new(options: &'a RuleSet, config: &'a RuleSet, defaults: &'a RuleSet) -> Self {
        Self {
            options,
            config,
            defaults,
        }
    }

    /// The effective rule of a given kind for a field: first hit across
    /// options, then config, then defaults.
    pub fn lookup(&self, field: &str, kind: RuleKind) -> Option<&'a Rule> {
        self.options
            .lookup(field, kind)
            .or_else(|| self.config.lookup(field, kind))
            .or_else(|| self.defaults.lookup(field, kind))
    }

    /// Concatenate all three layers into a single rule set, options
    /// first, preserving order within each layer.
    pub fn merged(&self) -> RuleSet {
        self.options
            .clone()
            .concat(self.config.clone())
            .concat(self.defaults.clone())
    }
}
