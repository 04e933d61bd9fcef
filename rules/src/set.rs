//! Ordered rule sets.

use crate::{Rule, RuleKind};

/// An ordered sequence of (field, rule) pairs.
///
/// Semantically a multimap: the same field may appear any number of
/// times. Order is preserved; when consumers look a rule up by kind the
/// first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    entries: Vec<(String, Rule)>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule for a field.
    pub fn push(&mut self, field: impl Into<String>, rule: Rule) {
        self.entries.push((field.into(), rule));
    }

    /// Builder-style append.
    pub fn with(mut self, field: impl Into<String>, rule: Rule) -> Self {
        self.push(field, rule);
        self
    }

    /// All entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, Rule)> {
        self.entries.iter()
    }

    /// All rules declared for a field, in insertion order.
    pub fn for_field<'a, 'f>(
        &'a self,
        field: &'f str,
    ) -> impl Iterator<Item = &'a Rule> + use<'a, 'f> {
        self.entries
            .iter()
            .filter(move |(name, _)| name == field)
            .map(|(_, rule)| rule)
    }

    /// First rule of the given kind declared for a field, if any.
    pub fn lookup(&self, field: &str, kind: RuleKind) -> Option<&Rule> {
        self.for_field(field).find(|rule| rule.kind() == kind)
    }

    /// Append every entry of another set after this one's.
    pub fn concat(mut self, other: RuleSet) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, Rule)> for RuleSet {
    fn from_iter<T: IntoIterator<Item = (String, Rule)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
