//! The validator rule vocabulary.
//!
//! Every validator the pipeline knows is one tagged variant; rule sets
//! carry (field, Rule) pairs and consumers look rules up by `RuleKind`.

use forma_core::Value;

/// A numeric comparison bound for the number validator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Strictly greater than.
    Gt(f64),
    /// Greater than or equal to.
    Gte(f64),
    /// Strictly less than.
    Lt(f64),
    /// Less than or equal to.
    Lte(f64),
    /// Equal to.
    EqualTo(f64),
    /// Not equal to.
    NotEqualTo(f64),
}

impl Bound {
    /// Check a numeric value against this bound.
    pub fn holds(&self, n: f64) -> bool {
        match self {
            Bound::Gt(limit) => n > *limit,
            Bound::Gte(limit) => n >= *limit,
            Bound::Lt(limit) => n < *limit,
            Bound::Lte(limit) => n <= *limit,
            Bound::EqualTo(limit) => n == *limit,
            Bound::NotEqualTo(limit) => n != *limit,
        }
    }

    /// Human-readable description of the requirement.
    pub fn describe(&self) -> String {
        match self {
            Bound::Gt(limit) => format!("must be greater than {}", limit),
            Bound::Gte(limit) => format!("must be greater than or equal to {}", limit),
            Bound::Lt(limit) => format!("must be less than {}", limit),
            Bound::Lte(limit) => format!("must be less than or equal to {}", limit),
            Bound::EqualTo(limit) => format!("must be equal to {}", limit),
            Bound::NotEqualTo(limit) => format!("must be not equal to {}", limit),
        }
    }
}

/// One validator rule for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// The proposed value must be boolean true.
    Acceptance,
    /// The proposed value must not be a member of this set.
    Exclusion(Vec<Value>),
    /// The proposed value must match this regex pattern. The pattern is
    /// compiled when the rule is applied; a pattern that does not compile
    /// is a configuration error, not a validation failure.
    Format(String),
    /// The proposed value must be a member of this sequence.
    Inclusion(Vec<Value>),
    /// The proposed value's size must satisfy these constraints.
    Length {
        min: Option<usize>,
        max: Option<usize>,
        is: Option<usize>,
    },
    /// The proposed value must be numeric and satisfy every bound.
    Number(Vec<Bound>),
    /// The proposed value must be a list fully contained in this sequence.
    Subset(Vec<Value>),
}

/// Discriminant identifying a validator, used for rule lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Acceptance,
    Exclusion,
    Format,
    Inclusion,
    Length,
    Number,
    Subset,
}

impl RuleKind {
    /// The fixed order the validation battery applies validators in.
    pub const BATTERY_ORDER: [RuleKind; 7] = [
        RuleKind::Acceptance,
        RuleKind::Exclusion,
        RuleKind::Format,
        RuleKind::Inclusion,
        RuleKind::Length,
        RuleKind::Number,
        RuleKind::Subset,
    ];
}

impl Rule {
    /// The discriminant of this rule.
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Acceptance => RuleKind::Acceptance,
            Rule::Exclusion(_) => RuleKind::Exclusion,
            Rule::Format(_) => RuleKind::Format,
            Rule::Inclusion(_) => RuleKind::Inclusion,
            Rule::Length { .. } => RuleKind::Length,
            Rule::Number(_) => RuleKind::Number,
            Rule::Subset(_) => RuleKind::Subset,
        }
    }

    /// Length rule with only a minimum.
    pub fn min_length(min: usize) -> Self {
        Rule::Length {
            min: Some(min),
            max: None,
            is: None,
        }
    }

    /// Length rule with only a maximum.
    pub fn max_length(max: usize) -> Self {
        Rule::Length {
            min: None,
            max: Some(max),
            is: None,
        }
    }

    /// Length rule demanding an exact size.
    pub fn exact_length(is: usize) -> Self {
        Rule::Length {
            min: None,
            max: None,
            is: Some(is),
        }
    }
}
