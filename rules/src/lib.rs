//! Forma Rules
//!
//! Typed validation rules and their layered resolution.
//!
//! Responsibilities:
//! - Declare the validator rule vocabulary as tagged variants
//! - Keep per-field rules in ordered, multimap rule sets
//! - Merge caller options, per-type configuration and defaults with
//!   first-occurrence precedence
//! - Resolve per-type/per-verb configuration handed in by the caller

mod config;
mod layers;
mod rule;
mod set;

pub use config::RuleConfig;
pub use layers::RuleLayers;
pub use rule::{Bound, Rule, RuleKind};
pub use set::RuleSet;
