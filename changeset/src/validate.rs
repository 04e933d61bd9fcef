//! The validation pipeline.
//!
//! `auto` is the primary entry point: cast, required check, per-field
//! validator battery, error rename. Every stage may invalidate the
//! changeset but processing continues so that independent errors all
//! surface; only a rule-configuration mistake aborts the pipeline.

use crate::cast::cast;
use crate::error::{ChangesetError, ChangesetResult};
use crate::rename::rewrite_errors;
use crate::{AutoOptions, Changeset, FieldError};
use forma_core::{Attributes, Entity, Value};
use forma_rules::{Rule, RuleConfig, RuleKind, RuleLayers, RuleSet};
use forma_schema::Schema;
use regex_lite::Regex;

/// Validate an attribute map against an entity, producing a changeset.
///
/// Rules are resolved per field across three layers: `opts.rules`
/// (highest precedence), the configuration entry for the entity's type
/// and verb, and `defaults`. Validation failures accumulate in the
/// returned changeset; a malformed rule aborts with an error instead.
pub fn auto(
    schema: &Schema,
    entity: Entity,
    attrs: &Attributes,
    opts: &AutoOptions,
    defaults: &RuleSet,
    config: &RuleConfig,
) -> ChangesetResult<Changeset> {
    let def = schema
        .entity(&entity.type_name)
        .ok_or_else(|| ChangesetError::unknown_type(&entity.type_name))?;

    let mut changeset = cast(entity, attrs, &opts.cast, &opts.renames);

    validate_required(&mut changeset, &opts.required);

    let config_rules = config.resolve(&def.name, changeset.action);
    let layers = RuleLayers::new(&opts.rules, config_rules, defaults);

    // Every schema-declared field except the primary key, in schema order.
    for field in def.field_names().filter(|f| *f != def.primary_key) {
        validate_field(&mut changeset, field, &layers)?;
    }

    changeset.errors = rewrite_errors(std::mem::take(&mut changeset.errors), &opts.renames.flip());

    Ok(changeset)
}

/// Required-field check: every listed field must hold a non-null value
/// in the changes or on the underlying entity.
fn validate_required(changeset: &mut Changeset, required: &[String]) {
    for field in required {
        let present = changeset.get_field(field).is_some_and(|v| !v.is_null());
        if !present {
            changeset.add_error(
                FieldError::new(field, "can't be blank")
                    .with_meta("validation", Value::String("required".into())),
            );
        }
    }
}

/// Apply the validator battery to one field's proposed change.
///
/// Validators only examine a non-null proposed change; presence is the
/// required-check's job. Within the field the battery order is fixed.
fn validate_field(
    changeset: &mut Changeset,
    field: &str,
    layers: &RuleLayers<'_>,
) -> ChangesetResult<()> {
    let value = match changeset.get_change(field) {
        Some(v) if !v.is_null() => v.clone(),
        _ => return Ok(()),
    };

    for kind in RuleKind::BATTERY_ORDER {
        let Some(rule) = layers.lookup(field, kind) else {
            continue;
        };
        for error in check_rule(field, &value, rule)? {
            changeset.add_error(error);
        }
    }

    Ok(())
}

/// Check one rule against one proposed value. Violations come back as
/// errors to record; a malformed rule is a fatal configuration error.
fn check_rule(field: &str, value: &Value, rule: &Rule) -> ChangesetResult<Vec<FieldError>> {
    let errors = match rule {
        Rule::Acceptance => check_acceptance(field, value).into_iter().collect(),
        Rule::Exclusion(set) => check_exclusion(field, value, set).into_iter().collect(),
        Rule::Format(pattern) => check_format(field, value, pattern)?.into_iter().collect(),
        Rule::Inclusion(set) => check_inclusion(field, value, set).into_iter().collect(),
        Rule::Length { min, max, is } => {
            check_length(field, value, *min, *max, *is).into_iter().collect()
        }
        Rule::Number(bounds) => check_number(field, value, bounds),
        Rule::Subset(set) => check_subset(field, value, set).into_iter().collect(),
    };
    Ok(errors)
}

fn check_acceptance(field: &str, value: &Value) -> Option<FieldError> {
    if value == &Value::Bool(true) {
        return None;
    }
    Some(
        FieldError::new(field, "must be accepted")
            .with_meta("validation", Value::String("acceptance".into())),
    )
}

fn check_exclusion(field: &str, value: &Value, set: &[Value]) -> Option<FieldError> {
    if !set.contains(value) {
        return None;
    }
    Some(
        FieldError::new(field, "is reserved")
            .with_meta("validation", Value::String("exclusion".into())),
    )
}

fn check_format(field: &str, value: &Value, pattern: &str) -> ChangesetResult<Option<FieldError>> {
    let regex = Regex::new(pattern)
        .map_err(|e| ChangesetError::invalid_format_rule(field, pattern, e.to_string()))?;

    let matches = value.as_str().is_some_and(|s| regex.is_match(s));
    if matches {
        return Ok(None);
    }
    Ok(Some(
        FieldError::new(field, "has invalid format")
            .with_meta("validation", Value::String("format".into())),
    ))
}

fn check_inclusion(field: &str, value: &Value, set: &[Value]) -> Option<FieldError> {
    if set.contains(value) {
        return None;
    }
    Some(
        FieldError::new(field, "is invalid")
            .with_meta("validation", Value::String("inclusion".into())),
    )
}

fn check_length(
    field: &str,
    value: &Value,
    min: Option<usize>,
    max: Option<usize>,
    is: Option<usize>,
) -> Option<FieldError> {
    let error = |message: String, count: usize| {
        Some(
            FieldError::new(field, message)
                .with_meta("validation", Value::String("length".into()))
                .with_meta("count", Value::Int(count as i64)),
        )
    };

    let Some(size) = value.len() else {
        return Some(
            FieldError::new(field, "cannot determine length")
                .with_meta("validation", Value::String("length".into())),
        );
    };

    let unit = if value.is_list() { "item(s)" } else { "character(s)" };

    if let Some(expected) = is {
        if size != expected {
            return error(format!("should be {} {}", expected, unit), expected);
        }
    }
    if let Some(floor) = min {
        if size < floor {
            return error(format!("should be at least {} {}", floor, unit), floor);
        }
    }
    if let Some(ceiling) = max {
        if size > ceiling {
            return error(format!("should be at most {} {}", ceiling, unit), ceiling);
        }
    }

    None
}

fn check_number(field: &str, value: &Value, bounds: &[forma_rules::Bound]) -> Vec<FieldError> {
    let Some(n) = value.as_number() else {
        return vec![
            FieldError::new(field, "is not a number")
                .with_meta("validation", Value::String("number".into())),
        ];
    };

    bounds
        .iter()
        .filter(|bound| !bound.holds(n))
        .map(|bound| {
            FieldError::new(field, bound.describe())
                .with_meta("validation", Value::String("number".into()))
        })
        .collect()
}

fn check_subset(field: &str, value: &Value, set: &[Value]) -> Option<FieldError> {
    let Some(items) = value.as_list() else {
        return Some(
            FieldError::new(field, "is not a list")
                .with_meta("validation", Value::String("subset".into())),
        );
    };

    if items.iter().all(|item| set.contains(item)) {
        return None;
    }
    Some(
        FieldError::new(field, "has an invalid entry")
            .with_meta("validation", Value::String("subset".into())),
    )
}
