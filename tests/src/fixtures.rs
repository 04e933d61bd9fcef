//! The account domain fixture.
//!
//! Users own an optional profile. Rules live in three places so the
//! scenarios can exercise precedence: compiled-in defaults, a per-type
//! configuration keyed by verb, and per-call options.

use forma_changeset::{
    auto, AutoOptions, Changeset, ChangesetHandler, ChangesetResult, HandlerRegistry,
};
use forma_core::{Attributes, Entity, Value, Verb};
use forma_rules::{Rule, RuleConfig, RuleSet};
use forma_schema::{Schema, SchemaBuilder};
use std::sync::Arc;

/// User and Profile, with the profile owned by the user.
pub fn account_schema() -> Arc<Schema> {
    let mut builder = SchemaBuilder::new();
    builder
        .add_entity("User")
        .field("id", "Int")
        .field("name", "String")
        .field("email", "String")
        .field("age", "Int")
        .field("role", "String")
        .field("terms", "Bool")
        .owned_one("profile", "Profile")
        .done();
    builder
        .add_entity("Profile")
        .field("id", "Int")
        .field("bio", "String")
        .field("website", "String")
        .done();
    Arc::new(builder.build().expect("fixture schema must build"))
}

/// Defaults every entity type falls back to.
pub fn account_defaults() -> RuleSet {
    RuleSet::new().with("name", Rule::min_length(2))
}

/// Per-type rules, keyed by verb so creates and updates differ.
pub fn account_config() -> RuleConfig {
    let roles = vec![Value::String("member".into()), Value::String("admin".into())];
    RuleConfig::new()
        .with(
            "User",
            Verb::Create,
            RuleSet::new()
                .with("email", Rule::Format("^[^@]+@[^@]+$".into()))
                .with("role", Rule::Inclusion(roles))
                .with("terms", Rule::Acceptance),
        )
        .with(
            "User",
            Verb::Update,
            RuleSet::new().with("name", Rule::min_length(5)),
        )
        .with(
            "Profile",
            Verb::Create,
            RuleSet::new().with("bio", Rule::max_length(160)),
        )
        .with(
            "Profile",
            Verb::Update,
            RuleSet::new().with("bio", Rule::max_length(160)),
        )
}

/// A handler running the full pipeline with a fixed base of options.
///
/// The plain entry point uses the base; the options entry point hands
/// the caller's options to the pipeline wholesale.
pub struct AccountHandler {
    schema: Arc<Schema>,
    defaults: RuleSet,
    config: RuleConfig,
    base: AutoOptions,
}

impl ChangesetHandler for AccountHandler {
    fn changeset(&self, entity: Entity, attrs: &Attributes) -> ChangesetResult<Changeset> {
        auto(&self.schema, entity, attrs, &self.base, &self.defaults, &self.config)
    }

    fn changeset_with_opts(
        &self,
        entity: Entity,
        attrs: &Attributes,
        opts: &AutoOptions,
    ) -> ChangesetResult<Changeset> {
        auto(&self.schema, entity, attrs, opts, &self.defaults, &self.config)
    }
}

/// Handlers for both account types, wired to the fixture schema,
/// defaults and configuration.
pub fn account_handlers(schema: &Arc<Schema>) -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    registry.register(
        "User",
        AccountHandler {
            schema: Arc::clone(schema),
            defaults: account_defaults(),
            config: account_config(),
            base: AutoOptions::new()
                .cast(&["name", "email", "age", "role", "terms"])
                .require(&["name", "email"]),
        },
    );
    registry.register(
        "Profile",
        AccountHandler {
            schema: Arc::clone(schema),
            defaults: account_defaults(),
            config: account_config(),
            base: AutoOptions::new().cast(&["bio", "website"]).require(&["bio"]),
        },
    );
    registry
}
