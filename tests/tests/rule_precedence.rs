//! Rule precedence scenarios: per-call options over per-type
//! configuration over defaults, with configuration keyed by verb.

use forma_tests::prelude::*;

fn run(entity: Entity, attrs: Attributes, opts: AutoOptions) -> Changeset {
    auto(
        &account_schema(),
        entity,
        &attrs,
        &opts,
        &account_defaults(),
        &account_config(),
    )
    .unwrap()
}

mod defaults_layer {
    use super::*;

    #[test]
    fn test_defaults_apply_when_nothing_else_configured() {
        // GIVEN - no name rule in options; create config has none either
        let opts = AutoOptions::new().cast(&["name"]);

        // WHEN
        let changeset = run(Entity::new("User"), attrs! { "name" => "a" }, opts);

        // THEN - the default minimum length of 2 fires
        assert!(!changeset.is_valid());
        assert_eq!(changeset.errors[0].message, "should be at least 2 character(s)");
    }

    #[test]
    fn test_defaults_only_cover_declared_fields() {
        // GIVEN - the Profile type has no "name" field, so the default
        // name rule never touches it
        let opts = AutoOptions::new().cast(&["bio"]);

        // WHEN
        let changeset = run(Entity::new("Profile"), attrs! { "bio" => "x" }, opts);

        // THEN
        assert!(changeset.is_valid());
    }
}

mod config_layer {
    use super::*;

    #[test]
    fn test_config_is_keyed_by_verb() {
        // GIVEN - updates demand a longer name than creates
        let opts = AutoOptions::new().cast(&["name"]);
        let attrs = attrs! { "name" => "ann" };
        let persisted = Entity::loaded("User", attrs! { "id" => 1i64 });

        // WHEN
        let create = run(Entity::new("User"), attrs.clone(), opts.clone());
        let update = run(persisted, attrs, opts);

        // THEN - same attributes, different verdicts
        assert!(create.is_valid());
        assert!(!update.is_valid());
        assert_eq!(update.errors[0].message, "should be at least 5 character(s)");
    }

    #[test]
    fn test_config_shadows_defaults() {
        // GIVEN - the update config carries its own name length rule
        let opts = AutoOptions::new().cast(&["name"]);
        let persisted = Entity::loaded("User", attrs! { "id" => 1i64 });

        // WHEN - "abcd" satisfies the default (2) but not the config (5)
        let changeset = run(persisted, attrs! { "name" => "abcd" }, opts);

        // THEN
        assert!(!changeset.is_valid());
        assert_eq!(changeset.errors[0].message, "should be at least 5 character(s)");
    }
}

mod options_layer {
    use super::*;

    #[test]
    fn test_options_shadow_config_and_defaults() {
        // GIVEN - the caller relaxes the name rule for this call only
        let opts = AutoOptions::new()
            .cast(&["name"])
            .rule("name", Rule::min_length(1));
        let persisted = Entity::loaded("User", attrs! { "id" => 1i64 });

        // WHEN - "a" fails both the config (5) and the default (2)
        let changeset = run(persisted, attrs! { "name" => "a" }, opts);

        // THEN - the caller's rule wins
        assert!(changeset.is_valid());
    }

    #[test]
    fn test_options_override_one_kind_without_hiding_others() {
        // GIVEN - a caller format rule on email; the create config's
        // format rule is shadowed, its other rules still apply
        let opts = AutoOptions::new()
            .cast(&["email", "terms"])
            .rule("email", Rule::Format("^admin@".into()));
        let attrs = attrs! { "email" => "ann@example.com", "terms" => false };

        // WHEN
        let changeset = run(Entity::new("User"), attrs, opts);

        // THEN - caller's format fires, config's acceptance rule fires too
        assert!(!changeset.is_valid());
        let fields: Vec<_> = changeset.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "terms"]);
        assert_eq!(changeset.errors[0].message, "has invalid format");
        assert_eq!(changeset.errors[1].message, "must be accepted");
    }
}
