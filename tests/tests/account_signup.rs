//! Signup scenarios: casting, required fields and the validator battery
//! running end to end through the handler registry.

use forma_tests::prelude::*;

fn registry() -> (std::sync::Arc<Schema>, HandlerRegistry) {
    let schema = account_schema();
    let handlers = account_handlers(&schema);
    (schema, handlers)
}

mod valid_signup {
    use super::*;

    #[test]
    fn test_complete_signup_passes_every_validator() {
        // GIVEN
        let (_, handlers) = registry();
        let attrs = attrs! {
            "name" => "Ann",
            "email" => "ann@example.com",
            "age" => 30i64,
            "role" => "member",
            "terms" => true,
        };

        // WHEN
        let changeset = handlers
            .invoke(Entity::new("User"), &attrs, &AutoOptions::new())
            .unwrap();

        // THEN
        assert!(changeset.is_valid());
        assert_eq!(changeset.action, Verb::Create);
        assert_eq!(changeset.changes.len(), 5);
        assert_eq!(changeset.get_change("role"), Some(&Value::String("member".into())));
    }

    #[test]
    fn test_unlisted_attributes_are_dropped_silently() {
        // GIVEN - "admin" is not in the handler's whitelist
        let (_, handlers) = registry();
        let attrs = attrs! {
            "name" => "Ann",
            "email" => "ann@example.com",
            "admin" => true,
        };

        // WHEN
        let changeset = handlers
            .invoke(Entity::new("User"), &attrs, &AutoOptions::new())
            .unwrap();

        // THEN
        assert!(changeset.is_valid());
        assert!(changeset.get_change("admin").is_none());
    }
}

mod invalid_signup {
    use super::*;

    #[test]
    fn test_missing_required_field() {
        // GIVEN
        let (_, handlers) = registry();
        let attrs = attrs! { "name" => "Ann" };

        // WHEN
        let changeset = handlers
            .invoke(Entity::new("User"), &attrs, &AutoOptions::new())
            .unwrap();

        // THEN
        assert!(!changeset.is_valid());
        assert_eq!(changeset.errors.len(), 1);
        assert_eq!(changeset.errors[0].field, "email");
        assert_eq!(changeset.errors[0].message, "can't be blank");
    }

    #[test]
    fn test_every_violation_surfaces_in_field_order() {
        // GIVEN - four fields, each violating its rule
        let (_, handlers) = registry();
        let attrs = attrs! {
            "name" => "a",
            "email" => "not-an-email",
            "role" => "root",
            "terms" => false,
        };

        // WHEN
        let changeset = handlers
            .invoke(Entity::new("User"), &attrs, &AutoOptions::new())
            .unwrap();

        // THEN - errors accumulate in schema field order
        assert!(!changeset.is_valid());
        let fields: Vec<_> = changeset.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "role", "terms"]);
        assert_eq!(changeset.errors[0].message, "should be at least 2 character(s)");
        assert_eq!(changeset.errors[1].message, "has invalid format");
        assert_eq!(changeset.errors[2].message, "is invalid");
        assert_eq!(changeset.errors[3].message, "must be accepted");
    }

    #[test]
    fn test_null_change_counts_as_blank() {
        // GIVEN - email explicitly set to null
        let (_, handlers) = registry();
        let mut attrs = attrs! { "name" => "Ann" };
        attrs.insert("email".to_string(), Value::Null);

        // WHEN
        let changeset = handlers
            .invoke(Entity::new("User"), &attrs, &AutoOptions::new())
            .unwrap();

        // THEN - the null fails the required check but no validator runs
        assert!(!changeset.is_valid());
        assert_eq!(changeset.errors.len(), 1);
        assert_eq!(changeset.errors[0].field, "email");
    }
}

mod external_names {
    use super::*;

    #[test]
    fn test_renamed_attributes_cast_under_internal_name() {
        // GIVEN
        let (_, handlers) = registry();
        let opts = AutoOptions::new()
            .cast(&["name"])
            .require(&["name"])
            .rename("fullName", "name");
        let attrs = attrs! { "fullName" => "Ann" };

        // WHEN
        let changeset = handlers.invoke(Entity::new("User"), &attrs, &opts).unwrap();

        // THEN
        assert!(changeset.is_valid());
        assert_eq!(changeset.get_change("name"), Some(&Value::String("Ann".into())));
    }

    #[test]
    fn test_errors_reported_under_external_name() {
        // GIVEN
        let (_, handlers) = registry();
        let opts = AutoOptions::new()
            .cast(&["name"])
            .require(&["name"])
            .rename("fullName", "name");

        // WHEN
        let changeset = handlers
            .invoke(Entity::new("User"), &attrs!(), &opts)
            .unwrap();

        // THEN
        assert!(!changeset.is_valid());
        assert_eq!(changeset.errors[0].field, "fullName");
    }
}

mod derived_changes {
    use super::*;

    #[test]
    fn test_replicating_a_change_after_validation() {
        // GIVEN
        let (_, handlers) = registry();
        let attrs = attrs! { "name" => "ann", "email" => "ann@example.com" };
        let changeset = handlers
            .invoke(Entity::new("User"), &attrs, &AutoOptions::new())
            .unwrap();

        // WHEN
        let changeset = replicate_valid_change(changeset, "name", "display_name", |v| {
            Value::String(v.as_str().unwrap_or_default().to_uppercase())
        });

        // THEN
        assert_eq!(
            changeset.get_change("display_name"),
            Some(&Value::String("ANN".into()))
        );
    }
}

mod broken_rules {
    use super::*;

    #[test]
    fn test_uncompilable_format_pattern_is_fatal() {
        // GIVEN
        let (_, handlers) = registry();
        let opts = AutoOptions::new()
            .cast(&["email"])
            .rule("email", Rule::Format("(unclosed".into()));
        let attrs = attrs! { "email" => "ann@example.com" };

        // WHEN
        let result = handlers.invoke(Entity::new("User"), &attrs, &opts);

        // THEN - a rule mistake aborts instead of producing field errors
        assert!(matches!(
            result,
            Err(ChangesetError::InvalidFormatRule { field, .. }) if field == "email"
        ));
    }

    #[test]
    fn test_unregistered_type_is_fatal() {
        // GIVEN
        let (_, handlers) = registry();

        // WHEN
        let result = handlers.invoke(Entity::new("Account"), &attrs!(), &AutoOptions::new());

        // THEN
        assert!(matches!(result, Err(ChangesetError::HandlerNotFound { .. })));
    }
}
