//! Property tests for the validation engine.

use proptest::prelude::*;
use vouch_tests::prelude::*;

fn expected_username_failures(username: &str) -> usize {
    let len = username.chars().count();
    [username.is_empty(), len > 20, len < 5]
        .iter()
        .filter(|failed| **failed)
        .count()
}

fn signup(username: String, role: String) -> Signup {
    Signup { username, role }
}

proptest! {
    #[test]
    fn validate_is_idempotent(username in ".{0,30}", role in ".{0,15}") {
        let registry = fixture_registry();
        let catalog = Catalog::builtin();
        let validator = Validator::new(&registry, &catalog);
        let target = signup(username, role);

        let first = validator.validate(&target).unwrap();
        let second = validator.validate(&target).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_failing_constraint_is_reported(username in ".{0,30}", role in ".{0,15}") {
        let registry = fixture_registry();
        let catalog = Catalog::builtin();
        let validator = Validator::new(&registry, &catalog);
        let target = signup(username.clone(), role.clone());

        let violations = validator.validate(&target).unwrap();

        let role_failures = usize::from(role.chars().count() > 10);
        prop_assert_eq!(
            violations.for_field("username").count(),
            expected_username_failures(&username)
        );
        prop_assert_eq!(violations.for_field("role").count(), role_failures);
    }

    #[test]
    fn messages_follow_declaration_order(username in ".{0,30}", role in ".{0,15}") {
        let registry = fixture_registry();
        let catalog = Catalog::builtin();
        let validator = Validator::new(&registry, &catalog);

        let violations = validator.validate(&signup(username, role)).unwrap();

        // Field order: username before role.
        let fields: Vec<&str> = violations.all().iter().map(|v| v.field.as_str()).collect();
        let first_role = fields.iter().position(|f| *f == "role").unwrap_or(fields.len());
        prop_assert!(fields[first_role..].iter().all(|f| *f == "role"));

        // Constraint order within username: Required, MaxLength, MinLength.
        let rank = |kind: &str| match kind {
            "Required" => 0,
            "MaxLength" => 1,
            "MinLength" => 2,
            _ => 3,
        };
        let ranks: Vec<u8> = violations
            .for_field("username")
            .map(|v| rank(v.kind.as_str()))
            .collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn validate_does_not_mutate(username in ".{0,30}", role in ".{0,15}") {
        let registry = fixture_registry();
        let catalog = Catalog::builtin();
        let validator = Validator::new(&registry, &catalog);
        let target = signup(username, role);
        let before = target.clone();
        let declarations_before = format!("{:?}", registry.schema_of::<Signup>());

        validator.validate(&target).unwrap();

        prop_assert_eq!(target, before);
        prop_assert_eq!(format!("{:?}", registry.schema_of::<Signup>()), declarations_before);
    }

    #[test]
    fn constraint_free_fields_never_fail(
        label in proptest::option::of(".{0,40}"),
        score in any::<f64>(),
    ) {
        let target = Plain { label, score };

        prop_assert!(messages(&target).unwrap().is_empty());
    }
}
