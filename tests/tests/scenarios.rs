//! End-to-end validation scenarios for the demo user fields.

use vouch_tests::prelude::*;

fn login(username: &str) -> Login {
    Login {
        username: username.into(),
    }
}

fn role(role: &str) -> Role {
    Role { role: role.into() }
}

#[test]
fn test_too_short_username_fails_only_min_length() {
    // GIVEN - Required passes (non-empty), MaxLength(20) passes (2 <= 20)
    let target = login("jo");

    // WHEN
    let messages = messages(&target).unwrap();

    // THEN
    assert_eq!(messages, vec!["username must be at least 5 characters."]);
}

#[test]
fn test_long_username_within_bounds() {
    // 19 characters
    assert!(messages(&login("superadministrator")).unwrap().is_empty());
}

#[test]
fn test_role_at_bound_passes() {
    // exactly 10 characters
    assert!(messages(&role("superadmin")).unwrap().is_empty());
}

#[test]
fn test_role_over_bound_fails() {
    assert_eq!(
        messages(&role("superadministrator")).unwrap(),
        vec!["role must be at most 10 characters."]
    );
}

#[test]
fn test_empty_required_field() {
    // GIVEN
    let registry = fixture_registry();
    let catalog = Catalog::builtin();
    let validator = Validator::new(&registry, &catalog);

    // WHEN
    let violations = validator.validate(&login("")).unwrap();

    // THEN - Required fails, and MinLength still runs
    assert_eq!(violations.for_field("username").count(), 2);
    assert_eq!(violations.all()[0].message, "username is required.");
    assert_eq!(violations.all()[1].message, "username must be at least 5 characters.");
}

#[test]
fn test_no_constraints_means_valid() {
    let targets = [
        Plain {
            label: None,
            score: -1.0,
        },
        Plain {
            label: Some(String::new()),
            score: 1e9,
        },
        Plain {
            label: Some("x".repeat(500)),
            score: 0.0,
        },
    ];

    for target in &targets {
        assert!(messages(target).unwrap().is_empty());
    }
}

#[test]
fn test_messages_follow_field_order() {
    let target = Signup {
        username: "jo".into(),
        role: "superadministrator".into(),
    };

    assert_eq!(
        messages(&target).unwrap(),
        vec![
            "username must be at least 5 characters.",
            "role must be at most 10 characters.",
        ]
    );
}

#[test]
fn test_unicode_length_counts_characters() {
    // 5 characters, 10 bytes
    assert!(messages(&login("ÅÄÖÜß")).unwrap().is_empty());
    // 4 characters
    assert_eq!(
        messages(&login("日本語だ")).unwrap(),
        vec!["username must be at least 5 characters."]
    );
}

#[test]
fn test_structured_result_serializes() {
    let registry = fixture_registry();
    let catalog = Catalog::builtin();
    let violations = Validator::new(&registry, &catalog)
        .validate(&role("superadministrator"))
        .unwrap();

    let json = serde_json::to_string(&violations).unwrap();

    assert_eq!(
        json,
        r#"[{"field":"role","kind":"MaxLength","message":"role must be at most 10 characters."}]"#
    );
}
