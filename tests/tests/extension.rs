//! Custom rule kinds and configuration errors across crates.

use std::thread;

use vouch_tests::prelude::*;

/// Passes when the text contains none of the `words` (comma separated).
struct Blocklist;

impl Rule for Blocklist {
    fn kind(&self) -> &str {
        "Blocklist"
    }

    fn check_params(&self, params: &ConstraintParams) -> Result<(), ParamError> {
        params
            .get_str("words")
            .map(|_| ())
            .ok_or_else(|| ParamError::missing("words"))
    }

    fn evaluate(&self, value: &Value, params: &ConstraintParams) -> Result<Outcome, ParamError> {
        let words = params
            .get_str("words")
            .ok_or_else(|| ParamError::missing("words"))?;
        let text = value.to_text().to_lowercase();
        let hit = words.split(',').map(str::trim).find(|w| text.contains(w));
        Ok(match hit {
            Some(word) => Outcome::fail(format!("{{field}} must not contain '{}'.", word)),
            None => Outcome::Pass,
        })
    }
}

struct Handle {
    name: String,
}

fn handle_registry(constraint: ConstraintDef) -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .add_type::<Handle>("Handle")
        .field(
            FieldDef::new("name", |h: &Handle| Value::from(&h.name))
                .required()
                .with(constraint)
                .max_length(15)
                .unwrap(),
        )
        .done()
        .unwrap();
    builder.build()
}

#[test]
fn test_custom_rule_runs_in_declaration_order() {
    // GIVEN
    let blocklist = ConstraintDef::new("Blocklist").with_param("words", "root, admin");
    let registry = handle_registry(blocklist);
    let catalog = Catalog::builtin().with_rule(Blocklist).unwrap();
    let validator = Validator::new(&registry, &catalog);
    validator.check_declarations().unwrap();

    // WHEN
    let violations = validator
        .validate(&Handle {
            name: "the-admin-account".into(),
        })
        .unwrap();

    // THEN
    let kinds: Vec<&str> = violations.all().iter().map(|v| v.kind.as_str()).collect();
    assert_eq!(kinds, vec!["Blocklist", "MaxLength"]);
    assert_eq!(violations.all()[0].message, "name must not contain 'admin'.");
}

#[test]
fn test_custom_kind_without_rule_is_a_configuration_error() {
    let registry = handle_registry(ConstraintDef::new("Blocklist").with_param("words", "root"));
    let catalog = Catalog::builtin();
    let validator = Validator::new(&registry, &catalog);

    let err = validator
        .validate(&Handle { name: "ok".into() })
        .unwrap_err();

    assert_eq!(err.to_string(), "Unknown constraint kind 'Blocklist' on field 'name'");
}

#[test]
fn test_custom_params_checked_at_startup() {
    let registry = handle_registry(ConstraintDef::new("Blocklist"));
    let catalog = Catalog::builtin().with_rule(Blocklist).unwrap();

    let err = Validator::new(&registry, &catalog)
        .check_declarations()
        .unwrap_err();

    assert!(matches!(
        err,
        ConstraintError::InvalidParameter { ref kind, .. } if kind == "Blocklist"
    ));
}

#[test]
fn test_negative_bound_rejected_before_registration() {
    let result = FieldDef::new("name", |h: &Handle| Value::from(&h.name)).max_length(-1);

    assert!(result.is_err());
}

#[test]
fn test_concurrent_validation_shares_registry() {
    // GIVEN
    let registry = fixture_registry();
    let catalog = Catalog::builtin();
    let validator = Validator::new(&registry, &catalog);

    // WHEN
    let results: Vec<Vec<String>> = thread::scope(|s| {
        let handles: Vec<_> = ["jo", "johnny", "", "superadministrator!!!"]
            .into_iter()
            .map(|name| {
                s.spawn(move || {
                    validator
                        .validate_messages(&Login {
                            username: name.into(),
                        })
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // THEN
    assert_eq!(results[0], vec!["username must be at least 5 characters."]);
    assert!(results[1].is_empty());
    assert_eq!(results[2].len(), 2);
    assert_eq!(results[3], vec!["username must be at most 20 characters."]);
}
