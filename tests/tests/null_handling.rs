//! How absent values interact with each built-in rule.
//!
//! Length rules count null as length 0. Pattern and Range let null through.

use vouch_tests::prelude::*;

fn empty_contact() -> Contact {
    Contact {
        nickname: None,
        email: None,
        age: None,
    }
}

#[test]
fn test_null_fails_min_length_only() {
    // GIVEN - nickname has MaxLength(12), MinLength(3) and no Required
    let contact = empty_contact();

    // WHEN
    let messages = messages(&contact).unwrap();

    // THEN
    assert_eq!(messages, vec!["nickname must be at least 3 characters."]);
}

#[test]
fn test_present_values_are_checked() {
    let contact = Contact {
        nickname: Some("al".into()),
        email: Some("not-an-email".into()),
        age: Some(200),
    };

    assert_eq!(
        messages(&contact).unwrap(),
        vec![
            "nickname must be at least 3 characters.",
            "email must match the pattern ^[^@\\s]+@[^@\\s]+\\.[a-z]+$.",
            "age must be between 0 and 150.",
        ]
    );
}

#[test]
fn test_valid_contact() {
    let contact = Contact {
        nickname: Some("ally".into()),
        email: Some("ally@example.org".into()),
        age: Some(0),
    };

    assert!(messages(&contact).unwrap().is_empty());
}

#[test]
fn test_required_rejects_null() {
    // GIVEN
    struct Draft {
        title: Option<String>,
    }

    let mut builder = RegistryBuilder::new();
    builder
        .add_type::<Draft>("Draft")
        .field(FieldDef::new("title", |d: &Draft| Value::from(d.title.as_deref())).required())
        .done()
        .unwrap();
    let registry = builder.build();
    let catalog = Catalog::builtin();
    let validator = Validator::new(&registry, &catalog);

    // WHEN
    let missing = validator.validate_messages(&Draft { title: None }).unwrap();
    let present = validator
        .validate_messages(&Draft {
            title: Some("Notes".into()),
        })
        .unwrap();

    // THEN
    assert_eq!(missing, vec!["title is required."]);
    assert!(present.is_empty());
}
