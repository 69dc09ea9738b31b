use error_compose::{compose, ErrorValue};

#[test]
fn simple_serializes_as_tagged_message() {
    let err = ErrorValue::new("a");
    assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"simple":"a"}"#);
}

#[test]
fn composite_serializes_children_in_order() {
    let inner = compose!(ErrorValue::new("a"), ErrorValue::new("b"));
    let err = compose!(inner, ErrorValue::new("c")).unwrap();

    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"composite":[{"composite":[{"simple":"a"},{"simple":"b"}]},{"simple":"c"}]}"#);
}

#[test]
fn deserialized_values_render_identically_with_fresh_identities() {
    let original = compose!(ErrorValue::new("a"), ErrorValue::new("b")).unwrap();
    let json = serde_json::to_string(&original).unwrap();

    let restored: ErrorValue = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.to_string(), "[a; b]");
    assert_ne!(restored, original);
    assert!(!restored.contains(&original.children()[0]));
}

#[test]
fn empty_composite_is_rejected() {
    let result = serde_json::from_str::<ErrorValue>(r#"{"composite":[]}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("at least one child"));
}

#[test]
fn nested_empty_composite_is_rejected() {
    let result = serde_json::from_str::<ErrorValue>(r#"{"composite":[{"simple":"a"},{"composite":[]}]}"#);
    assert!(result.is_err());
}
