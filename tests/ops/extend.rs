use error_compose::{compose, extend, ErrorValue};

#[test]
fn extend_absent_error_returns_extension_unchanged() {
    let ext = ErrorValue::new("ext");
    let result = extend(None, Some(ext.clone())).unwrap();
    assert!(result.is_same(&ext));
}

#[test]
fn extend_with_absent_extension_returns_error_unchanged() {
    let err = compose!(ErrorValue::new("a")).unwrap();
    let result = extend(Some(err.clone()), None).unwrap();
    assert!(result.is_same(&err));
}

#[test]
fn extend_of_two_absent_values_is_absent() {
    assert!(extend(None, None).is_none());
}

#[test]
fn extension_precedes_original() {
    let a = ErrorValue::new("a");
    let b = ErrorValue::new("b");
    let err = extend(Some(a.clone()), Some(b.clone())).unwrap();

    assert_eq!(err.to_string(), "[b; a]");
    assert!(err.contains(&a));
    assert!(err.contains(&b));
}

#[test]
fn extend_splices_composite_original() {
    let original = compose!(ErrorValue::new("a"), ErrorValue::new("b")).unwrap();
    let err = original.clone().extend(ErrorValue::new("c"));

    assert_eq!(err.to_string(), "[c; a; b]");
    assert_eq!(err.children().len(), 3);
    // the children move over, the old composite node does not
    assert!(!err.contains(&original));
    assert!(err.contains(&original.children()[0]));
}

#[test]
fn extend_keeps_composite_extension_order() {
    let ext = compose!(ErrorValue::new("b"), ErrorValue::new("c")).unwrap();
    let err = ErrorValue::new("a").extend(ext);

    assert_eq!(err.to_string(), "[b; c; a]");
}

#[test]
fn extend_keeps_nested_grandchildren_intact() {
    let inner = compose!(ErrorValue::new("a"), ErrorValue::new("b")).unwrap();
    let original = compose!(&inner, ErrorValue::new("c")).unwrap();
    let err = original.extend(ErrorValue::new("d"));

    assert_eq!(err.to_string(), "[d; [a; b]; c]");
    assert!(err.contains(&inner));
}

#[test]
fn extend_does_not_touch_inputs() {
    let original = compose!(ErrorValue::new("a")).unwrap();
    let ext = compose!(ErrorValue::new("b")).unwrap();
    let err = original.clone().extend(ext.clone());

    assert_eq!(original.to_string(), "[a]");
    assert_eq!(ext.to_string(), "[b]");
    assert_eq!(err.to_string(), "[b; a]");
    assert!(!err.is_same(&original));
}

#[test]
fn extend_ordering_is_pinned_under_both_groupings() {
    let a = ErrorValue::new("a");
    let b = ErrorValue::new("b");
    let c = ErrorValue::new("c");

    let left = extend(extend(Some(a.clone()), Some(b.clone())), Some(c.clone())).unwrap();
    let right = extend(Some(a.clone()), extend(Some(b.clone()), Some(c.clone()))).unwrap();

    assert_eq!(left.to_string(), "[c; b; a]");
    assert_eq!(right.to_string(), "[c; b; a]");
    assert_ne!(left, right);
}

#[test]
fn extend_splices_only_the_top_level() {
    let inner = compose!(ErrorValue::new("a"), ErrorValue::new("b"));
    let nested = compose!(inner);
    let c = ErrorValue::new("c");

    let err = extend(nested, Some(c)).unwrap();
    assert_eq!(err.to_string(), "[c; [a; b]]");
}
