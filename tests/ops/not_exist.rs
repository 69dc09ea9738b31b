use error_compose::{compose, is_not_exist_with, traits::NotExistPredicate, ErrorValue, SimpleError};

fn missing(leaf: &SimpleError) -> bool {
    leaf.message() == "missing"
}

#[test]
fn absent_is_never_not_exist() {
    assert!(!is_not_exist_with(None, &missing));
}

#[test]
fn simple_delegates_to_predicate() {
    assert!(ErrorValue::new("missing").is_not_exist_with(&missing));
    assert!(!ErrorValue::new("denied").is_not_exist_with(&missing));
}

#[test]
fn composite_matches_if_any_child_matches() {
    let err = compose!(ErrorValue::new("missing"), ErrorValue::new("denied"));
    assert!(is_not_exist_with(err.as_ref(), &missing));

    let err = compose!(ErrorValue::new("denied"), ErrorValue::new("timeout"));
    assert!(!is_not_exist_with(err.as_ref(), &missing));
}

#[test]
fn classification_recurses_into_nested_composites() {
    let inner = compose!(ErrorValue::new("denied"), ErrorValue::new("missing"));
    let err = compose!(ErrorValue::new("timeout"), inner).unwrap();
    assert!(err.is_not_exist_with(&missing));
}

#[test]
fn classification_short_circuits_in_order() {
    use std::cell::RefCell;

    struct Recording(RefCell<Vec<String>>);

    impl NotExistPredicate for Recording {
        fn is_not_exist_leaf(&self, leaf: &SimpleError) -> bool {
            self.0.borrow_mut().push(leaf.message().to_owned());
            leaf.message() == "b"
        }
    }

    let inner = compose!(ErrorValue::new("a"), ErrorValue::new("b"));
    let err = compose!(inner, ErrorValue::new("c")).unwrap();
    let recording = Recording(RefCell::new(Vec::new()));

    assert!(err.is_not_exist_with(&recording));
    assert_eq!(recording.0.into_inner(), ["a", "b"]);
}

#[cfg(feature = "std")]
mod os {
    use error_compose::traits::{NotExistPredicate, OsNotExist};
    use error_compose::{compose, is_not_exist, ErrorValue};
    use std::io;

    #[test]
    fn io_not_found_is_not_exist() {
        let err = ErrorValue::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert!(err.is_not_exist());
        assert_eq!(err.to_string(), "no such file");
    }

    #[test]
    fn other_io_kinds_are_not_not_exist() {
        let err = ErrorValue::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(!err.is_not_exist());
    }

    #[test]
    fn message_leaves_are_not_not_exist() {
        let err = ErrorValue::new("No such file or directory (os error 2)");
        assert!(!OsNotExist.is_not_exist_leaf(err.as_simple().unwrap()));
    }

    #[test]
    fn composite_with_not_found_leaf_is_not_exist() {
        let not_found = ErrorValue::from(io::Error::from(io::ErrorKind::NotFound));
        let other = ErrorValue::from(io::Error::from(io::ErrorKind::TimedOut));

        assert!(is_not_exist(compose!(&not_found, &other).as_ref()));
        assert!(!is_not_exist(compose!(&other, ErrorValue::new("x")).as_ref()));
        assert!(!is_not_exist(None));
    }

    #[test]
    fn real_filesystem_miss_is_not_exist() {
        let err: ErrorValue = std::fs::read("/definitely/not/a/real/path").unwrap_err().into();
        let extended = err.extend(ErrorValue::new("reading settings"));
        assert!(extended.is_not_exist());
    }
}
