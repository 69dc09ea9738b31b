use error_compose::traits::ResultExt;
use error_compose::ErrorValue;

#[test]
fn test_ctx_on_err() {
    let result: Result<(), &str> = Err("original");
    let err = result.ctx("context added").unwrap_err();

    assert_eq!(err.to_string(), "[context added; original]");
    assert_eq!(err.leaf_count(), 2);
}

#[test]
fn test_ctx_on_ok() {
    let result: Result<i32, &str> = Ok(42);
    let with_ctx = result.ctx("should not appear");
    assert_eq!(with_ctx.unwrap(), 42);
}

#[test]
fn test_ctx_keeps_original_searchable() {
    let cause = ErrorValue::new("refused");
    let result: Result<(), ErrorValue> = Err(cause.clone());
    let err = result.ctx("connecting").ctx("starting worker").unwrap_err();

    assert_eq!(err.to_string(), "[starting worker; connecting; refused]");
    assert!(err.contains(&cause));
}

#[test]
fn test_ctx_with_lazy_on_ok() {
    let mut called = false;
    let result: Result<(), &str> = Ok(());

    let _ = result.ctx_with(|| {
        called = true;
        "should not be called"
    });
    assert!(!called, "Closure for ctx_with should not be called on Ok result");
}

#[test]
fn test_ctx_with_lazy_on_err() {
    let mut called = false;
    let result: Result<(), &str> = Err("error");

    let err = result
        .ctx_with(|| {
            called = true;
            format!("attempt {}", 3)
        })
        .unwrap_err();
    assert!(called, "Closure for ctx_with should be called on Err result");
    assert_eq!(err.to_string(), "[attempt 3; error]");
}

#[test]
fn test_compose_err_appends_other() {
    let result: Result<(), &str> = Err("write failed");
    let err = result.compose_err(ErrorValue::new("cleanup failed")).unwrap_err();
    assert_eq!(err.to_string(), "[write failed; cleanup failed]");
}

#[test]
fn test_compose_err_with_absent_other_wraps() {
    let result: Result<(), &str> = Err("write failed");
    let err = result.compose_err(None::<ErrorValue>).unwrap_err();
    assert!(err.is_composite());
    assert_eq!(err.to_string(), "[write failed]");
}

#[test]
fn test_compose_err_on_ok_ignores_other() {
    let result: Result<u8, &str> = Ok(1);
    assert_eq!(result.compose_err(ErrorValue::new("unused")).unwrap(), 1);
}
