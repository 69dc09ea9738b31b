//! Ergonomic macros for building error values.
//!
//! - [`macro@crate::compose`] - Variadic [`compose`](fn@crate::compose) over mixed
//!   `ErrorValue` / `Option<ErrorValue>` arguments.
//! - [`macro@crate::simple`] - Creates a leaf from a format string, without requiring `std`.
//!
//! # Examples
//!
//! ```
//! use error_compose::{compose, simple, ErrorValue};
//!
//! let port = 8080;
//! let bind = simple!("bind on {} failed", port);
//! let absent: Option<ErrorValue> = None;
//!
//! let err = compose!(bind, absent, ErrorValue::new("shutting down")).unwrap();
//! assert_eq!(err.to_string(), "[bind on 8080 failed; shutting down]");
//! ```

/// Composes any number of error values into one composite.
///
/// Every argument may be an `ErrorValue`, a `&ErrorValue` or an optional one; absent
/// arguments are skipped. Expands to a call to [`compose`](fn@crate::compose), so the
/// result is `None` when nothing is present.
///
/// # Examples
///
/// ```
/// use error_compose::{compose, ErrorValue};
///
/// assert!(compose!().is_none());
/// assert!(compose!(None::<ErrorValue>, None::<ErrorValue>).is_none());
///
/// let a = ErrorValue::new("a");
/// let b = ErrorValue::new("b");
/// let nested = compose!(compose!(&a, &b), ErrorValue::new("c")).unwrap();
/// assert_eq!(nested.to_string(), "[[a; b]; c]");
/// assert!(nested.contains(&b));
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose(::core::iter::empty::<$crate::ErrorValue>())
    };
    ($($err:expr),+ $(,)?) => {
        $crate::compose([$($crate::traits::MaybeError::into_maybe_error($err)),+])
    };
}

/// Creates a fresh leaf error from a format string.
///
/// # Examples
///
/// ```
/// use error_compose::simple;
///
/// let user_id = 42;
/// let err = simple!("user {} not found", user_id);
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! simple {
    ($($arg:tt)*) => {
        $crate::ErrorValue::from_fmt(::core::format_args!($($arg)*))
    };
}
