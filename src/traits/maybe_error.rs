//! Trait for values that may or may not hold a failure.
//!
//! [`compose`](crate::compose), [`ErrorSet`](crate::ErrorSet) and the
//! [`compose!`](crate::compose) macro accept anything implementing [`MaybeError`], so
//! plain errors and optional errors can be mixed freely.
//!
//! # Implementations
//!
//! - `ErrorValue` and `&ErrorValue` - always present
//! - `Option<ErrorValue>`, `Option<&ErrorValue>` and `&Option<ErrorValue>` - `None` is absent
//!
//! Borrowed forms clone the handle, which keeps the identity.
//!
//! # Examples
//!
//! ```
//! use error_compose::{traits::MaybeError, ErrorValue};
//!
//! let err = ErrorValue::new("boom");
//!
//! assert_eq!(err.clone().into_maybe_error(), Some(err.clone()));
//! assert_eq!((&err).into_maybe_error(), Some(err));
//! assert_eq!(None::<ErrorValue>.into_maybe_error(), None);
//! ```
use crate::types::ErrorValue;

/// Converts a value into an optional [`ErrorValue`], where `None` means "no failure".
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an optional error value",
    label = "this type does not implement `MaybeError`",
    note = "convert it with `ErrorValue::from` or `ErrorValue::from_error` first"
)]
pub trait MaybeError {
    /// Returns the failure this value holds, or `None` when it holds none.
    fn into_maybe_error(self) -> Option<ErrorValue>;
}

impl MaybeError for ErrorValue {
    #[inline]
    fn into_maybe_error(self) -> Option<ErrorValue> {
        Some(self)
    }
}

impl MaybeError for &ErrorValue {
    #[inline]
    fn into_maybe_error(self) -> Option<ErrorValue> {
        Some(self.clone())
    }
}

impl MaybeError for Option<ErrorValue> {
    #[inline]
    fn into_maybe_error(self) -> Option<ErrorValue> {
        self
    }
}

impl MaybeError for Option<&ErrorValue> {
    #[inline]
    fn into_maybe_error(self) -> Option<ErrorValue> {
        self.cloned()
    }
}

impl MaybeError for &Option<ErrorValue> {
    #[inline]
    fn into_maybe_error(self) -> Option<ErrorValue> {
        self.clone()
    }
}
