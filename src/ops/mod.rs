//! Operations over optional error values.
//!
//! Each function takes and returns `Option<ErrorValue>` (or borrows of it), where
//! `None` means "no failure occurred". The method forms on [`ErrorValue`] cover the
//! cases where both sides are known to be present.
//!
//! # Examples
//!
//! ```
//! use error_compose::{compose, contains, extend, ErrorValue};
//!
//! let root = ErrorValue::new("connection reset");
//! let err = compose([Some(root.clone()), None]);
//! assert_eq!(err.as_ref().map(ToString::to_string).as_deref(), Some("[connection reset]"));
//!
//! let err = extend(err, Some(ErrorValue::new("syncing shard 3")));
//! assert_eq!(err.as_ref().unwrap().to_string(), "[syncing shard 3; connection reset]");
//! assert!(contains(err.as_ref(), Some(&root)));
//! ```

use crate::traits::{MaybeError, NotExistPredicate};
use crate::types::alloc_type::String;
use crate::types::{ErrorValue, ErrorVec};

/// Composes every present value into one composite, in the order given.
///
/// Absent values are skipped. Nested composites become single children and are not
/// flattened. With no present values the result is `None`; with exactly one it is a
/// one-child composite, never the bare value.
///
/// See the [`compose!`](crate::compose!) macro for a variadic form.
///
/// # Examples
///
/// ```
/// use error_compose::{compose, ErrorValue};
///
/// assert!(compose(Vec::<ErrorValue>::new()).is_none());
/// assert!(compose([None::<ErrorValue>, None]).is_none());
///
/// let a = ErrorValue::new("a");
/// let single = compose([&a]).unwrap();
/// assert!(single.is_composite());
/// assert_eq!(single.to_string(), "[a]");
/// ```
pub fn compose<I>(errors: I) -> Option<ErrorValue>
where
    I: IntoIterator,
    I::Item: MaybeError,
{
    let children: ErrorVec<ErrorValue> =
        errors.into_iter().filter_map(MaybeError::into_maybe_error).collect();
    ErrorValue::from_children(children)
}

/// Returns `true` if `probe` is `base` or one of its descendants.
///
/// Returns `false` if either side is absent. Matching is by identity; see
/// [`ErrorValue::contains`].
#[inline]
pub fn contains(base: Option<&ErrorValue>, probe: Option<&ErrorValue>) -> bool {
    match (base, probe) {
        (Some(base), Some(probe)) => base.contains(probe),
        _ => false,
    }
}

/// Prepends `extension` ahead of `err`.
///
/// If either side is absent the other is returned unchanged, keeping its identity.
/// Otherwise the result is a new composite; see [`ErrorValue::extend`].
///
/// # Examples
///
/// ```
/// use error_compose::{extend, ErrorValue};
///
/// let err = ErrorValue::new("a");
/// assert_eq!(extend(Some(err.clone()), None), Some(err.clone()));
/// assert_eq!(extend(None, Some(err.clone())), Some(err));
/// assert_eq!(extend(None, None), None);
/// ```
#[inline]
pub fn extend(err: Option<ErrorValue>, extension: Option<ErrorValue>) -> Option<ErrorValue> {
    match (err, extension) {
        (None, extension) => extension,
        (err, None) => err,
        (Some(err), Some(extension)) => Some(err.extend(extension)),
    }
}

/// Returns `true` if `predicate` classifies any leaf of `err` as not-exist.
///
/// Absent errors are never not-exist.
#[inline]
pub fn is_not_exist_with<P>(err: Option<&ErrorValue>, predicate: &P) -> bool
where
    P: NotExistPredicate + ?Sized,
{
    err.is_some_and(|err| err.is_not_exist_with(predicate))
}

/// Returns `true` if any leaf of `err` wraps a `NotFound` I/O error.
///
/// Uses [`OsNotExist`](crate::traits::OsNotExist) as the leaf predicate.
///
/// # Examples
///
/// ```
/// use error_compose::{compose, is_not_exist, ErrorValue};
///
/// let missing = std::fs::read("/definitely/not/here").unwrap_err();
/// let err = compose([ErrorValue::from(missing), ErrorValue::new("retry budget spent")]);
///
/// assert!(is_not_exist(err.as_ref()));
/// assert!(!is_not_exist(None));
/// ```
#[cfg(feature = "std")]
#[inline]
pub fn is_not_exist(err: Option<&ErrorValue>) -> bool {
    is_not_exist_with(err, &crate::traits::OsNotExist)
}

/// Creates a fresh leaf error from a message.
///
/// Two calls with the same message produce values that are not equal and do not
/// contain one another.
#[inline]
pub fn new(message: impl Into<String>) -> ErrorValue {
    ErrorValue::new(message)
}
