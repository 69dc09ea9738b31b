//! Classification of "resource not found" failures.
//!
//! The crate only walks error trees; deciding what a single leaf means is left to a
//! [`NotExistPredicate`] supplied by the host. [`OsNotExist`] is the stock predicate
//! for `std::io` failures.
//!
//! # Examples
//!
//! ```
//! use error_compose::{compose, is_not_exist_with, ErrorValue, SimpleError};
//!
//! let by_message = |leaf: &SimpleError| leaf.message().ends_with("not found");
//!
//! let err = compose!(ErrorValue::new("bucket not found"), ErrorValue::new("timeout"));
//! assert!(is_not_exist_with(err.as_ref(), &by_message));
//! assert!(!is_not_exist_with(None, &by_message));
//! ```

use crate::types::SimpleError;

/// Decides whether a single leaf represents a missing resource.
///
/// Implemented for every `Fn(&SimpleError) -> bool`, so closures can be passed directly.
///
/// # Examples
///
/// ```
/// use error_compose::{traits::NotExistPredicate, ErrorValue, SimpleError};
///
/// struct MissingKey;
///
/// impl NotExistPredicate for MissingKey {
///     fn is_not_exist_leaf(&self, leaf: &SimpleError) -> bool {
///         leaf.message().starts_with("missing key")
///     }
/// }
///
/// let err = ErrorValue::new("missing key: user.42");
/// assert!(err.is_not_exist_with(&MissingKey));
/// ```
pub trait NotExistPredicate {
    /// Returns `true` if `leaf` means the requested resource does not exist.
    fn is_not_exist_leaf(&self, leaf: &SimpleError) -> bool;
}

impl<F> NotExistPredicate for F
where
    F: Fn(&SimpleError) -> bool,
{
    #[inline]
    fn is_not_exist_leaf(&self, leaf: &SimpleError) -> bool {
        self(leaf)
    }
}

/// Classifies leaves built from a [`std::io::Error`] of kind
/// [`NotFound`](std::io::ErrorKind::NotFound).
///
/// Leaves created from a plain message carry no source and never match.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsNotExist;

#[cfg(feature = "std")]
impl NotExistPredicate for OsNotExist {
    fn is_not_exist_leaf(&self, leaf: &SimpleError) -> bool {
        leaf.downcast_ref::<std::io::Error>()
            .is_some_and(|err| err.kind() == std::io::ErrorKind::NotFound)
    }
}
