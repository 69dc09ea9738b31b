//! Accumulator for failures collected from independent operations.
//!
//! [`ErrorSet`] is the builder form of [`compose`](crate::compose): push every outcome,
//! successful or not, then call [`ErrorSet::finish`].
//!
//! # Examples
//!
//! ```
//! use error_compose::{ErrorSet, ErrorValue};
//!
//! fn close(name: &str, fail: bool) -> Result<(), ErrorValue> {
//!     if fail {
//!         Err(ErrorValue::new(format!("failed to close {name}")))
//!     } else {
//!         Ok(())
//!     }
//! }
//!
//! let mut errors = ErrorSet::new();
//! errors.push_result(close("db", true));
//! errors.push_result(close("cache", false));
//! errors.push_result(close("log", true));
//!
//! let err = errors.finish().unwrap();
//! assert_eq!(err.to_string(), "[failed to close db; failed to close log]");
//! ```

use crate::traits::MaybeError;
use crate::types::{ErrorValue, ErrorVec};

/// Ordered collection of failures waiting to be composed.
///
/// Absent values are dropped on push, so the set only ever holds real failures.
#[derive(Debug, Clone, Default)]
pub struct ErrorSet {
    items: ErrorVec<ErrorValue>,
}

impl ErrorSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    /// Adds a failure. Absent values are ignored.
    #[inline]
    pub fn push<M: MaybeError>(&mut self, error: M) {
        if let Some(error) = error.into_maybe_error() {
            self.items.push(error);
        }
    }

    /// Records the error of `result`, if any, and passes the success value through.
    #[inline]
    pub fn push_result<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        E: Into<ErrorValue>,
    {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.items.push(error.into());
                None
            },
        }
    }

    /// Returns true if no failure has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of recorded failures.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the recorded failures in push order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ErrorValue> {
        self.items.iter()
    }

    /// Composes the recorded failures, or returns `None` if there were none.
    ///
    /// Same normalization as [`compose`](crate::compose): one failure still
    /// yields a one-child composite.
    #[inline]
    pub fn finish(self) -> Option<ErrorValue> {
        ErrorValue::from_children(self.items)
    }

    /// Like [`finish`](Self::finish), but shaped as a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<(), ErrorValue> {
        match self.finish() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl<M: MaybeError> Extend<M> for ErrorSet {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().filter_map(MaybeError::into_maybe_error));
    }
}

impl<M: MaybeError> FromIterator<M> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ErrorSet {
    type Item = ErrorValue;
    type IntoIter = smallvec::IntoIter<[ErrorValue; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a ErrorValue;
    type IntoIter = core::slice::Iter<'a, ErrorValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
