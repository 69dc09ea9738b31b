//! Extension trait for attaching context to `Result` errors.
//!
//! This module provides [`ResultExt`], which runs the error side of a `Result` through
//! [`extend`](crate::extend) or [`compose`](crate::compose) without verbose `.map_err()`
//! chains.
//!
//! # Examples
//!
//! ```
//! use error_compose::traits::ResultExt;
//! use error_compose::ErrorValue;
//!
//! fn load_config() -> Result<String, ErrorValue> {
//!     Err::<String, _>("file missing").ctx("loading configuration")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.to_string(), "[loading configuration; file missing]");
//! ```

use crate::traits::MaybeError;
use crate::types::{ErrorValue, ErrorVec};

/// Extension trait for adding context to `Result` types ergonomically.
///
/// Context is prepended: it renders before the original error, and both stay reachable
/// through [`ErrorValue::contains`].
pub trait ResultExt<T> {
    /// Prepends `context` to the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_compose::traits::ResultExt;
    ///
    /// let result: Result<(), &str> = Err("refused");
    /// let err = result.ctx("connecting to db").unwrap_err();
    /// assert_eq!(err.to_string(), "[connecting to db; refused]");
    /// ```
    fn ctx<C: Into<ErrorValue>>(self, context: C) -> Result<T, ErrorValue>;

    /// Prepends lazily-built context to the error.
    ///
    /// The closure only runs on the error path.
    fn ctx_with<C, F>(self, f: F) -> Result<T, ErrorValue>
    where
        C: Into<ErrorValue>,
        F: FnOnce() -> C;

    /// Composes the error with `other`, keeping the error first.
    ///
    /// An absent `other` still wraps the error in a one-child composite, as
    /// [`compose`](crate::compose) does.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_compose::traits::ResultExt;
    /// use error_compose::ErrorValue;
    ///
    /// let cleanup = Some(ErrorValue::new("cleanup failed"));
    /// let result: Result<(), &str> = Err("write failed");
    /// let err = result.compose_err(cleanup).unwrap_err();
    /// assert_eq!(err.to_string(), "[write failed; cleanup failed]");
    /// ```
    fn compose_err<M: MaybeError>(self, other: M) -> Result<T, ErrorValue>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ErrorValue>,
{
    #[inline]
    fn ctx<C: Into<ErrorValue>>(self, context: C) -> Result<T, ErrorValue> {
        self.map_err(|e| e.into().extend(context.into()))
    }

    #[inline]
    fn ctx_with<C, F>(self, f: F) -> Result<T, ErrorValue>
    where
        C: Into<ErrorValue>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.into().extend(f().into()))
    }

    fn compose_err<M: MaybeError>(self, other: M) -> Result<T, ErrorValue> {
        self.map_err(|e| {
            let mut children = ErrorVec::new();
            children.push(e.into());
            children.extend(other.into_maybe_error());
            ErrorValue::composite(children)
        })
    }
}
