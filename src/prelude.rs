//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_compose::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`compose!`], [`simple!`]
//! - **Functions**: [`compose`], [`contains`], [`extend`]
//! - **Types**: [`ErrorValue`], [`ErrorSet`]
//! - **Traits**: [`MaybeError`], [`NotExistPredicate`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use error_compose::prelude::*;
//!
//! fn close_all(results: Vec<Result<(), ErrorValue>>) -> Result<(), ErrorValue> {
//!     let mut errors = ErrorSet::new();
//!     for result in results {
//!         errors.push_result(result);
//!     }
//!     errors.into_result()
//! }
//!
//! let outcome = close_all(vec![Ok(()), Err(ErrorValue::new("socket"))]);
//! assert_eq!(outcome.unwrap_err().to_string(), "[socket]");
//! ```

// Macros
pub use crate::{compose, simple};

// Operations
pub use crate::ops::{contains, extend};

// Core types
pub use crate::types::{ErrorSet, ErrorValue};

// Traits
pub use crate::traits::{MaybeError, NotExistPredicate, ResultExt};

#[cfg(feature = "std")]
pub use crate::ops::is_not_exist;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TraceErrorExt;
