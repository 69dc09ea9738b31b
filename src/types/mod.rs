//! Error value types and utilities.
//!
//! This module provides the composite error value and the collections built on it.
//!
//! # Examples
//!
//! ```
//! use error_compose::{ErrorSet, ErrorValue};
//!
//! let mut errors = ErrorSet::new();
//! errors.push(ErrorValue::new("validating name"));
//! errors.push(None::<ErrorValue>);
//! errors.push(ErrorValue::new("validating email"));
//!
//! let err = errors.finish().unwrap();
//! assert_eq!(err.to_string(), "[validating name; validating email]");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_set;
pub mod error_value;

pub use error_set::*;
pub use error_value::*;

/// SmallVec-backed storage for the children of a composite.
///
/// Uses inline storage for up to 2 elements, the size of the most common composition.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
