//! Composite error values: combine many independent failures into one error without
//! losing any of them, then search, extend and classify the result.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_compose::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Composing Failures
//!
//! ```
//! use error_compose::{compose, ErrorValue};
//!
//! let db = ErrorValue::new("db: close failed");
//! let cache: Option<ErrorValue> = None;
//! let log = ErrorValue::new("log: flush failed");
//!
//! let err = compose!(&db, cache, log).unwrap();
//! assert_eq!(err.to_string(), "[db: close failed; log: flush failed]");
//! assert!(err.contains(&db));
//! ```
//!
//! ## Prepending Context
//!
//! ```
//! use error_compose::ErrorValue;
//!
//! let cause = ErrorValue::new("connection refused");
//! let err = cause.clone().extend(ErrorValue::new("loading profile"));
//!
//! assert_eq!(err.to_string(), "[loading profile; connection refused]");
//! assert!(err.contains(&cause));
//! ```
//!
//! ## Identity, Not Equality
//!
//! ```
//! use error_compose::{compose, ErrorValue};
//!
//! let sentinel = ErrorValue::new("not found");
//! let err = compose!(ErrorValue::new("not found")).unwrap();
//!
//! // same message, different instance
//! assert!(!err.contains(&sentinel));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Macros for composing and creating error values
pub mod macros;
/// Free-function forms of the error operations over optional values
pub mod ops;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for building and classifying error values
pub mod traits;
/// ErrorValue and its collections
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use ops::*;
pub use traits::*;
pub use types::{CompositeError, ErrorId, ErrorSet, ErrorValue, ErrorVec, Leaves, SimpleError};
