//! Core traits for building and inspecting error values.
//!
//! - [`MaybeError`]: Conversion into an optional error, where `None` means "no failure"
//! - [`NotExistPredicate`]: Host-supplied classification of "resource not found" leaves
//! - [`ResultExt`]: Context attachment for `Result` errors
//!
//! # Examples
//!
//! ```
//! use error_compose::traits::{MaybeError, ResultExt};
//! use error_compose::ErrorValue;
//!
//! let absent: Option<ErrorValue> = None;
//! assert!(absent.into_maybe_error().is_none());
//!
//! let err = Err::<(), _>("timeout").ctx("fetching user").unwrap_err();
//! assert_eq!(err.leaf_count(), 2);
//! ```

pub mod maybe_error;
pub mod not_exist;
pub mod result_ext;

pub use maybe_error::MaybeError;
#[cfg(feature = "std")]
pub use not_exist::OsNotExist;
pub use not_exist::NotExistPredicate;
pub use result_ext::ResultExt;
