//! Tracing integration for error values.
//!
//! The error operations themselves never log. This module emits `tracing` events for
//! an error value on demand: one `error` event for the whole value and one `debug`
//! event per leaf.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-compose = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::{debug, error};

use crate::types::ErrorValue;

/// Emits the rendered error, then every leaf in depth-first order.
///
/// # Example
///
/// ```rust,ignore
/// use error_compose::{compose, tracing_ext::trace_error, ErrorValue};
///
/// let err = compose!(ErrorValue::new("a"), ErrorValue::new("b")).unwrap();
/// trace_error(&err);
/// ```
pub fn trace_error(err: &ErrorValue) {
    error!(
        error = %err,
        id = err.id().get(),
        composite = err.is_composite(),
        leaves = err.leaf_count(),
        "error value recorded"
    );
    for (index, leaf) in err.leaves().enumerate() {
        debug!(index, id = leaf.id().get(), leaf = %leaf, "error leaf");
    }
}

/// Extension trait that traces the error path and passes the value through.
pub trait TraceErrorExt: Sized {
    /// Calls [`trace_error`] if `self` holds a failure, then returns `self` unchanged.
    #[must_use]
    fn trace_err(self) -> Self;
}

impl<T> TraceErrorExt for Result<T, ErrorValue> {
    #[inline]
    fn trace_err(self) -> Self {
        if let Err(err) = &self {
            trace_error(err);
        }
        self
    }
}

impl TraceErrorExt for Option<ErrorValue> {
    #[inline]
    fn trace_err(self) -> Self {
        if let Some(err) = &self {
            trace_error(err);
        }
        self
    }
}
