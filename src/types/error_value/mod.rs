//! Composite error value with identity-based search.
//!
//! This module provides [`ErrorValue`], a two-variant error type:
//! - [`ErrorValue::Simple`] wraps a single leaf failure carrying a message
//! - [`ErrorValue::Composite`] aggregates an ordered, non-empty list of child values
//!
//! Every node is stamped with an [`ErrorId`] when it is built. Cloning an `ErrorValue`
//! clones the handle, not the node, so the clone keeps the same identity. Equality,
//! hashing and [`ErrorValue::contains`] all compare identities, never messages.
//!
//! # Examples
//!
//! ```
//! use error_compose::ErrorValue;
//!
//! let a = ErrorValue::new("a");
//! let also_a = ErrorValue::new("a");
//!
//! assert_eq!(a, a.clone());
//! assert_ne!(a, also_a);
//! ```

use core::num::NonZeroU64;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::traits::NotExistPredicate;
use crate::types::alloc_type::{format, Arc, Box, BoxedSource, String, ToString, Vec};
use crate::types::ErrorVec;
use smallvec::smallvec;

mod leaves;
#[cfg(feature = "serde")]
mod serde_repr;
mod traits;

pub use leaves::Leaves;
#[cfg(feature = "serde")]
pub use serde_repr::EmptyCompositeError;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity token assigned to every error node at construction.
///
/// Two values share an `ErrorId` only if one is a clone of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorId(NonZeroU64);

impl ErrorId {
    fn next() -> Self {
        let raw = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        // the counter only reaches 0 again after 2^64 allocations; ids are unique before that
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    /// Returns the raw numeric value of the identity.
    #[inline]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

/// Leaf failure carrying an opaque message and, optionally, the error it was built from.
#[derive(Debug)]
pub struct SimpleError {
    id: ErrorId,
    message: String,
    source: Option<BoxedSource>,
}

impl SimpleError {
    /// Returns the identity of this leaf.
    #[inline]
    pub fn id(&self) -> ErrorId {
        self.id
    }

    /// Returns the message exactly as it renders.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the concrete error this leaf was built from, if any.
    #[inline]
    pub fn source_error(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Attempts to view the wrapped source as a concrete error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_compose::ErrorValue;
    /// use core::fmt;
    ///
    /// #[derive(Debug)]
    /// struct Timeout;
    ///
    /// impl fmt::Display for Timeout {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str("timed out")
    ///     }
    /// }
    ///
    /// impl core::error::Error for Timeout {}
    ///
    /// let err = ErrorValue::from_error(Timeout);
    /// let leaf = err.as_simple().unwrap();
    /// assert!(leaf.downcast_ref::<Timeout>().is_some());
    /// assert_eq!(leaf.message(), "timed out");
    /// ```
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: core::error::Error + 'static,
    {
        self.source.as_deref()?.downcast_ref::<E>()
    }
}

/// Ordered aggregation of one or more child error values.
///
/// Only the crate's own operations build composites, which keeps the child list
/// non-empty and immutable after construction.
#[derive(Debug)]
pub struct CompositeError {
    id: ErrorId,
    children: ErrorVec<ErrorValue>,
}

impl Drop for CompositeError {
    fn drop(&mut self) {
        // unlink uniquely owned descendants level by level so dropping a deep tree
        // never recurses
        let mut pending: Vec<ErrorVec<ErrorValue>> = Vec::new();
        pending.push(core::mem::take(&mut self.children));

        while let Some(children) = pending.pop() {
            for child in children {
                if let ErrorValue::Composite(set) = child {
                    if let Some(mut set) = Arc::into_inner(set) {
                        pending.push(core::mem::take(&mut set.children));
                    }
                }
            }
        }
    }
}

impl CompositeError {
    /// Returns the identity of this composite.
    #[inline]
    pub fn id(&self) -> ErrorId {
        self.id
    }

    /// Returns the direct children in insertion order.
    #[inline]
    pub fn children(&self) -> &[ErrorValue] {
        &self.children
    }

    /// Returns the number of direct children. Never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

/// A failure: either a single leaf or an ordered composite of other failures.
///
/// The "no error" case is expressed as `Option::None` throughout the crate, which keeps
/// it distinct from a composite: the public operations never produce an empty composite.
#[must_use]
#[derive(Clone)]
pub enum ErrorValue {
    /// A single leaf failure.
    Simple(Arc<SimpleError>),
    /// An ordered aggregation of child failures.
    Composite(Arc<CompositeError>),
}

impl ErrorValue {
    /// Creates a fresh leaf from a message.
    ///
    /// Each call yields a distinct identity, even for equal messages.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self::leaf(message.into(), None)
    }

    /// Creates a fresh leaf from pre-formatted arguments.
    ///
    /// Used by the [`simple!`](crate::simple) macro so that formatting works without `std`.
    pub fn from_fmt(args: core::fmt::Arguments<'_>) -> Self {
        Self::leaf(format(args), None)
    }

    /// Creates a fresh leaf that renders as `error` and keeps it as its source.
    ///
    /// Keeping the concrete error lets a [`NotExistPredicate`] inspect it later.
    pub fn from_error<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        let message = error.to_string();
        let source: BoxedSource = Box::new(error);
        Self::leaf(message, Some(source))
    }

    fn leaf(message: String, source: Option<BoxedSource>) -> Self {
        Self::Simple(Arc::new(SimpleError { id: ErrorId::next(), message, source }))
    }

    /// Builds a composite from `children`, or returns `None` when there are none.
    pub(crate) fn from_children(children: ErrorVec<ErrorValue>) -> Option<Self> {
        if children.is_empty() {
            return None;
        }
        Some(Self::composite(children))
    }

    /// Builds a composite from a list the caller knows to be non-empty.
    pub(crate) fn composite(children: ErrorVec<ErrorValue>) -> Self {
        debug_assert!(!children.is_empty(), "composite errors need at least one child");
        Self::Composite(Arc::new(CompositeError { id: ErrorId::next(), children }))
    }

    /// Returns the identity of this value.
    #[inline]
    pub fn id(&self) -> ErrorId {
        match self {
            Self::Simple(leaf) => leaf.id,
            Self::Composite(set) => set.id,
        }
    }

    /// Returns `true` if both handles point at the same error instance.
    #[inline]
    pub fn is_same(&self, other: &ErrorValue) -> bool {
        self.id() == other.id()
    }

    /// Returns `true` for a leaf.
    #[inline]
    pub fn is_simple(&self) -> bool {
        matches!(self, Self::Simple(_))
    }

    /// Returns `true` for a composite.
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    /// Returns the leaf, or `None` for a composite.
    #[inline]
    pub fn as_simple(&self) -> Option<&SimpleError> {
        match self {
            Self::Simple(leaf) => Some(leaf),
            Self::Composite(_) => None,
        }
    }

    /// Returns the composite, or `None` for a leaf.
    #[inline]
    pub fn as_composite(&self) -> Option<&CompositeError> {
        match self {
            Self::Simple(_) => None,
            Self::Composite(set) => Some(set),
        }
    }

    /// Returns the direct children of a composite, or an empty slice for a leaf.
    #[inline]
    pub fn children(&self) -> &[ErrorValue] {
        match self {
            Self::Simple(_) => &[],
            Self::Composite(set) => set.children(),
        }
    }

    /// Iterates over every leaf, depth-first in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_compose::{compose, ErrorValue};
    ///
    /// let inner = compose!(ErrorValue::new("a"), ErrorValue::new("b")).unwrap();
    /// let outer = compose!(inner, ErrorValue::new("c")).unwrap();
    ///
    /// let messages: Vec<String> = outer.leaves().map(|leaf| leaf.to_string()).collect();
    /// assert_eq!(messages, ["a", "b", "c"]);
    /// ```
    #[inline]
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(self)
    }

    /// Counts the leaves reachable from this value.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Returns `true` if `probe` is this value or any of its descendants.
    ///
    /// The search is depth-first in insertion order and stops at the first match.
    /// Leaves are matched by identity: an equal-looking leaf built separately does
    /// not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_compose::{compose, ErrorValue};
    ///
    /// let sentinel = ErrorValue::new("disk full");
    /// let err = compose!(ErrorValue::new("io"), sentinel.clone()).unwrap();
    ///
    /// assert!(err.contains(&sentinel));
    /// assert!(!err.contains(&ErrorValue::new("disk full")));
    /// ```
    pub fn contains(&self, probe: &ErrorValue) -> bool {
        let mut stack: Vec<&ErrorValue> = Vec::with_capacity(4);
        stack.push(self);

        while let Some(node) = stack.pop() {
            if node.is_same(probe) {
                return true;
            }
            if let Self::Composite(set) = node {
                // reversed so the first child is visited first
                stack.extend(set.children.iter().rev());
            }
        }
        false
    }

    /// Prepends `extension` ahead of this value's children, producing a new composite.
    ///
    /// A composite contributes its children, a leaf contributes itself. The
    /// extension's own order is kept and it is placed before `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_compose::ErrorValue;
    ///
    /// let err = ErrorValue::new("a").extend(ErrorValue::new("b"));
    /// assert_eq!(err.to_string(), "[b; a]");
    /// ```
    pub fn extend(self, extension: ErrorValue) -> ErrorValue {
        let head = extension.into_children();
        let tail = self.into_children();

        let mut children = ErrorVec::with_capacity(head.len() + tail.len());
        children.extend(head);
        children.extend(tail);
        Self::composite(children)
    }

    fn into_children(self) -> ErrorVec<ErrorValue> {
        match self {
            Self::Composite(set) => set.children.clone(),
            leaf @ Self::Simple(_) => smallvec![leaf],
        }
    }

    /// Returns `true` if `predicate` classifies any leaf as a not-exist failure.
    pub fn is_not_exist_with<P>(&self, predicate: &P) -> bool
    where
        P: NotExistPredicate + ?Sized,
    {
        self.leaves()
            .filter_map(ErrorValue::as_simple)
            .any(|leaf| predicate.is_not_exist_leaf(leaf))
    }

    /// Returns `true` if any leaf wraps a [`std::io::Error`] of kind `NotFound`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_compose::{compose, ErrorValue};
    /// use std::io;
    ///
    /// let missing = ErrorValue::from(io::Error::from(io::ErrorKind::NotFound));
    /// let err = compose!(missing, ErrorValue::new("permission denied")).unwrap();
    /// assert!(err.is_not_exist());
    /// ```
    #[cfg(feature = "std")]
    #[inline]
    pub fn is_not_exist(&self) -> bool {
        self.is_not_exist_with(&crate::traits::OsNotExist)
    }
}
