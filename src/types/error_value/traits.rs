use super::{CompositeError, ErrorValue, SimpleError};
use crate::types::alloc_type::{String, Vec};
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

impl Display for SimpleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // one child iterator per open bracket
        let mut open: Vec<core::slice::Iter<'_, ErrorValue>> = Vec::with_capacity(4);
        open.push(self.children.iter());
        f.write_str("[")?;

        let mut first = true;
        while let Some(siblings) = open.last_mut() {
            let next = siblings.next();
            match next {
                None => {
                    open.pop();
                    f.write_str("]")?;
                    first = false;
                },
                Some(child) => {
                    if !first {
                        f.write_str("; ")?;
                    }
                    match child {
                        ErrorValue::Simple(leaf) => {
                            f.write_str(&leaf.message)?;
                            first = false;
                        },
                        ErrorValue::Composite(set) => {
                            f.write_str("[")?;
                            open.push(set.children.iter());
                            first = true;
                        },
                    }
                },
            }
        }
        Ok(())
    }
}

impl Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(leaf) => Display::fmt(&**leaf, f),
            Self::Composite(set) => Display::fmt(&**set, f),
        }
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(leaf) => f.debug_tuple("Simple").field(&leaf.message).finish(),
            Self::Composite(set) => {
                f.write_str("Composite")?;
                f.debug_list().entries(set.children.iter()).finish()
            },
        }
    }
}

impl PartialEq for ErrorValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for ErrorValue {}

impl Hash for ErrorValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl core::error::Error for ErrorValue {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Simple(leaf) => {
                leaf.source.as_deref().map(|err| err as &(dyn core::error::Error + 'static))
            },
            // no single cause; walk `children()` instead
            Self::Composite(_) => None,
        }
    }
}

impl From<&str> for ErrorValue {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorValue {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ErrorValue {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        Self::from_error(error)
    }
}
