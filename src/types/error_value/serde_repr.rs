use super::ErrorValue;
use crate::types::alloc_type::{String, Vec};
use crate::types::ErrorVec;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire shape of an [`ErrorValue`]: `{"simple": "msg"}` or `{"composite": [...]}`.
///
/// Identities and wrapped sources are not serialized. Every deserialized node gets a
/// fresh identity.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ErrorValueRepr {
    Simple(String),
    Composite(Vec<ErrorValueRepr>),
}

impl From<&ErrorValue> for ErrorValueRepr {
    fn from(value: &ErrorValue) -> Self {
        match value {
            ErrorValue::Simple(leaf) => Self::Simple(leaf.message.clone()),
            ErrorValue::Composite(set) => {
                Self::Composite(set.children.iter().map(ErrorValueRepr::from).collect())
            },
        }
    }
}

impl ErrorValueRepr {
    fn into_value(self) -> Result<ErrorValue, EmptyCompositeError> {
        match self {
            Self::Simple(message) => Ok(ErrorValue::new(message)),
            Self::Composite(children) => {
                let children = children
                    .into_iter()
                    .map(ErrorValueRepr::into_value)
                    .collect::<Result<ErrorVec<_>, _>>()?;
                ErrorValue::from_children(children).ok_or(EmptyCompositeError)
            },
        }
    }
}

impl Serialize for ErrorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ErrorValueRepr::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ErrorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ErrorValueRepr::deserialize(deserializer)?;
        repr.into_value().map_err(serde::de::Error::custom)
    }
}

/// Returned when deserializing a composite that has no children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCompositeError;

impl fmt::Display for EmptyCompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("composite error must contain at least one child")
    }
}

impl core::error::Error for EmptyCompositeError {}
