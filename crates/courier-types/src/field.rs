//! Three-state optional value: unset, explicitly null, or present.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional field that keeps "not provided" apart from "explicitly none".
///
/// Containers must pair it with
/// `#[serde(default, skip_serializing_if = "Field::is_unset")]` so that
/// `Unset` never reaches the wire. `Null` serializes as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The caller did not supply a value.
    Unset,
    /// The caller explicitly asked for no value.
    Null,
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// `None` becomes an explicit `Null`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

// A present key is never `Unset`: missing keys come from `#[serde(default)]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_option(Option::deserialize(deserializer)?))
    }
}
