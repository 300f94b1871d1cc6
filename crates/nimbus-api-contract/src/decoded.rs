//! Typed-or-raw wrapper used at response decode boundaries

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The result of decoding a JSON payload into a schema type.
///
/// A payload that matches the schema becomes `Typed`. Anything else (an
/// unexpected shape, an enum literal outside its allowed set, a missing
/// required field anywhere in the tree) is kept verbatim as `Raw`. Exactly
/// one representation exists by construction, and serializing a `Raw` value
/// reproduces the original payload, so forward-incompatible server responses
/// survive a round-trip instead of failing the call.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    Typed(T),
    Raw(serde_json::Value),
}

impl<T> Decoded<T> {
    pub fn as_typed(&self) -> Option<&T> {
        match self {
            Decoded::Typed(value) => Some(value),
            Decoded::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&serde_json::Value> {
        match self {
            Decoded::Typed(_) => None,
            Decoded::Raw(value) => Some(value),
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Decoded::Raw(_))
    }

    pub fn into_typed(self) -> Option<T> {
        match self {
            Decoded::Typed(value) => Some(value),
            Decoded::Raw(_) => None,
        }
    }
}

impl<T: Serialize> Serialize for Decoded<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Decoded::Typed(value) => value.serialize(serializer),
            Decoded::Raw(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Decoded<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match T::deserialize(&value) {
            Ok(typed) => Ok(Decoded::Typed(typed)),
            Err(_) => Ok(Decoded::Raw(value)),
        }
    }
}
