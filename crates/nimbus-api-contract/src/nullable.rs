//! Tri-state wrapper for fields where JSON `null` differs from a missing key

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field value that distinguishes three wire states: absent, explicit
/// `null`, and present with a value.
///
/// Plain `Option` is used for ordinary optional fields; `Nullable` appears
/// only where the API attaches meaning to an explicit `null` (for example,
/// clearing a previously set value). Combine it with
/// `#[serde(default, skip_serializing_if = "Nullable::is_absent")]` so that
/// absent fields stay off the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nullable<T> {
    value: Option<T>,
    is_set: bool,
}

impl<T> Nullable<T> {
    /// A present value.
    pub fn value(value: T) -> Self {
        Self {
            value: Some(value),
            is_set: true,
        }
    }

    /// An explicit `null`.
    pub fn null() -> Self {
        Self {
            value: None,
            is_set: true,
        }
    }

    /// A field that was not on the wire at all.
    pub fn absent() -> Self {
        Self {
            value: None,
            is_set: false,
        }
    }

    /// True when the field was present, whether `null` or a value.
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// True when the field was not present; used as a serde skip predicate.
    pub fn is_absent(&self) -> bool {
        !self.is_set
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.value
    }

    pub fn set(&mut self, value: Option<T>) {
        self.value = value;
        self.is_set = true;
    }

    pub fn unset(&mut self) {
        self.value = None;
        self.is_set = false;
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::value(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.value {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(Self {
            value,
            is_set: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        name: Nullable<String>,
    }

    #[test]
    fn test_absent_field() {
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.name.is_absent());
        assert_eq!(serde_json::to_string(&holder).unwrap(), "{}");
    }

    #[test]
    fn test_explicit_null() {
        let holder: Holder = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert!(holder.name.is_set());
        assert_eq!(holder.name.as_ref(), None);
        assert_eq!(serde_json::to_string(&holder).unwrap(), r#"{"name":null}"#);
    }

    #[test]
    fn test_present_value() {
        let holder: Holder = serde_json::from_str(r#"{"name":"ops"}"#).unwrap();
        assert_eq!(holder.name.as_ref().map(String::as_str), Some("ops"));
        assert_eq!(serde_json::to_string(&holder).unwrap(), r#"{"name":"ops"}"#);
    }

    #[test]
    fn test_set_and_unset() {
        let mut field: Nullable<i64> = Nullable::absent();
        field.set(Some(7));
        assert_eq!(field.as_ref(), Some(&7));
        field.set(None);
        assert!(field.is_set());
        field.unset();
        assert!(field.is_absent());
    }
}
