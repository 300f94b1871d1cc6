//! User schema types, referenced from incident service responses

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use crate::nullable::Nullable;

/// User resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "users")]
    Users,
}

impl UserType {
    pub const ALLOWED: &'static [&'static str] = &["users"];

    pub fn is_valid(value: &str) -> bool {
        Self::ALLOWED.contains(&value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Users => "users",
        }
    }
}

impl Default for UserType {
    fn default() -> Self {
        UserType::Users
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = ContractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "users" => Ok(UserType::Users),
            other => Err(ContractError::UnknownEnumValue {
                type_name: "UserType",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Attributes of a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserAttributes {
    /// Email address of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Handle of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Name of the user. An explicit `null` clears a previously set name,
    /// which is different from leaving the field off the wire.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl UserAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_handle(mut self, handle: String) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn with_name(mut self, name: Nullable<String>) -> Self {
        self.name = name;
        self
    }
}

/// A user, as delivered under `included` in incident service responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<UserAttributes>,
    /// ID of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<UserType>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl User {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(mut self, attributes: UserAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_type(mut self, type_: UserType) -> Self {
        self.type_ = Some(type_);
        self
    }
}
