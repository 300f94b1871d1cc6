//! Incident service schema types (`/api/v2/services`)

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ContractError;
use crate::users::User;

/// Incident service resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentServiceType {
    #[serde(rename = "services")]
    Services,
}

impl IncidentServiceType {
    pub const ALLOWED: &'static [&'static str] = &["services"];

    pub fn is_valid(value: &str) -> bool {
        Self::ALLOWED.contains(&value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentServiceType::Services => "services",
        }
    }
}

impl Default for IncidentServiceType {
    fn default() -> Self {
        IncidentServiceType::Services
    }
}

impl fmt::Display for IncidentServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncidentServiceType {
    type Err = ContractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "services" => Ok(IncidentServiceType::Services),
            other => Err(ContractError::UnknownEnumValue {
                type_name: "IncidentServiceType",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Object related to an incident service that can be requested via `include`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentRelatedObject {
    #[serde(rename = "users")]
    Users,
}

impl IncidentRelatedObject {
    pub const ALLOWED: &'static [&'static str] = &["users"];

    pub fn is_valid(value: &str) -> bool {
        Self::ALLOWED.contains(&value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentRelatedObject::Users => "users",
        }
    }
}

impl fmt::Display for IncidentRelatedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncidentRelatedObject {
    type Err = ContractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "users" => Ok(IncidentRelatedObject::Users),
            other => Err(ContractError::UnknownEnumValue {
                type_name: "IncidentRelatedObject",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Attributes sent when creating an incident service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct IncidentServiceCreateAttributes {
    /// Name of the service.
    #[validate(length(min = 1, message = "service name must not be empty"))]
    pub name: String,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl IncidentServiceCreateAttributes {
    pub fn new(name: String) -> Self {
        Self {
            name,
            additional_properties: BTreeMap::new(),
        }
    }
}

/// Incident service payload for create requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentServiceCreateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<IncidentServiceCreateAttributes>,
    #[serde(rename = "type")]
    pub type_: IncidentServiceType,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl IncidentServiceCreateData {
    pub fn new(type_: IncidentServiceType) -> Self {
        Self {
            attributes: None,
            type_,
            additional_properties: BTreeMap::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: IncidentServiceCreateAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

/// Request body for creating an incident service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentServiceCreateRequest {
    pub data: IncidentServiceCreateData,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl IncidentServiceCreateRequest {
    pub fn new(data: IncidentServiceCreateData) -> Self {
        Self {
            data,
            additional_properties: BTreeMap::new(),
        }
    }
}

/// Attributes sent when updating an incident service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct IncidentServiceUpdateAttributes {
    /// Name of the service.
    #[validate(length(min = 1, message = "service name must not be empty"))]
    pub name: String,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl IncidentServiceUpdateAttributes {
    pub fn new(name: String) -> Self {
        Self {
            name,
            additional_properties: BTreeMap::new(),
        }
    }
}

/// Incident service payload for update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentServiceUpdateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<IncidentServiceUpdateAttributes>,
    /// The service's ID, when updating an existing service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_: IncidentServiceType,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl IncidentServiceUpdateData {
    pub fn new(type_: IncidentServiceType) -> Self {
        Self {
            attributes: None,
            id: None,
            type_,
            additional_properties: BTreeMap::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: IncidentServiceUpdateAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

/// Request body for updating an incident service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentServiceUpdateRequest {
    pub data: IncidentServiceUpdateData,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl IncidentServiceUpdateRequest {
    pub fn new(data: IncidentServiceUpdateData) -> Self {
        Self {
            data,
            additional_properties: BTreeMap::new(),
        }
    }
}

/// Attributes of an incident service as returned by the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IncidentServiceResponseAttributes {
    /// Timestamp of when the service was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Timestamp of when the service was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    /// Name of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl IncidentServiceResponseAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
}

/// An incident service as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentServiceResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<IncidentServiceResponseAttributes>,
    /// The service's ID.
    pub id: String,
    #[serde(rename = "type")]
    pub type_: IncidentServiceType,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl IncidentServiceResponseData {
    pub fn new(id: String, type_: IncidentServiceType) -> Self {
        Self {
            attributes: None,
            id,
            type_,
            additional_properties: BTreeMap::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: IncidentServiceResponseAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

/// An object related to an incident service, delivered under `included`.
///
/// Trial-decoded against each declared variant; a payload matching none or
/// more than one of them is kept verbatim as `UnparsedObject`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IncidentServiceIncludedItems {
    User(Box<User>),
    UnparsedObject(serde_json::Value),
}

impl<'de> Deserialize<'de> for IncidentServiceIncludedItems {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let mut matched: Option<IncidentServiceIncludedItems> = None;
        let mut match_count = 0u32;
        if let Ok(user) = User::deserialize(&value) {
            matched = Some(IncidentServiceIncludedItems::User(Box::new(user)));
            match_count += 1;
        }
        if match_count == 1 {
            Ok(matched.unwrap())
        } else {
            Ok(IncidentServiceIncludedItems::UnparsedObject(value))
        }
    }
}

/// Response envelope for a single incident service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentServiceResponse {
    pub data: IncidentServiceResponseData,
    /// Objects related to the service, per the request's `include` parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<IncidentServiceIncludedItems>>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl IncidentServiceResponse {
    pub fn new(data: IncidentServiceResponseData) -> Self {
        Self {
            data,
            included: None,
            additional_properties: BTreeMap::new(),
        }
    }
}

/// Pagination cursors in list-response metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IncidentResponseMetaPagination {
    /// The offset to use for the next page of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<i64>,
    /// The offset used for the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Maximum size of pages returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

/// Metadata attached to incident service list responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IncidentResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<IncidentResponseMetaPagination>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

/// Response envelope for a list of incident services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentServicesResponse {
    pub data: Vec<IncidentServiceResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<IncidentServiceIncludedItems>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<IncidentResponseMeta>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl IncidentServicesResponse {
    pub fn new(data: Vec<IncidentServiceResponseData>) -> Self {
        Self {
            data,
            included: None,
            meta: None,
            additional_properties: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_type_allowed_values() {
        assert!(IncidentServiceType::is_valid("services"));
        assert!(!IncidentServiceType::is_valid("teams"));
        assert_eq!(IncidentServiceType::Services.to_string(), "services");

        let err = "teams".parse::<IncidentServiceType>().unwrap_err();
        assert!(err.to_string().contains("IncidentServiceType"));
    }

    #[test]
    fn test_create_request_wire_shape() {
        let request = IncidentServiceCreateRequest::new(
            IncidentServiceCreateData::new(IncidentServiceType::Services)
                .with_attributes(IncidentServiceCreateAttributes::new("payments".into())),
        );
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({
                "data": {
                    "type": "services",
                    "attributes": {"name": "payments"}
                }
            })
        );
    }

    #[test]
    fn test_response_roundtrip_with_unknown_members() {
        let payload = serde_json::json!({
            "data": {
                "id": "svc-9",
                "type": "services",
                "attributes": {
                    "name": "checkout",
                    "created": "2024-03-01T12:00:00Z",
                    "team_handle": "sre"
                }
            },
            "meta_version": 3
        });
        let decoded: IncidentServiceResponse =
            serde_json::from_value(payload.clone()).unwrap();
        let attributes = decoded.data.attributes.as_ref().unwrap();
        assert_eq!(attributes.name.as_deref(), Some("checkout"));
        assert!(attributes.additional_properties.contains_key("team_handle"));
        assert!(decoded.additional_properties.contains_key("meta_version"));
        assert_eq!(serde_json::to_value(&decoded).unwrap(), payload);
    }

    #[test]
    fn test_included_user_parses_as_variant() {
        let payload = serde_json::json!({
            "data": [],
            "included": [
                {"id": "u-1", "type": "users", "attributes": {"name": "Ada"}}
            ]
        });
        let decoded: IncidentServicesResponse = serde_json::from_value(payload).unwrap();
        let included = decoded.included.unwrap();
        match &included[0] {
            IncidentServiceIncludedItems::User(user) => {
                assert_eq!(user.id.as_deref(), Some("u-1"));
            }
            other => panic!("expected user variant, got {other:?}"),
        }
    }

    #[test]
    fn test_included_unknown_object_kept_raw() {
        let raw = serde_json::json!({"id": "t-1", "type": "teams"});
        let payload = serde_json::json!({"data": [], "included": [raw.clone()]});
        let decoded: IncidentServicesResponse = serde_json::from_value(payload).unwrap();
        match &decoded.included.unwrap()[0] {
            IncidentServiceIncludedItems::UnparsedObject(value) => assert_eq!(value, &raw),
            other => panic!("expected unparsed variant, got {other:?}"),
        }
    }

    #[test]
    fn test_list_response_pagination_meta() {
        let payload = serde_json::json!({
            "data": [{"id": "svc-1", "type": "services"}],
            "meta": {"pagination": {"offset": 0, "next_offset": 10, "size": 10}}
        });
        let decoded: IncidentServicesResponse = serde_json::from_value(payload).unwrap();
        let pagination = decoded.meta.unwrap().pagination.unwrap();
        assert_eq!(pagination.next_offset, Some(10));
        assert_eq!(pagination.size, Some(10));
    }
}
