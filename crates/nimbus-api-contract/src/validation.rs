//! Validation helpers for outbound request payloads
//!
//! Validation is advisory: callers run these checks before sending; the
//! client never runs them implicitly.

use validator::Validate;

use crate::error::ContractError;
use crate::incidents::{IncidentServiceCreateRequest, IncidentServiceUpdateRequest};
use crate::security::{
    SecurityMonitoringRuleUpdatePayload, SecurityMonitoringStandardRuleCreatePayload,
};

/// Validate an incident service create request
pub fn validate_incident_service_create_request(
    request: &IncidentServiceCreateRequest,
) -> Result<(), ContractError> {
    if let Some(attributes) = &request.data.attributes {
        attributes.validate()?;
    }
    Ok(())
}

/// Validate an incident service update request
pub fn validate_incident_service_update_request(
    request: &IncidentServiceUpdateRequest,
) -> Result<(), ContractError> {
    if let Some(attributes) = &request.data.attributes {
        attributes.validate()?;
    }
    Ok(())
}

/// Validate a standard rule create payload
pub fn validate_rule_create_payload(
    payload: &SecurityMonitoringStandardRuleCreatePayload,
) -> Result<(), ContractError> {
    payload.validate()?;
    Ok(())
}

/// Validate a rule update payload. Every member is optional, but members
/// that are present must still be well-formed.
pub fn validate_rule_update_payload(
    payload: &SecurityMonitoringRuleUpdatePayload,
) -> Result<(), ContractError> {
    payload.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incidents::{
        IncidentServiceCreateAttributes, IncidentServiceCreateData, IncidentServiceType,
    };
    use crate::security::{
        SecurityMonitoringRuleCase, SecurityMonitoringRuleOptions, SecurityMonitoringRuleSeverity,
        SecurityMonitoringStandardRuleQuery,
    };

    fn create_request(name: &str) -> IncidentServiceCreateRequest {
        IncidentServiceCreateRequest::new(
            IncidentServiceCreateData::new(IncidentServiceType::Services)
                .with_attributes(IncidentServiceCreateAttributes::new(name.to_string())),
        )
    }

    #[test]
    fn test_validate_service_create_request_valid() {
        assert!(validate_incident_service_create_request(&create_request("payments")).is_ok());
    }

    #[test]
    fn test_validate_service_create_request_empty_name() {
        assert!(validate_incident_service_create_request(&create_request("")).is_err());
    }

    #[test]
    fn test_validate_service_create_request_without_attributes() {
        let request = IncidentServiceCreateRequest::new(IncidentServiceCreateData::new(
            IncidentServiceType::Services,
        ));
        assert!(validate_incident_service_create_request(&request).is_ok());
    }

    fn rule_payload(
        name: &str,
        queries: Vec<SecurityMonitoringStandardRuleQuery>,
    ) -> SecurityMonitoringStandardRuleCreatePayload {
        SecurityMonitoringStandardRuleCreatePayload::new(
            vec![SecurityMonitoringRuleCase::new()
                .with_status(SecurityMonitoringRuleSeverity::Low)],
            true,
            "signal raised".to_string(),
            name.to_string(),
            SecurityMonitoringRuleOptions::new(),
            queries,
        )
    }

    #[test]
    fn test_validate_rule_create_payload_valid() {
        let payload = rule_payload(
            "rule",
            vec![SecurityMonitoringStandardRuleQuery::new("source:auth".into())],
        );
        assert!(validate_rule_create_payload(&payload).is_ok());
    }

    #[test]
    fn test_validate_rule_create_payload_empty_name() {
        let payload = rule_payload(
            "",
            vec![SecurityMonitoringStandardRuleQuery::new("source:auth".into())],
        );
        assert!(validate_rule_create_payload(&payload).is_err());
    }

    #[test]
    fn test_validate_rule_create_payload_no_queries() {
        let payload = rule_payload("rule", vec![]);
        assert!(validate_rule_create_payload(&payload).is_err());
    }

    #[test]
    fn test_validate_rule_create_payload_empty_query_string() {
        let payload = rule_payload(
            "rule",
            vec![SecurityMonitoringStandardRuleQuery::new(String::new())],
        );
        assert!(validate_rule_create_payload(&payload).is_err());
    }

    #[test]
    fn test_validate_rule_update_payload_empty_name_names_the_field() {
        let payload = SecurityMonitoringRuleUpdatePayload::new().with_name(String::new());
        let err = validate_rule_update_payload(&payload).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("name"), "{rendered}");
        assert!(rendered.contains("rule name must not be empty"), "{rendered}");
    }

    #[test]
    fn test_validate_rule_update_payload_empty_message_names_the_field() {
        let payload = SecurityMonitoringRuleUpdatePayload::new().with_message(String::new());
        let err = validate_rule_update_payload(&payload).unwrap_err();
        assert!(err.to_string().contains("message must not be empty"));
    }

    #[test]
    fn test_validate_rule_update_payload_present_members_pass() {
        let payload = SecurityMonitoringRuleUpdatePayload::new()
            .with_name("renamed".to_string())
            .with_message("updated".to_string());
        assert!(validate_rule_update_payload(&payload).is_ok());
    }

    #[test]
    fn test_validate_rule_update_payload_empty_is_valid() {
        assert!(validate_rule_update_payload(&SecurityMonitoringRuleUpdatePayload::new()).is_ok());
    }
}
