// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Security monitoring rules resource API

use std::sync::Arc;

use nimbus_api_contract::{
    Decoded, SecurityMonitoringListRulesResponse, SecurityMonitoringRuleResponse,
    SecurityMonitoringRuleUpdatePayload, SecurityMonitoringStandardRuleCreatePayload,
};

use crate::client::{ApiClient, ApiResponse, RequestSpec};
use crate::error::RestClientError;

fn rules_path() -> Vec<String> {
    vec![
        "api".into(),
        "v2".into(),
        "security_monitoring".into(),
        "rules".into(),
    ]
}

fn rule_path(rule_id: &str) -> Vec<String> {
    let mut path = rules_path();
    path.push(rule_id.into());
    path
}

/// Optional parameters for `list_security_monitoring_rules`.
#[derive(Debug, Clone, Default)]
pub struct ListSecurityMonitoringRulesOptionalParams {
    pub page_size: Option<i64>,
    pub page_offset: Option<i64>,
}

impl ListSecurityMonitoringRulesOptionalParams {
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_page_offset(mut self, page_offset: i64) -> Self {
        self.page_offset = Some(page_offset);
        self
    }
}

#[derive(Debug, Clone)]
pub struct SecurityMonitoringApi {
    client: Arc<ApiClient>,
}

impl SecurityMonitoringApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Create a detection rule.
    pub async fn create_security_monitoring_rule(
        &self,
        body: SecurityMonitoringStandardRuleCreatePayload,
    ) -> Result<ApiResponse<Decoded<SecurityMonitoringRuleResponse>>, RestClientError> {
        let spec = RequestSpec::new(
            "v2.CreateSecurityMonitoringRule",
            reqwest::Method::POST,
            rules_path(),
        )
        .json_body(&body)?;
        self.client.execute(spec).await
    }

    /// Delete a rule.
    pub async fn delete_security_monitoring_rule(
        &self,
        rule_id: &str,
    ) -> Result<ApiResponse<()>, RestClientError> {
        let spec = RequestSpec::new(
            "v2.DeleteSecurityMonitoringRule",
            reqwest::Method::DELETE,
            rule_path(rule_id),
        );
        self.client.execute_empty(spec).await
    }

    /// Get a rule by ID.
    pub async fn get_security_monitoring_rule(
        &self,
        rule_id: &str,
    ) -> Result<ApiResponse<Decoded<SecurityMonitoringRuleResponse>>, RestClientError> {
        let spec = RequestSpec::new(
            "v2.GetSecurityMonitoringRule",
            reqwest::Method::GET,
            rule_path(rule_id),
        );
        self.client.execute(spec).await
    }

    /// List rules, paginated.
    pub async fn list_security_monitoring_rules(
        &self,
        params: ListSecurityMonitoringRulesOptionalParams,
    ) -> Result<ApiResponse<Decoded<SecurityMonitoringListRulesResponse>>, RestClientError> {
        let mut spec = RequestSpec::new(
            "v2.ListSecurityMonitoringRules",
            reqwest::Method::GET,
            rules_path(),
        );
        if let Some(page_size) = params.page_size {
            spec = spec.query("page[size]", page_size.to_string());
        }
        if let Some(page_offset) = params.page_offset {
            spec = spec.query("page[offset]", page_offset.to_string());
        }
        self.client.execute(spec).await
    }

    /// Update a rule. Only members present in the payload are changed.
    pub async fn update_security_monitoring_rule(
        &self,
        rule_id: &str,
        body: SecurityMonitoringRuleUpdatePayload,
    ) -> Result<ApiResponse<Decoded<SecurityMonitoringRuleResponse>>, RestClientError> {
        let spec = RequestSpec::new(
            "v2.UpdateSecurityMonitoringRule",
            reqwest::Method::PATCH,
            rule_path(rule_id),
        )
        .json_body(&body)?;
        self.client.execute(spec).await
    }
}
