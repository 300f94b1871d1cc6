// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Incident services resource API
//!
//! Every operation in this family is unstable and must be enabled by name on
//! the [`Configuration`](crate::configuration::Configuration) before use.

use std::sync::Arc;

use nimbus_api_contract::{
    Decoded, IncidentRelatedObject, IncidentServiceCreateRequest, IncidentServiceResponse,
    IncidentServiceUpdateRequest, IncidentServicesResponse,
};

use crate::client::{ApiClient, ApiResponse, RequestSpec};
use crate::error::RestClientError;

/// Optional parameters for `get_incident_service`.
#[derive(Debug, Clone, Default)]
pub struct GetIncidentServiceOptionalParams {
    pub include: Option<IncidentRelatedObject>,
}

impl GetIncidentServiceOptionalParams {
    pub fn with_include(mut self, include: IncidentRelatedObject) -> Self {
        self.include = Some(include);
        self
    }
}

/// Optional parameters for `list_incident_services`.
#[derive(Debug, Clone, Default)]
pub struct ListIncidentServicesOptionalParams {
    pub include: Option<IncidentRelatedObject>,
    /// Maximum number of services per page.
    pub page_size: Option<i64>,
    /// Offset of the first service to return.
    pub page_offset: Option<i64>,
    /// Substring filter on service names.
    pub filter: Option<String>,
}

impl ListIncidentServicesOptionalParams {
    pub fn with_include(mut self, include: IncidentRelatedObject) -> Self {
        self.include = Some(include);
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_page_offset(mut self, page_offset: i64) -> Self {
        self.page_offset = Some(page_offset);
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct IncidentServicesApi {
    client: Arc<ApiClient>,
}

impl IncidentServicesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Create a new incident service.
    pub async fn create_incident_service(
        &self,
        body: IncidentServiceCreateRequest,
    ) -> Result<ApiResponse<Decoded<IncidentServiceResponse>>, RestClientError> {
        let spec = RequestSpec::new(
            "v2.CreateIncidentService",
            reqwest::Method::POST,
            vec!["api".into(), "v2".into(), "services".into()],
        )
        .unstable()
        .json_body(&body)?;
        self.client.execute(spec).await
    }

    /// Delete an incident service.
    pub async fn delete_incident_service(
        &self,
        service_id: &str,
    ) -> Result<ApiResponse<()>, RestClientError> {
        let spec = RequestSpec::new(
            "v2.DeleteIncidentService",
            reqwest::Method::DELETE,
            vec![
                "api".into(),
                "v2".into(),
                "services".into(),
                service_id.into(),
            ],
        )
        .unstable();
        self.client.execute_empty(spec).await
    }

    /// Get a single incident service, optionally with related objects.
    pub async fn get_incident_service(
        &self,
        service_id: &str,
        params: GetIncidentServiceOptionalParams,
    ) -> Result<ApiResponse<Decoded<IncidentServiceResponse>>, RestClientError> {
        let mut spec = RequestSpec::new(
            "v2.GetIncidentService",
            reqwest::Method::GET,
            vec![
                "api".into(),
                "v2".into(),
                "services".into(),
                service_id.into(),
            ],
        )
        .unstable();
        if let Some(include) = params.include {
            spec = spec.query("include", include.to_string());
        }
        self.client.execute(spec).await
    }

    /// List incident services, paginated.
    pub async fn list_incident_services(
        &self,
        params: ListIncidentServicesOptionalParams,
    ) -> Result<ApiResponse<Decoded<IncidentServicesResponse>>, RestClientError> {
        let mut spec = RequestSpec::new(
            "v2.ListIncidentServices",
            reqwest::Method::GET,
            vec!["api".into(), "v2".into(), "services".into()],
        )
        .unstable();
        if let Some(include) = params.include {
            spec = spec.query("include", include.to_string());
        }
        if let Some(page_size) = params.page_size {
            spec = spec.query("page[size]", page_size.to_string());
        }
        if let Some(page_offset) = params.page_offset {
            spec = spec.query("page[offset]", page_offset.to_string());
        }
        if let Some(filter) = params.filter {
            spec = spec.query("filter", filter);
        }
        self.client.execute(spec).await
    }

    /// Update an incident service.
    pub async fn update_incident_service(
        &self,
        service_id: &str,
        body: IncidentServiceUpdateRequest,
    ) -> Result<ApiResponse<Decoded<IncidentServiceResponse>>, RestClientError> {
        let spec = RequestSpec::new(
            "v2.UpdateIncidentService",
            reqwest::Method::PATCH,
            vec![
                "api".into(),
                "v2".into(),
                "services".into(),
                service_id.into(),
            ],
        )
        .unstable()
        .json_body(&body)?;
        self.client.execute(spec).await
    }
}
