// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Shared request/execute/decode routine used by every resource API

use std::sync::Arc;

use nimbus_api_contract::{ApiErrorResponse, Decoded};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::AuthConfig;
use crate::configuration::Configuration;
use crate::error::{ApiErrorPayload, RestClientError};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Statuses for which the vendor documents an [`ApiErrorResponse`] body.
const MODELED_ERROR_STATUSES: &[u16] = &[400, 401, 403, 404, 429];

/// A decoded response together with the raw HTTP outcome.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub entity: T,
}

impl<T> ApiResponse<T> {
    /// First value of the named response header, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// One API operation, ready to be sent.
pub(crate) struct RequestSpec {
    pub operation_id: &'static str,
    pub method: reqwest::Method,
    /// Path segments, percent-escaped individually when the URL is built.
    pub path: Vec<String>,
    /// Query parameters; only supplied parameters appear here.
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
    pub unstable: bool,
}

impl RequestSpec {
    pub(crate) fn new(
        operation_id: &'static str,
        method: reqwest::Method,
        path: Vec<String>,
    ) -> Self {
        Self {
            operation_id,
            method,
            path,
            query: Vec::new(),
            body: None,
            unstable: false,
        }
    }

    pub(crate) fn unstable(mut self) -> Self {
        self.unstable = true;
        self
    }

    pub(crate) fn query(mut self, name: &'static str, value: String) -> Self {
        self.query.push((name, value));
        self
    }

    pub(crate) fn json_body<B: serde::Serialize>(
        mut self,
        body: &B,
    ) -> Result<Self, RestClientError> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }
}

/// Shared client: configuration, credentials, and the transport. Resource
/// APIs hold it behind an `Arc` and funnel every operation through
/// [`ApiClient::execute`] / [`ApiClient::execute_empty`].
#[derive(Clone)]
pub struct ApiClient {
    config: Configuration,
    auth: AuthConfig,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    /// A client using the production reqwest transport.
    pub fn new(config: Configuration, auth: AuthConfig) -> Self {
        Self::with_transport(config, auth, Arc::new(ReqwestTransport::new()))
    }

    /// A client with an injected transport.
    pub fn with_transport(
        config: Configuration,
        auth: AuthConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            config,
            auth,
            transport,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Mutable access, for enabling unstable operations or overriding
    /// servers after construction.
    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    /// Execute an operation and decode the response body.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
    ) -> Result<ApiResponse<Decoded<T>>, RestClientError> {
        let response = self.send(spec).await?;
        Self::check_status(&response)?;

        let entity = serde_json::from_slice::<Decoded<T>>(&response.body).map_err(|err| {
            RestClientError::Deserialization {
                message: err.to_string(),
                body: response.body.clone(),
            }
        })?;

        Ok(ApiResponse {
            status: response.status,
            headers: response.headers,
            entity,
        })
    }

    /// Execute an operation whose success response has no body.
    pub(crate) async fn execute_empty(
        &self,
        spec: RequestSpec,
    ) -> Result<ApiResponse<()>, RestClientError> {
        let response = self.send(spec).await?;
        Self::check_status(&response)?;
        Ok(ApiResponse {
            status: response.status,
            headers: response.headers,
            entity: (),
        })
    }

    async fn send(&self, spec: RequestSpec) -> Result<HttpResponse, RestClientError> {
        if spec.unstable {
            if !self.config.is_unstable_operation_enabled(spec.operation_id) {
                return Err(RestClientError::UnstableOperationDisabled {
                    operation: spec.operation_id.to_string(),
                });
            }
            warn!(operation = spec.operation_id, "using an unstable operation");
        }

        let mut url = self.config.server_url_for(spec.operation_id).clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| RestClientError::InvalidBaseUrl)?;
            segments.pop_if_empty();
            for segment in &spec.path {
                segments.push(segment);
            }
        }
        for (name, value) in &spec.query {
            url.query_pairs_mut().append_pair(name, value);
        }

        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), self.config.user_agent().to_string()),
        ];
        if spec.body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        headers.extend(self.auth.headers());

        debug!(method = %spec.method, url = %url, operation = spec.operation_id, "sending request");

        let response = self
            .transport
            .execute(HttpRequest {
                method: spec.method,
                url,
                headers,
                body: spec.body,
            })
            .await?;

        debug!(status = response.status, operation = spec.operation_id, "received response");
        Ok(response)
    }

    fn check_status(response: &HttpResponse) -> Result<(), RestClientError> {
        if response.status < 300 {
            return Ok(());
        }

        // Decode the vendor error payload where one is documented; a body
        // that does not match is kept raw.
        let error_model = if MODELED_ERROR_STATUSES.contains(&response.status) {
            serde_json::from_slice::<ApiErrorResponse>(&response.body).ok()
        } else {
            None
        };

        Err(RestClientError::Api(ApiErrorPayload {
            status: response.status,
            status_line: response.status_line(),
            body: response.body.clone(),
            error_model,
        }))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("auth", &self.auth)
            .finish()
    }
}
