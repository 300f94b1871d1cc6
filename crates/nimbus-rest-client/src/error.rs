// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the Nimbus REST client

use nimbus_api_contract::ApiErrorResponse;
use thiserror::Error;

use crate::transport::TransportError;

/// An HTTP error response from the API.
#[derive(Debug, Clone)]
pub struct ApiErrorPayload {
    /// HTTP status code.
    pub status: u16,
    /// Status line, e.g. `404 Not Found`.
    pub status_line: String,
    /// Raw response body.
    pub body: Vec<u8>,
    /// The vendor error payload, when the body decoded as one. Populated on a
    /// best-effort basis for 400, 401, 403, 404 and 429 responses.
    pub error_model: Option<ApiErrorResponse>,
}

impl ApiErrorPayload {
    /// The error messages from the decoded payload, if any.
    pub fn messages(&self) -> &[String] {
        self.error_model
            .as_ref()
            .map(|model| model.errors.as_slice())
            .unwrap_or(&[])
    }
}

/// Errors returned by client operations
#[derive(Debug, Error)]
pub enum RestClientError {
    /// The operation is marked unstable and has not been opted into.
    #[error("Unstable operation '{operation}' is disabled")]
    UnstableOperationDisabled { operation: String },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status.
    #[error("API error {status_line}", status_line = .0.status_line)]
    Api(ApiErrorPayload),

    /// A success response whose body could not be read as JSON at all.
    #[error("Failed to deserialize response: {message}")]
    Deserialization { message: String, body: Vec<u8> },

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The configured base URL cannot take path segments.
    #[error("Base URL cannot be used as a base for API paths")]
    InvalidBaseUrl,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
