// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! REST API client for the Nimbus monitoring service
//!
//! This crate provides a typed HTTP client for the Nimbus REST API. It covers
//! credential handling, per-operation server overrides, the unstable-operation
//! opt-in gate, and one API type per resource family.
//!
//! ## Design Principles
//!
//! The client is built around explicit dependency injection: the HTTP layer
//! is the [`transport::HttpTransport`] trait, so tests exercise the full
//! request-building and response-decoding path against a mock transport.
//! Responses decode into `Decoded<T>`, which keeps payloads the schema types
//! cannot represent instead of failing the call.
//!
//! ```no_run
//! use std::sync::Arc;
//! use nimbus_rest_client::{ApiClient, AuthConfig, Configuration};
//! use nimbus_rest_client::security_monitoring::{
//!     ListSecurityMonitoringRulesOptionalParams, SecurityMonitoringApi,
//! };
//!
//! # async fn run() -> Result<(), nimbus_rest_client::RestClientError> {
//! let client = Arc::new(ApiClient::new(
//!     Configuration::new(),
//!     AuthConfig::from_env(),
//! ));
//! let api = SecurityMonitoringApi::new(client);
//! let _rules = api
//!     .list_security_monitoring_rules(
//!         ListSecurityMonitoringRulesOptionalParams::default().with_page_size(25),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod configuration;
pub mod error;
pub mod incident_services;
pub mod security_monitoring;
pub mod transport;

pub use auth::AuthConfig;
pub use client::{ApiClient, ApiResponse};
pub use configuration::Configuration;
pub use error::{ApiErrorPayload, RestClientError};
pub use incident_services::IncidentServicesApi;
pub use security_monitoring::SecurityMonitoringApi;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
