// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! API credential handling

use std::fmt;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "NB-API-KEY";
/// Header carrying the application key.
pub const APPLICATION_KEY_HEADER: &str = "NB-APPLICATION-KEY";

const API_KEY_ENV: &str = "NIMBUS_API_KEY";
const APPLICATION_KEY_ENV: &str = "NIMBUS_APPLICATION_KEY";

/// Key-pair credentials for the Nimbus API.
///
/// Keys never appear in `Debug` output or logs.
#[derive(Clone, Default)]
pub struct AuthConfig {
    api_key: Option<String>,
    application_key: Option<String>,
}

impl AuthConfig {
    /// No credentials. Requests are sent unauthenticated.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_application_key(mut self, application_key: impl Into<String>) -> Self {
        self.application_key = Some(application_key.into());
        self
    }

    /// Read credentials from `NIMBUS_API_KEY` and `NIMBUS_APPLICATION_KEY`.
    /// Unset variables leave the corresponding key absent.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            application_key: std::env::var(APPLICATION_KEY_ENV).ok(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn has_application_key(&self) -> bool {
        self.application_key.is_some()
    }

    /// Header pairs for whichever credentials are present.
    pub fn headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::new();
        if let Some(api_key) = &self.api_key {
            headers.push((API_KEY_HEADER.to_string(), api_key.clone()));
        }
        if let Some(application_key) = &self.application_key {
            headers.push((APPLICATION_KEY_HEADER.to_string(), application_key.clone()));
        }
        headers
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field(
                "application_key",
                &self.application_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
