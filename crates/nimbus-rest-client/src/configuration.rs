// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Client configuration
//!
//! `Configuration` is read-mostly: built once, then shared by the client for
//! the life of the process. Unstable operations are pre-registered and
//! disabled until a caller opts in by name.

use std::collections::HashMap;

use url::Url;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.nimbus-monitoring.com";

/// Operation ids gated behind the unstable opt-in.
pub const UNSTABLE_OPERATIONS: &[&str] = &[
    "v2.CreateIncidentService",
    "v2.DeleteIncidentService",
    "v2.GetIncidentService",
    "v2.ListIncidentServices",
    "v2.UpdateIncidentService",
];

#[derive(Debug, Clone)]
pub struct Configuration {
    base_url: Url,
    user_agent: String,
    server_overrides: HashMap<String, Url>,
    unstable_operations: HashMap<&'static str, bool>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Route one operation to a different server, e.g. a regional endpoint.
    pub fn with_server_override(mut self, operation_id: impl Into<String>, url: Url) -> Self {
        self.server_overrides.insert(operation_id.into(), url);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The server to use for an operation: its override when one is
    /// registered, the base URL otherwise.
    pub fn server_url_for(&self, operation_id: &str) -> &Url {
        self.server_overrides
            .get(operation_id)
            .unwrap_or(&self.base_url)
    }

    /// Opt in or out of an unstable operation. Returns false when the name is
    /// not a known unstable operation.
    pub fn set_unstable_operation_enabled(&mut self, operation_id: &str, enabled: bool) -> bool {
        match self.unstable_operations.get_mut(operation_id) {
            Some(flag) => {
                *flag = enabled;
                true
            }
            None => false,
        }
    }

    pub fn is_unstable_operation_enabled(&self, operation_id: &str) -> bool {
        self.unstable_operations
            .get(operation_id)
            .copied()
            .unwrap_or(false)
    }

    /// Whether the operation is registered as unstable at all.
    pub fn is_unstable_operation(&self, operation_id: &str) -> bool {
        self.unstable_operations.contains_key(operation_id)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        let unstable_operations = UNSTABLE_OPERATIONS
            .iter()
            .map(|operation| (*operation, false))
            .collect();
        Self {
            base_url,
            user_agent: format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
            server_overrides: HashMap::new(),
            unstable_operations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unstable_operations_disabled_by_default() {
        let config = Configuration::new();
        for operation in UNSTABLE_OPERATIONS {
            assert!(config.is_unstable_operation(operation));
            assert!(!config.is_unstable_operation_enabled(operation));
        }
    }

    #[test]
    fn test_enable_unstable_operation() {
        let mut config = Configuration::new();
        assert!(config.set_unstable_operation_enabled("v2.GetIncidentService", true));
        assert!(config.is_unstable_operation_enabled("v2.GetIncidentService"));
        // Others stay disabled.
        assert!(!config.is_unstable_operation_enabled("v2.ListIncidentServices"));
    }

    #[test]
    fn test_enable_unknown_operation_is_rejected() {
        let mut config = Configuration::new();
        assert!(!config.set_unstable_operation_enabled("v2.DoesNotExist", true));
        assert!(!config.is_unstable_operation_enabled("v2.DoesNotExist"));
    }

    #[test]
    fn test_server_override_applies_to_one_operation() {
        let override_url = Url::parse("https://eu.nimbus-monitoring.com").unwrap();
        let config = Configuration::new()
            .with_server_override("v2.ListIncidentServices", override_url.clone());
        assert_eq!(
            config.server_url_for("v2.ListIncidentServices"),
            &override_url
        );
        assert_eq!(
            config.server_url_for("v2.GetIncidentService").as_str(),
            format!("{DEFAULT_BASE_URL}/")
        );
    }

    #[test]
    fn test_default_user_agent_names_the_crate() {
        let config = Configuration::new();
        assert!(config.user_agent().starts_with("nimbus-rest-client/"));
    }
}
