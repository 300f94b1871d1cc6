// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for API contract parsing, plus the vendor error payload

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while constructing or parsing contract types
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("invalid value `{value}` for {type_name}, expected one of {allowed:?}")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Standard error payload returned by the Nimbus API for client errors
/// (400, 401, 403, 404, 429).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// A list of errors.
    pub errors: Vec<String>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl ApiErrorResponse {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            errors,
            additional_properties: BTreeMap::new(),
        }
    }
}
