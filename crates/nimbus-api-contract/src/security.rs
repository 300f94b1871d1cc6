//! Security monitoring rule schema types (`/api/v2/security_monitoring/rules`)
//!
//! Unlike the incident family, this family uses camelCase member names on the
//! wire.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ContractError;

/// Rule type accepted when creating a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityMonitoringRuleTypeCreate {
    #[serde(rename = "log_detection")]
    LogDetection,
    #[serde(rename = "workload_security")]
    WorkloadSecurity,
    #[serde(rename = "signal_correlation")]
    SignalCorrelation,
}

impl SecurityMonitoringRuleTypeCreate {
    pub const ALLOWED: &'static [&'static str] =
        &["log_detection", "workload_security", "signal_correlation"];

    pub fn is_valid(value: &str) -> bool {
        Self::ALLOWED.contains(&value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityMonitoringRuleTypeCreate::LogDetection => "log_detection",
            SecurityMonitoringRuleTypeCreate::WorkloadSecurity => "workload_security",
            SecurityMonitoringRuleTypeCreate::SignalCorrelation => "signal_correlation",
        }
    }
}

impl fmt::Display for SecurityMonitoringRuleTypeCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecurityMonitoringRuleTypeCreate {
    type Err = ContractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "log_detection" => Ok(SecurityMonitoringRuleTypeCreate::LogDetection),
            "workload_security" => Ok(SecurityMonitoringRuleTypeCreate::WorkloadSecurity),
            "signal_correlation" => Ok(SecurityMonitoringRuleTypeCreate::SignalCorrelation),
            other => Err(ContractError::UnknownEnumValue {
                type_name: "SecurityMonitoringRuleTypeCreate",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Severity of a signal raised by a rule case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityMonitoringRuleSeverity {
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "critical")]
    Critical,
}

impl SecurityMonitoringRuleSeverity {
    pub const ALLOWED: &'static [&'static str] = &["info", "low", "medium", "high", "critical"];

    pub fn is_valid(value: &str) -> bool {
        Self::ALLOWED.contains(&value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityMonitoringRuleSeverity::Info => "info",
            SecurityMonitoringRuleSeverity::Low => "low",
            SecurityMonitoringRuleSeverity::Medium => "medium",
            SecurityMonitoringRuleSeverity::High => "high",
            SecurityMonitoringRuleSeverity::Critical => "critical",
        }
    }
}

impl fmt::Display for SecurityMonitoringRuleSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecurityMonitoringRuleSeverity {
    type Err = ContractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "info" => Ok(SecurityMonitoringRuleSeverity::Info),
            "low" => Ok(SecurityMonitoringRuleSeverity::Low),
            "medium" => Ok(SecurityMonitoringRuleSeverity::Medium),
            "high" => Ok(SecurityMonitoringRuleSeverity::High),
            "critical" => Ok(SecurityMonitoringRuleSeverity::Critical),
            other => Err(ContractError::UnknownEnumValue {
                type_name: "SecurityMonitoringRuleSeverity",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Detection method applied by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityMonitoringRuleDetectionMethod {
    #[serde(rename = "threshold")]
    Threshold,
    #[serde(rename = "new_value")]
    NewValue,
    #[serde(rename = "anomaly_detection")]
    AnomalyDetection,
}

impl SecurityMonitoringRuleDetectionMethod {
    pub const ALLOWED: &'static [&'static str] =
        &["threshold", "new_value", "anomaly_detection"];

    pub fn is_valid(value: &str) -> bool {
        Self::ALLOWED.contains(&value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityMonitoringRuleDetectionMethod::Threshold => "threshold",
            SecurityMonitoringRuleDetectionMethod::NewValue => "new_value",
            SecurityMonitoringRuleDetectionMethod::AnomalyDetection => "anomaly_detection",
        }
    }
}

impl fmt::Display for SecurityMonitoringRuleDetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecurityMonitoringRuleDetectionMethod {
    type Err = ContractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "threshold" => Ok(SecurityMonitoringRuleDetectionMethod::Threshold),
            "new_value" => Ok(SecurityMonitoringRuleDetectionMethod::NewValue),
            "anomaly_detection" => Ok(SecurityMonitoringRuleDetectionMethod::AnomalyDetection),
            other => Err(ContractError::UnknownEnumValue {
                type_name: "SecurityMonitoringRuleDetectionMethod",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Aggregation applied to a rule query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityMonitoringRuleQueryAggregation {
    #[serde(rename = "count")]
    Count,
    #[serde(rename = "cardinality")]
    Cardinality,
    #[serde(rename = "sum")]
    Sum,
    #[serde(rename = "max")]
    Max,
    #[serde(rename = "new_value")]
    NewValue,
}

impl SecurityMonitoringRuleQueryAggregation {
    pub const ALLOWED: &'static [&'static str] =
        &["count", "cardinality", "sum", "max", "new_value"];

    pub fn is_valid(value: &str) -> bool {
        Self::ALLOWED.contains(&value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityMonitoringRuleQueryAggregation::Count => "count",
            SecurityMonitoringRuleQueryAggregation::Cardinality => "cardinality",
            SecurityMonitoringRuleQueryAggregation::Sum => "sum",
            SecurityMonitoringRuleQueryAggregation::Max => "max",
            SecurityMonitoringRuleQueryAggregation::NewValue => "new_value",
        }
    }
}

impl fmt::Display for SecurityMonitoringRuleQueryAggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecurityMonitoringRuleQueryAggregation {
    type Err = ContractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "count" => Ok(SecurityMonitoringRuleQueryAggregation::Count),
            "cardinality" => Ok(SecurityMonitoringRuleQueryAggregation::Cardinality),
            "sum" => Ok(SecurityMonitoringRuleQueryAggregation::Sum),
            "max" => Ok(SecurityMonitoringRuleQueryAggregation::Max),
            "new_value" => Ok(SecurityMonitoringRuleQueryAggregation::NewValue),
            other => Err(ContractError::UnknownEnumValue {
                type_name: "SecurityMonitoringRuleQueryAggregation",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// A case that raises a signal when its condition matches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityMonitoringRuleCase {
    /// Condition in the rule expression language, referencing query names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Notification targets for signals raised by this case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<String>>,
    /// Severity of the raised signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SecurityMonitoringRuleSeverity>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl SecurityMonitoringRuleCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, condition: String) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_notifications(mut self, notifications: Vec<String>) -> Self {
        self.notifications = Some(notifications);
        self
    }

    pub fn with_status(mut self, status: SecurityMonitoringRuleSeverity) -> Self {
        self.status = Some(status);
        self
    }
}

/// Evaluation options shared by all rule types. Window and expiry durations
/// are in seconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityMonitoringRuleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_method: Option<SecurityMonitoringRuleDetectionMethod>,
    /// Length of the sliding window over which queries are evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_window: Option<i32>,
    /// How long a signal keeps alive while its cases keep matching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<i32>,
    /// Hard cap on a signal's lifetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_signal_duration: Option<i32>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl SecurityMonitoringRuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detection_method(
        mut self,
        detection_method: SecurityMonitoringRuleDetectionMethod,
    ) -> Self {
        self.detection_method = Some(detection_method);
        self
    }

    pub fn with_evaluation_window(mut self, evaluation_window: i32) -> Self {
        self.evaluation_window = Some(evaluation_window);
        self
    }

    pub fn with_keep_alive(mut self, keep_alive: i32) -> Self {
        self.keep_alive = Some(keep_alive);
        self
    }

    pub fn with_max_signal_duration(mut self, max_signal_duration: i32) -> Self {
        self.max_signal_duration = Some(max_signal_duration);
        self
    }
}

/// A log query evaluated by a standard detection rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SecurityMonitoringStandardRuleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<SecurityMonitoringRuleQueryAggregation>,
    /// Fields whose distinct values feed cardinality aggregations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    /// Name used to reference the query from case conditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The search query itself.
    #[validate(length(min = 1, message = "query must not be empty"))]
    pub query: String,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl SecurityMonitoringStandardRuleQuery {
    pub fn new(query: String) -> Self {
        Self {
            aggregation: None,
            distinct_fields: None,
            group_by_fields: None,
            metric: None,
            name: None,
            query,
            additional_properties: BTreeMap::new(),
        }
    }

    pub fn with_aggregation(
        mut self,
        aggregation: SecurityMonitoringRuleQueryAggregation,
    ) -> Self {
        self.aggregation = Some(aggregation);
        self
    }

    pub fn with_group_by_fields(mut self, group_by_fields: Vec<String>) -> Self {
        self.group_by_fields = Some(group_by_fields);
        self
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
}

/// A query referencing signals raised by another rule, used by correlation
/// rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityMonitoringSignalRuleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<SecurityMonitoringRuleQueryAggregation>,
    /// Fields whose equality correlates signals across source rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlated_by_fields: Option<Vec<String>>,
    /// Index of the query whose attributes are carried onto the correlated
    /// signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlated_query_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ID of the rule whose signals this query consumes.
    pub rule_id: String,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl SecurityMonitoringSignalRuleQuery {
    pub fn new(rule_id: String) -> Self {
        Self {
            aggregation: None,
            correlated_by_fields: None,
            correlated_query_index: None,
            name: None,
            rule_id,
            additional_properties: BTreeMap::new(),
        }
    }

    pub fn with_correlated_by_fields(mut self, correlated_by_fields: Vec<String>) -> Self {
        self.correlated_by_fields = Some(correlated_by_fields);
        self
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
}

/// A rule query of either kind.
///
/// Trial-decoded against each declared variant in order; exactly one match
/// selects that variant, while zero matches or an ambiguous payload matching
/// several keeps the JSON verbatim as `UnparsedObject`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SecurityMonitoringRuleQuery {
    Standard(Box<SecurityMonitoringStandardRuleQuery>),
    Signal(Box<SecurityMonitoringSignalRuleQuery>),
    UnparsedObject(serde_json::Value),
}

impl SecurityMonitoringRuleQuery {
    pub fn as_standard(&self) -> Option<&SecurityMonitoringStandardRuleQuery> {
        match self {
            SecurityMonitoringRuleQuery::Standard(query) => Some(query),
            _ => None,
        }
    }

    pub fn as_signal(&self) -> Option<&SecurityMonitoringSignalRuleQuery> {
        match self {
            SecurityMonitoringRuleQuery::Signal(query) => Some(query),
            _ => None,
        }
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, SecurityMonitoringRuleQuery::UnparsedObject(_))
    }
}

impl<'de> Deserialize<'de> for SecurityMonitoringRuleQuery {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let mut matched: Option<SecurityMonitoringRuleQuery> = None;
        let mut match_count = 0u32;
        if let Ok(query) = SecurityMonitoringStandardRuleQuery::deserialize(&value) {
            matched = Some(SecurityMonitoringRuleQuery::Standard(Box::new(query)));
            match_count += 1;
        }
        if let Ok(query) = SecurityMonitoringSignalRuleQuery::deserialize(&value) {
            matched = Some(SecurityMonitoringRuleQuery::Signal(Box::new(query)));
            match_count += 1;
        }
        if match_count == 1 {
            Ok(matched.unwrap())
        } else {
            Ok(SecurityMonitoringRuleQuery::UnparsedObject(value))
        }
    }
}

/// Request body for creating a standard detection rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SecurityMonitoringStandardRuleCreatePayload {
    #[validate(length(min = 1, message = "at least one case is required"))]
    pub cases: Vec<SecurityMonitoringRuleCase>,
    /// Whether the rule is enabled.
    pub is_enabled: bool,
    /// Message shown with signals raised by the rule.
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
    #[validate(length(min = 1, message = "rule name must not be empty"))]
    pub name: String,
    pub options: SecurityMonitoringRuleOptions,
    #[validate(nested, length(min = 1, message = "at least one query is required"))]
    pub queries: Vec<SecurityMonitoringStandardRuleQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<SecurityMonitoringRuleTypeCreate>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl SecurityMonitoringStandardRuleCreatePayload {
    pub fn new(
        cases: Vec<SecurityMonitoringRuleCase>,
        is_enabled: bool,
        message: String,
        name: String,
        options: SecurityMonitoringRuleOptions,
        queries: Vec<SecurityMonitoringStandardRuleQuery>,
    ) -> Self {
        Self {
            cases,
            is_enabled,
            message,
            name,
            options,
            queries,
            tags: None,
            type_: None,
            additional_properties: BTreeMap::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_type(mut self, type_: SecurityMonitoringRuleTypeCreate) -> Self {
        self.type_ = Some(type_);
        self
    }
}

/// Request body for updating a rule. Every member is optional; only supplied
/// members are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SecurityMonitoringRuleUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cases: Option<Vec<SecurityMonitoringRuleCase>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "rule name must not be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SecurityMonitoringRuleOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<SecurityMonitoringRuleQuery>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Version of the rule being updated, for conflict detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl SecurityMonitoringRuleUpdatePayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cases(mut self, cases: Vec<SecurityMonitoringRuleCase>) -> Self {
        self.cases = Some(cases);
        self
    }

    pub fn with_is_enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = Some(is_enabled);
        self
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_options(mut self, options: SecurityMonitoringRuleOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_queries(mut self, queries: Vec<SecurityMonitoringRuleQuery>) -> Self {
        self.queries = Some(queries);
        self
    }

    pub fn with_version(mut self, version: i32) -> Self {
        self.version = Some(version);
        self
    }
}

/// A detection rule as returned by the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityMonitoringRuleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cases: Option<Vec<SecurityMonitoringRuleCase>>,
    /// Creation time, milliseconds since the epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// ID of the user who created the rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_author_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whether the rule is part of the vendor's default set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SecurityMonitoringRuleOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<SecurityMonitoringRuleQuery>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<SecurityMonitoringRuleTypeCreate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl SecurityMonitoringRuleResponse {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pagination counters in list-response metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseMetaPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Total matching the request's filter, which may be less than
    /// `total_count`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_filtered_count: Option<i64>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

/// Metadata attached to rule list responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseMetaAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<ResponseMetaPage>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

/// Response envelope for a list of rules.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SecurityMonitoringListRulesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<SecurityMonitoringRuleResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMetaAttributes>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, serde_json::Value>,
}

impl SecurityMonitoringListRulesResponse {
    pub fn new() -> Self {
        Self::default()
    }
}
