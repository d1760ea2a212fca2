//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response envelope shared by the password reset endpoints
///
/// Every endpoint answers `{"success": bool, "message": "..."}`; validation
/// failures add per-field messages under `errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome
    pub message: String,

    /// Field-level validation messages (present on validation failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ApiResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    /// Create a validation failure carrying field messages
    pub fn validation(
        message: impl Into<String>,
        errors: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// A healthy report for `service` at `version`
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_errors() {
        let json = serde_json::to_value(ApiResponse::success("ok")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "message": "ok" }));
    }

    #[test]
    fn test_validation_carries_fields() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), vec!["The email must be a valid email address.".to_string()]);

        let response = ApiResponse::validation("The given data was invalid.", fields);
        assert!(!response.is_success());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["errors"]["email"][0], "The email must be a valid email address.");
    }
}
