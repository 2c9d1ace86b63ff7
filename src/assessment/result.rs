use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Verdict returned by the inference backend.
///
/// Only `success` and the failure strings are interpreted here; everything
/// else passes through untouched for the results view to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// All remaining backend fields, uninterpreted.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl AnalysisResult {
    /// Best-available failure text: `message`, then `error`, then a fallback.
    pub fn failure_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Prediction failed".to_string())
    }

    /// Headline classification if the backend provided one under a
    /// conventional key.
    pub fn stress_level(&self) -> Option<&str> {
        ["stress_level", "prediction", "label"]
            .iter()
            .find_map(|key| self.extra.get(*key).and_then(Value::as_str))
    }
}

/// A successful result together with when it arrived.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    pub received_at: DateTime<Utc>,
}

impl AnalysisOutcome {
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            result,
            received_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_fields_pass_through() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "success": true,
            "stress_level": "moderate",
            "confidence": 0.82,
        }))
        .unwrap();
        assert!(result.success);
        assert_eq!(result.stress_level(), Some("moderate"));
        assert_eq!(result.extra["confidence"], json!(0.82));
    }

    #[test]
    fn failure_message_prefers_message_over_error() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "success": false,
            "message": "bad signal file",
            "error": "ValidationError",
        }))
        .unwrap();
        assert_eq!(result.failure_message(), "bad signal file");
    }

    #[test]
    fn failure_message_falls_back_to_error_then_generic() {
        let with_error: AnalysisResult =
            serde_json::from_value(json!({"success": false, "error": "boom"})).unwrap();
        assert_eq!(with_error.failure_message(), "boom");

        let bare: AnalysisResult = serde_json::from_value(json!({"success": false})).unwrap();
        assert_eq!(bare.failure_message(), "Prediction failed");
    }

    #[test]
    fn missing_success_flag_reads_as_failure() {
        let result: AnalysisResult = serde_json::from_value(json!({"status": "??"})).unwrap();
        assert!(!result.success);
    }
}
