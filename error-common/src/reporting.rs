// Error reporting utilities
// This module provides the report envelope handed back to callers and its log emission

use crate::context::ErrorContext;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope for a batch of errors returned to a caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport<T> {
    /// Unique report ID for tracking
    pub report_id: Uuid,
    /// When the errors were produced
    pub timestamp: DateTime<Utc>,
    pub context: ErrorContext,
    pub errors: Vec<T>,
}

impl<T> ErrorReport<T> {
    pub fn new(context: ErrorContext, errors: Vec<T>) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            context,
            errors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ErrorReporter {
    _private: (),
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report<T: Serialize>(&self, report: &ErrorReport<T>) {
        let errors = serde_json::to_string(&report.errors)
            .unwrap_or_else(|e| format!("<unserializable errors: {e}>"));

        tracing::warn!(
            report_id = %report.report_id,
            request_id = report.context.request_id.as_deref().unwrap_or("-"),
            submitted_by = report.context.submitted_by.as_deref().unwrap_or("-"),
            error_count = report.errors.len(),
            errors = %errors,
            "Error report emitted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_envelope_shape() {
        let report = ErrorReport::new(ErrorContext::new(), vec!["a", "b"]);
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["reportId"].is_string());
        assert!(json["timestamp"].is_string());
        assert_eq!(json["errors"], serde_json::json!(["a", "b"]));
        assert!(!report.is_empty());
    }

    #[test]
    fn test_reports_get_distinct_ids() {
        let a = ErrorReport::<String>::new(ErrorContext::new(), Vec::new());
        let b = ErrorReport::<String>::new(ErrorContext::new(), Vec::new());
        assert_ne!(a.report_id, b.report_id);
        assert!(a.is_empty());
    }

    #[test]
    fn test_report_does_not_panic_without_subscriber() {
        let report = ErrorReport::new(ErrorContext::new(), vec![1, 2, 3]);
        ErrorReporter::new().report(&report);
    }
}
