use serde_json::Value;
use thiserror::Error;

/// Failures of a round-trip with the analysis backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Could not reach the analysis server")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-2xx response from its raw body.
    ///
    /// FastAPI puts a human readable message in `detail` (or a list of
    /// `{loc, msg, type}` objects on schema rejections); older routes use
    /// `error`. Anything else falls back to the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| extract_message(&value))
            .unwrap_or_else(|| format!("Error {}", status));
        ApiError::Server { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn extract_message(value: &Value) -> Option<String> {
    ["detail", "error", "message"]
        .iter()
        .filter_map(|key| value.get(key))
        .find_map(message_of)
}

fn message_of(field: &Value) -> Option<String> {
    match field {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    other => other.get("msg").and_then(Value::as_str).map(str::to_string),
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

/// Input rejected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in every preprocessing parameter")]
    IncompletePreprocessing,
    #[error("Please select the columns you want to analyse")]
    NoColumns,
    #[error("Please select at least one packet type")]
    NoCategories,
    #[error("Please keep only {expected} metric(s), {selected} are selected")]
    TooManyMetrics { expected: usize, selected: usize },
    #[error("Please select {expected} metric(s), only {selected} selected")]
    TooFewMetrics { expected: usize, selected: usize },
    #[error("Please provide every trend parameter")]
    IncompleteTrends,
    #[error("A year and a month are required for this analysis")]
    PeriodRequired,
    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("No file selected")]
    NoFile,
    #[error("Only one file can be uploaded at a time ({0} given)")]
    TooManyFiles(usize),
    #[error("{name} is not a JSON dataset")]
    UnsupportedType { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("use_selection must be called inside the data filter's SelectionProvider")]
    OutsideProvider,
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
    #[error("Invalid year: {0}")]
    InvalidYear(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_preferred_over_error() {
        let err = ApiError::from_response(400, r#"{"detail":"Mois invalide","error":"other"}"#);
        assert_eq!(err.to_string(), "Mois invalide");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn error_field_is_used_when_detail_missing() {
        let err = ApiError::from_response(422, r#"{"error":"Fichier invalide"}"#);
        assert_eq!(err.to_string(), "Fichier invalide");
    }

    #[test]
    fn validation_arrays_are_joined() {
        let body = r#"{"detail":[
            {"loc":["body","hopValue"],"msg":"field required","type":"missing"},
            {"loc":["body","freq"],"msg":"unexpected value","type":"literal_error"}
        ]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.to_string(), "field required; unexpected value");
    }

    #[test]
    fn falls_back_to_status() {
        assert_eq!(ApiError::from_response(500, "").to_string(), "Error 500");
        assert_eq!(ApiError::from_response(502, "<html>").to_string(), "Error 502");
        assert_eq!(ApiError::from_response(404, r#"{"detail":""}"#).to_string(), "Error 404");
        assert_eq!(ApiError::from_response(400, r#"{"detail":{"a":1}}"#).to_string(), "Error 400");
    }

    #[test]
    fn network_errors_hide_the_cause() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.to_string(), "Could not reach the analysis server");
        assert_eq!(err.status(), None);
    }
}
