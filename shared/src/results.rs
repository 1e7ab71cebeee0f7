//! Analysis responses. Their schema belongs to the backend, so images and
//! stats stay as raw JSON and are only flattened for display. `serde_json`
//! is built with `preserve_order` so trend windows keep the backend's
//! chronological order.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STAT_PRECISION: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub images: Value,
    #[serde(default)]
    pub stats: Value,
}

/// One image to render, with the group it was nested under (stats responses
/// nest `{column: {label: url}}`, the other endpoints are flat).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub group: Option<String>,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub key: String,
    pub value: String,
}

impl AnalysisResult {
    pub fn image_list(&self) -> Vec<ImageRef> {
        let mut out = Vec::new();
        if let Value::Object(map) = &self.images {
            for (label, entry) in map {
                match entry {
                    Value::String(url) => out.push(ImageRef {
                        group: None,
                        label: label.clone(),
                        url: url.clone(),
                    }),
                    Value::Object(inner) => {
                        for (inner_label, url) in inner {
                            if let Value::String(url) = url {
                                out.push(ImageRef {
                                    group: Some(label.clone()),
                                    label: inner_label.clone(),
                                    url: url.clone(),
                                });
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
        out
    }

    pub fn image(&self, key: &str) -> Option<&str> {
        self.images.get(key).and_then(Value::as_str)
    }

    pub fn has_images(&self) -> bool {
        !self.image_list().is_empty()
    }

    /// Rows of the stats section `section`, numbers rounded to `precision`
    /// decimals when given.
    pub fn stat_rows(&self, section: &str, precision: Option<usize>) -> Vec<StatRow> {
        self.stats
            .get(section)
            .map(|v| flatten_stats(v, precision))
            .unwrap_or_default()
    }
}

/// Flattens a stats object into `key -> value` rows. Nested objects become
/// dotted keys so nothing the backend sends is dropped.
pub fn flatten_stats(value: &Value, precision: Option<usize>) -> Vec<StatRow> {
    let mut rows = Vec::new();
    flatten_into(&mut rows, None, value, precision);
    rows
}

fn flatten_into(rows: &mut Vec<StatRow>, prefix: Option<&str>, value: &Value, precision: Option<usize>) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                let key = match prefix {
                    Some(p) => format!("{}.{}", p, key),
                    None => key.clone(),
                };
                flatten_into(rows, Some(&key), inner, precision);
            }
        }
        other => rows.push(StatRow {
            key: prefix.unwrap_or_default().to_string(),
            value: format_stat_value(other, precision),
        }),
    }
}

pub fn format_stat_value(value: &Value, precision: Option<usize>) -> String {
    match (value, precision) {
        (Value::Number(n), Some(digits)) => match n.as_f64() {
            Some(f) => format!("{:.*}", digits, f),
            None => n.to_string(),
        },
        (Value::String(s), _) => s.clone(),
        (Value::Null, _) => "null".to_string(),
        (other, _) => other.to_string(),
    }
}

/// Request lifecycle of one analysis view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<T>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            result: None,
        }
    }
}

impl<T> ViewState<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Starts a request with nothing on display until it answers.
    pub fn restart(&mut self) {
        self.begin();
        self.result = None;
    }

    /// Replaces the previous result entirely.
    pub fn succeed(&mut self, result: T) {
        self.loading = false;
        self.error = None;
        self.result = Some(result);
    }

    pub fn fail(&mut self, error: &ApiError, clear: bool) {
        self.loading = false;
        self.error = Some(error.to_string());
        if clear {
            self.result = None;
        }
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn finish(&mut self, outcome: Result<T, ApiError>, clear_on_error: bool) {
        match outcome {
            Ok(result) => self.succeed(result),
            Err(err) => self.fail(&err, clear_on_error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_and_grouped_images() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "status": "ok",
            "images": {
                "SF": {"global": "http://x/sf.png", "per type": "http://x/sf_type.png"},
                "Join Request": "http://x/jr.png"
            }
        }))
        .unwrap();
        let images = result.image_list();
        assert_eq!(images.len(), 3);
        assert!(images.contains(&ImageRef {
            group: None,
            label: "Join Request".into(),
            url: "http://x/jr.png".into()
        }));
        assert!(images.iter().any(|i| i.group.as_deref() == Some("SF") && i.label == "global"));
        assert_eq!(result.stats, Value::Null);
    }

    #[test]
    fn missing_images_yield_nothing() {
        let result: AnalysisResult = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert!(!result.has_images());
        assert!(result.stat_rows("general", None).is_empty());
    }

    #[test]
    fn numbers_get_fixed_precision() {
        assert_eq!(format_stat_value(&json!(0.123456), Some(3)), "0.123");
        assert_eq!(format_stat_value(&json!(12), Some(3)), "12.000");
        assert_eq!(format_stat_value(&json!(12), None), "12");
        assert_eq!(format_stat_value(&json!("linear"), Some(3)), "linear");
        assert_eq!(format_stat_value(&json!(true), Some(3)), "true");
    }

    #[test]
    fn nested_stats_are_flattened() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "images": {},
            "stats": {"rssi": {"r2": 0.91234, "coef": {"snr": 1.5}}}
        }))
        .unwrap();
        let rows = result.stat_rows("rssi", Some(STAT_PRECISION));
        assert_eq!(
            rows,
            vec![
                StatRow { key: "r2".into(), value: "0.912".into() },
                StatRow { key: "coef.snr".into(), value: "1.500".into() },
            ]
        );
    }

    #[test]
    fn view_state_replaces_or_clears() {
        let mut state: ViewState<u32> = ViewState::default();
        state.begin();
        assert!(state.loading);
        state.succeed(1);
        state.begin();
        state.succeed(2);
        assert_eq!(state.result, Some(2));

        let err = ApiError::from_response(500, "{}");
        state.begin();
        state.fail(&err, false);
        assert_eq!(state.result, Some(2));
        assert_eq!(state.error.as_deref(), Some("Error 500"));
        assert!(!state.loading);

        state.begin();
        assert_eq!(state.error, None);
        state.finish(Err(err), true);
        assert_eq!(state.result, None);
    }

    #[test]
    fn restart_hides_the_previous_result_while_pending() {
        let mut state: ViewState<u32> = ViewState::default();
        state.succeed(7);
        state.reject("Size must be a number");
        state.restart();
        assert!(state.loading);
        assert_eq!(state.result, None);
        assert_eq!(state.error, None);
        state.succeed(8);
        assert_eq!(state.result, Some(8));
    }
}
