use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of ranked candidates shown under the prediction.
pub const CANDIDATES_SHOWN: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub device: String,
    pub proportion: f64,
}

impl Candidate {
    pub fn percent(&self) -> f64 {
        self.proportion * 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Decoded `/api/clustering/predict` body: `{status, result}`.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub result: PredictionResult,
    pub raw: Value,
}

impl PredictionOutcome {
    pub fn from_response(body: Value) -> Result<Self, serde_json::Error> {
        let raw = body.get("result").cloned().unwrap_or(Value::Null);
        let result = match &raw {
            Value::Null => PredictionResult::default(),
            other => serde_json::from_value(other.clone())?,
        };
        Ok(Self { result, raw })
    }

    pub fn confidence_label(&self) -> Option<String> {
        self.result
            .confidence
            .map(|c| format!("{:.2}%", c * 100.0))
    }

    pub fn top_candidates(&self) -> &[Candidate] {
        let n = self.result.candidates.len().min(CANDIDATES_SHOWN);
        &self.result.candidates[..n]
    }

    pub fn raw_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_default()
    }
}
