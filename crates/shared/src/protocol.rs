use std::fmt;

use serde::{Deserialize, Serialize};

pub const PREDICT_PATH: &str = "/predict";

/// Substring that marks the positive class in a prediction label.
pub const POSITIVE_LABEL_MARKER: &str = "CKD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<Probability>,
}

impl PredictionResult {
    /// Case-sensitive substring test on the raw label.
    pub fn is_positive(&self) -> bool {
        self.prediction.contains(POSITIVE_LABEL_MARKER)
    }

    pub fn probability_display(&self) -> String {
        match &self.probability {
            Some(probability) => probability.to_string(),
            None => "unavailable".to_string(),
        }
    }
}

/// Confidence value shown verbatim, whatever shape the backend sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Probability {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Probability::Number(value) => match value.as_f64() {
                // Whole floats read as integers (`1.0` shows as `1`).
                Some(float)
                    if value.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 =>
                {
                    write!(f, "{float}")
                }
                _ => write!(f, "{value}"),
            },
            Probability::Text(value) => f.write_str(value),
            Probability::Other(value) => write!(f, "{value}"),
        }
    }
}
