use serde::{Deserialize, Serialize};

/// Body of `POST /api/predict-role`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Skills joined with `", "`.
    pub text: String,
}

impl PredictRequest {
    pub fn from_skills(skills: &[String]) -> Self {
        Self {
            text: skills.join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRole {
    pub role: String,
    pub confidence: f64,
}

/// Success body of `POST /api/predict-role`. Confidences are fractions in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_role: String,
    pub confidence: f64,
    #[serde(default)]
    pub svm_role: Option<String>,
    #[serde(default)]
    pub svm_confidence: Option<f64>,
    #[serde(default)]
    pub rf_role: Option<String>,
    #[serde(default)]
    pub rf_confidence: Option<f64>,
    #[serde(default)]
    pub top_roles: Vec<RankedRole>,
    #[serde(default)]
    pub is_uncertain: bool,
    #[serde(default)]
    pub uncertainty_message: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
