use serde::{Deserialize, Serialize};

/// Display model for a prediction. Percentages are pre-formatted strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionView {
    pub role: String,
    pub confidence: String,
    /// One row per backend model, placeholders when the backend left it out.
    pub models: Vec<ModelVerdict>,
    pub top_roles: Vec<RankedRoleView>,
    /// Shown alongside the main result, never instead of it.
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelVerdict {
    pub model: String,
    pub role: String,
    pub confidence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRoleView {
    pub rank: usize,
    pub role: String,
    pub confidence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSummary {
    pub file_name: String,
    pub skill_count: usize,
    pub headline: String,
    pub preview: Option<String>,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFitView {
    pub job_role: String,
    pub fit_score: String,
    pub skills_match: String,
    pub experience_level: String,
}
