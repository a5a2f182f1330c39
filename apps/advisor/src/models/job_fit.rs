use serde::{Deserialize, Serialize};

/// Body of `POST /api/job-fit-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFitRequest {
    pub job_role: String,
    /// Skills joined with `", "`, same shape as the prediction request.
    pub skills: String,
    pub resume_text: String,
}

/// Success body of `POST /api/job-fit-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFitResponse {
    pub job_role: String,
    /// Fraction in [0, 1].
    pub fit_score: f64,
    pub skills_match: String,
    pub experience_level: String,
    #[serde(default)]
    pub message: Option<String>,
}
