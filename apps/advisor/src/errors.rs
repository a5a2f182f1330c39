use thiserror::Error;

use crate::wizard::validation::MAX_RESUME_BYTES;

/// Client-side rejection. Raised before any network call and never changes session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Only PDF and TXT files are allowed (got '{file_name}')")]
    UnsupportedExtension { file_name: String },

    #[error("File must be smaller than 5MB ({size} bytes > {max} bytes)", max = MAX_RESUME_BYTES)]
    FileTooLarge { size: u64 },

    #[error("Please upload a resume file first")]
    NoResumeUploaded,

    #[error("No skills to analyze. Please add skills in the review step.")]
    NoSkills,

    #[error("Please enter a skill name")]
    EmptySkill,

    #[error("Skill already added: {0}")]
    DuplicateSkill(String),

    #[error("Please enter a job role")]
    EmptyJobRole,

    #[error("No prediction yet. Run a prediction before exporting a report.")]
    NoPrediction,
}

/// Failure talking to the backend. Never retried automatically.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Non-2xx response. `message` is the best-effort text extracted from the body.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// 2xx response whose body reports `success: false`.
    #[error("{0}")]
    Rejected(String),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error returned by every wizard operation.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("Cannot read {}: {source}", .path.display())]
    ReadResume {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Export(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WizardError {
    pub fn is_validation(&self) -> bool {
        matches!(self, WizardError::Validation(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, WizardError::Remote(_))
    }
}
