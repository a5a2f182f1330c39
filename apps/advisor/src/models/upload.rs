use serde::{Deserialize, Serialize};

/// Success body of `POST /api/upload-resume`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub skills: Vec<String>,
    /// First part of the server-extracted text. Absent when extraction failed.
    #[serde(default)]
    pub preview_text: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
}
