//! Report export: the current analysis as Markdown or JSON on disk.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::bail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{ValidationError, WizardError};
use crate::render::{JobFitView, PredictionView, ResultRenderer};
use crate::wizard::WizardSession;

mod markdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    /// Picks the format from a path's extension; anything but `.json` is Markdown.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Markdown,
        }
    }
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => bail!("unknown report format '{other}' (expected 'markdown' or 'json')"),
        }
    }
}

/// Snapshot of a finished analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub session_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub file_name: Option<String>,
    pub skills: Vec<String>,
    pub prediction: PredictionView,
    pub job_fit: Option<JobFitView>,
}

impl AnalysisReport {
    /// Fails with `NoPrediction` until the session holds a prediction.
    ///
    /// File name and skills are the ones the prediction was made from, not the
    /// live session. A job fit computed from other inputs is left out.
    pub fn from_session(
        session: &WizardSession,
        renderer: &ResultRenderer,
    ) -> Result<Self, ValidationError> {
        let prediction = session
            .prediction_analysis()
            .ok_or(ValidationError::NoPrediction)?;

        let job_fit = session
            .job_fit_analysis()
            .filter(|fit| fit.same_inputs(prediction))
            .map(|fit| renderer.render_job_fit(&fit.result));

        Ok(Self {
            session_id: session.id(),
            generated_at: Utc::now(),
            file_name: prediction.file_name.clone(),
            skills: prediction.skills.clone(),
            prediction: renderer.render_prediction(&prediction.result),
            job_fit,
        })
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Markdown => Ok(markdown::render(self)),
            ReportFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

/// Writes the report, creating parent directories as needed.
pub async fn write_report(
    report: &AnalysisReport,
    path: &Path,
    format: ReportFormat,
) -> Result<PathBuf, WizardError> {
    let contents = report.render(format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;

    info!("Report for session {} written to {}", report.session_id, path.display());
    Ok(path.to_path_buf())
}
