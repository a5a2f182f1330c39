//! Pure mapping from backend payloads to display models.
//!
//! Nothing here performs I/O. Views (terminal, report) consume the display models.

use std::str::FromStr;

use anyhow::bail;

use crate::models::{JobFitResponse, PredictionResponse, UploadResponse};

pub mod views;

pub use views::{JobFitView, ModelVerdict, PredictionView, RankedRoleView, UploadSummary};

/// Slots available in the fixed-slot top-roles layout.
pub const TOP_ROLE_SLOTS: usize = 3;
/// Preview excerpt length shown after an upload.
pub const PREVIEW_CHARS: usize = 300;

pub const MISSING_ROLE: &str = "-";
pub const MISSING_CONFIDENCE: &str = "N/A";
const DEFAULT_UNCERTAINTY: &str =
    "Prediction is uncertain. Please improve your resume with more specific skills and achievements.";

/// How the ranked role list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopRolesLayout {
    /// Fixed number of cards; extra roles are dropped.
    FixedSlots,
    /// Every received role, in order.
    #[default]
    List,
}

impl FromStr for TopRolesLayout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slots" | "fixed" | "fixed-slots" | "fixed_slots" => Ok(TopRolesLayout::FixedSlots),
            "list" => Ok(TopRolesLayout::List),
            other => bail!("unknown top roles layout '{other}' (expected 'slots' or 'list')"),
        }
    }
}

/// Formats a fraction as a percentage with one decimal: 0.842 → "84.2%".
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Whole-percent variant used for fit scores: 0.71 → "71%".
pub fn format_whole_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultRenderer {
    layout: TopRolesLayout,
}

impl ResultRenderer {
    pub fn new(layout: TopRolesLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> TopRolesLayout {
        self.layout
    }

    pub fn render_prediction(&self, prediction: &PredictionResponse) -> PredictionView {
        let models = vec![
            model_verdict("SVM Model", &prediction.svm_role, prediction.svm_confidence),
            model_verdict(
                "Random Forest Model",
                &prediction.rf_role,
                prediction.rf_confidence,
            ),
        ];

        let limit = match self.layout {
            TopRolesLayout::FixedSlots => TOP_ROLE_SLOTS,
            TopRolesLayout::List => usize::MAX,
        };
        let top_roles = prediction
            .top_roles
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, ranked)| RankedRoleView {
                rank: i + 1,
                role: ranked.role.clone(),
                confidence: format_percent(ranked.confidence),
            })
            .collect();

        let warning = prediction.is_uncertain.then(|| {
            prediction
                .uncertainty_message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_UNCERTAINTY)
                .to_string()
        });

        PredictionView {
            role: prediction.predicted_role.clone(),
            confidence: format_percent(prediction.confidence),
            models,
            top_roles,
            warning,
        }
    }

    pub fn render_upload(&self, fallback_name: &str, upload: &UploadResponse) -> UploadSummary {
        let preview = upload
            .preview_text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(excerpt);

        UploadSummary {
            file_name: upload
                .file_name
                .clone()
                .unwrap_or_else(|| fallback_name.to_string()),
            skill_count: upload.skills.len(),
            headline: format!("Extracted {} technical skills", upload.skills.len()),
            preview,
            file_url: upload.file_url.clone(),
        }
    }

    pub fn render_job_fit(&self, job_fit: &JobFitResponse) -> JobFitView {
        JobFitView {
            job_role: job_fit.job_role.clone(),
            fit_score: format_whole_percent(job_fit.fit_score),
            skills_match: job_fit.skills_match.clone(),
            experience_level: job_fit.experience_level.clone(),
        }
    }
}

fn model_verdict(model: &str, role: &Option<String>, confidence: Option<f64>) -> ModelVerdict {
    ModelVerdict {
        model: model.to_string(),
        role: role
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(MISSING_ROLE)
            .to_string(),
        confidence: confidence
            .map(format_percent)
            .unwrap_or_else(|| MISSING_CONFIDENCE.to_string()),
    }
}

/// First `PREVIEW_CHARS` characters, with "..." when cut.
fn excerpt(text: &str) -> String {
    let text = text.trim();
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RankedRole;

    fn prediction(top: &[(&str, f64)]) -> PredictionResponse {
        PredictionResponse {
            predicted_role: "Data Analyst".to_string(),
            confidence: 0.842,
            svm_role: None,
            svm_confidence: None,
            rf_role: None,
            rf_confidence: None,
            top_roles: top
                .iter()
                .map(|(role, confidence)| RankedRole {
                    role: role.to_string(),
                    confidence: *confidence,
                })
                .collect(),
            is_uncertain: false,
            uncertainty_message: None,
            message: None,
        }
    }

    #[test]
    fn test_main_confidence_one_decimal() {
        let view = ResultRenderer::default()
            .render_prediction(&prediction(&[("Data Analyst", 0.842), ("BI Developer", 0.61)]));
        assert_eq!(view.role, "Data Analyst");
        assert_eq!(view.confidence, "84.2%");
        assert_eq!(view.top_roles[1].confidence, "61.0%");
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.12345), "12.3%");
        assert_eq!(format_whole_percent(0.7), "70%");
    }

    #[test]
    fn test_missing_model_fields_use_placeholders() {
        let view = ResultRenderer::default().render_prediction(&prediction(&[]));
        assert_eq!(view.models.len(), 2);
        for verdict in &view.models {
            assert_eq!(verdict.role, MISSING_ROLE);
            assert_eq!(verdict.confidence, MISSING_CONFIDENCE);
        }
    }

    #[test]
    fn test_present_model_fields_rendered() {
        let mut p = prediction(&[]);
        p.svm_role = Some("Backend Developer".to_string());
        p.svm_confidence = Some(0.5);
        p.rf_role = Some("Data Analyst".to_string());
        let view = ResultRenderer::default().render_prediction(&p);
        assert_eq!(view.models[0].role, "Backend Developer");
        assert_eq!(view.models[0].confidence, "50.0%");
        assert_eq!(view.models[1].role, "Data Analyst");
        assert_eq!(view.models[1].confidence, MISSING_CONFIDENCE);
    }

    #[test]
    fn test_fixed_slots_truncate_to_three_in_order() {
        let p = prediction(&[("A", 0.4), ("B", 0.3), ("C", 0.2), ("D", 0.1)]);
        let view = ResultRenderer::new(TopRolesLayout::FixedSlots).render_prediction(&p);
        let roles: Vec<_> = view.top_roles.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, vec!["A", "B", "C"]);
        assert_eq!(view.top_roles[2].rank, 3);
    }

    #[test]
    fn test_list_layout_keeps_all_in_received_order() {
        // received order is kept even when not sorted by confidence
        let p = prediction(&[("A", 0.1), ("B", 0.9), ("C", 0.2), ("D", 0.3)]);
        let view = ResultRenderer::new(TopRolesLayout::List).render_prediction(&p);
        let roles: Vec<_> = view.top_roles.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_uncertainty_is_additive() {
        let mut p = prediction(&[("Data Analyst", 0.6)]);
        p.is_uncertain = true;
        p.uncertainty_message = Some("Low confidence".to_string());
        let view = ResultRenderer::default().render_prediction(&p);
        assert_eq!(view.warning.as_deref(), Some("Low confidence"));
        assert_eq!(view.role, "Data Analyst");
        assert_eq!(view.top_roles.len(), 1);
    }

    #[test]
    fn test_uncertain_without_message_uses_default() {
        let mut p = prediction(&[]);
        p.is_uncertain = true;
        p.uncertainty_message = Some(String::new());
        let view = ResultRenderer::default().render_prediction(&p);
        assert_eq!(view.warning.as_deref(), Some(DEFAULT_UNCERTAINTY));
    }

    #[test]
    fn test_certain_prediction_has_no_warning() {
        let mut p = prediction(&[]);
        p.uncertainty_message = Some("ignored".to_string());
        assert!(ResultRenderer::default().render_prediction(&p).warning.is_none());
    }

    #[test]
    fn test_upload_summary() {
        let upload = UploadResponse {
            skills: vec!["Python".to_string(), "SQL".to_string()],
            preview_text: Some("x".repeat(PREVIEW_CHARS + 20)),
            message: None,
            file_name: None,
            file_url: Some("/static/uploads/resumes/r.pdf".to_string()),
            file_type: None,
        };
        let summary = ResultRenderer::default().render_upload("r.pdf", &upload);
        assert_eq!(summary.file_name, "r.pdf");
        assert_eq!(summary.headline, "Extracted 2 technical skills");
        let preview = summary.preview.unwrap();
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_short_preview_untouched() {
        assert_eq!(excerpt(" résumé "), "résumé");
    }

    #[test]
    fn test_job_fit_view() {
        let view = ResultRenderer::default().render_job_fit(&JobFitResponse {
            job_role: "Data Analyst".to_string(),
            fit_score: 0.71,
            skills_match: "Good".to_string(),
            experience_level: "Intermediate".to_string(),
            message: None,
        });
        assert_eq!(view.fit_score, "71%");
        assert_eq!(view.skills_match, "Good");
    }

    #[test]
    fn test_layout_parse() {
        assert_eq!("slots".parse::<TopRolesLayout>().unwrap(), TopRolesLayout::FixedSlots);
        assert_eq!("LIST".parse::<TopRolesLayout>().unwrap(), TopRolesLayout::List);
        assert!("grid".parse::<TopRolesLayout>().is_err());
    }
}
