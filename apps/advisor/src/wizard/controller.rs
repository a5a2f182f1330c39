use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::bail;
use tracing::{debug, info, warn};

use crate::errors::{ValidationError, WizardError};
use crate::gateway::{PredictionGateway, UploadGateway};
use crate::models::{JobFitRequest, PredictRequest};
use crate::render::{JobFitView, PredictionView, ResultRenderer, UploadSummary};
use crate::report::{write_report, AnalysisReport, ReportFormat};
use crate::wizard::validation::{normalize_job_role, normalize_new_skill, validate_resume};
use crate::wizard::{ResumeFile, Step, WizardSession, WizardView};

/// When the prediction request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictMode {
    /// The user triggers `request_prediction` from the Predict step.
    #[default]
    Explicit,
    /// Entering the Predict step sends the request immediately.
    OnEntry,
}

impl FromStr for PredictMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explicit" | "button" => Ok(PredictMode::Explicit),
            "on-entry" | "on_entry" | "auto" => Ok(PredictMode::OnEntry),
            other => bail!("unknown predict mode '{other}' (expected 'explicit' or 'on-entry')"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WizardOptions {
    pub predict_mode: PredictMode,
    /// Move to Review as soon as an upload succeeds.
    pub auto_advance: bool,
}

/// Drives one wizard session. The only writer to its `WizardSession`.
pub struct WizardController<V: WizardView> {
    session: WizardSession,
    uploads: Arc<dyn UploadGateway>,
    predictions: Arc<dyn PredictionGateway>,
    renderer: ResultRenderer,
    view: V,
    options: WizardOptions,
}

impl<V: WizardView> WizardController<V> {
    pub fn new(
        uploads: Arc<dyn UploadGateway>,
        predictions: Arc<dyn PredictionGateway>,
        renderer: ResultRenderer,
        view: V,
        options: WizardOptions,
    ) -> Self {
        let mut controller = Self {
            session: WizardSession::new(),
            uploads,
            predictions,
            renderer,
            view,
            options,
        };
        info!("Wizard session {} started", controller.session.id());
        controller.refresh_step();
        controller
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn step(&self) -> Step {
        self.session.step()
    }

    pub fn skills(&self) -> &[String] {
        self.session.skills()
    }

    pub fn options(&self) -> WizardOptions {
        self.options
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    // ────────────────────────────────────────────────────────────────────────
    // Navigation
    // ────────────────────────────────────────────────────────────────────────

    /// Moves one step forward if the current step's guard holds. A no-op on the last step.
    ///
    /// In `OnEntry` mode, entering Predict also sends the prediction; if that request
    /// fails the step is still Predict and the remote error is returned.
    pub async fn advance(&mut self) -> Result<Step, WizardError> {
        let from = self.session.step();
        let Some(to) = from.next() else {
            return Ok(from);
        };

        if let Err(err) = self.check_forward_guard(from) {
            return Err(self.fail(err.into()));
        }

        self.move_to(to);

        if to == Step::Predict && self.options.predict_mode == PredictMode::OnEntry {
            self.request_prediction().await?;
        }
        Ok(to)
    }

    /// Moves one step back. Always allowed; a no-op on the first step.
    pub fn back(&mut self) -> Step {
        if let Some(to) = self.session.step().previous() {
            self.move_to(to);
        }
        self.session.step()
    }

    fn check_forward_guard(&self, from: Step) -> Result<(), ValidationError> {
        match from {
            Step::Upload if self.session.uploaded_file().is_none() => {
                Err(ValidationError::NoResumeUploaded)
            }
            Step::Upload | Step::Review if self.session.skills().is_empty() => {
                Err(ValidationError::NoSkills)
            }
            _ => Ok(()),
        }
    }

    fn move_to(&mut self, step: Step) {
        debug!("Session {}: {} -> {}", self.session.id(), self.session.step(), step);
        self.session.set_step(step);
        self.refresh_step();
    }

    fn refresh_step(&mut self) {
        let step = self.session.step();
        self.view.show_step(step);
        self.refresh_forward();
    }

    fn refresh_forward(&mut self) {
        let enabled = self.session.can_advance_from(self.session.step());
        self.view.set_forward_enabled(enabled);
    }

    // ────────────────────────────────────────────────────────────────────────
    // Step 1: upload
    // ────────────────────────────────────────────────────────────────────────

    /// Reads a resume from disk and submits it.
    pub async fn submit_path(&mut self, path: &Path) -> Result<UploadSummary, WizardError> {
        match ResumeFile::from_path(path).await {
            Ok(file) => self.submit_file(file).await,
            Err(source) => Err(self.fail(WizardError::ReadResume {
                path: path.to_path_buf(),
                source,
            })),
        }
    }

    /// Validates locally, then uploads. On failure the session is untouched.
    pub async fn submit_file(&mut self, file: ResumeFile) -> Result<UploadSummary, WizardError> {
        if let Err(err) = validate_resume(&file) {
            warn!("Rejected {} before upload: {err}", file.file_name());
            return Err(self.fail(err.into()));
        }

        let response = match self.uploads.upload_resume(&file).await {
            Ok(response) => response,
            Err(err) => return Err(self.fail(err.into())),
        };

        let summary = self.renderer.render_upload(file.file_name(), &response);
        self.session.apply_upload(file, &response);
        info!(
            "Session {}: resume '{}' analyzed, {} skills",
            self.session.id(),
            summary.file_name,
            summary.skill_count
        );

        self.view.render_upload(&summary);
        self.view.render_skills(self.session.skills());
        self.refresh_forward();
        let notice = response
            .message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("Resume uploaded and analyzed successfully");
        self.view.show_notice(notice);

        if self.options.auto_advance
            && self.session.step() == Step::Upload
            && self.session.can_advance_from(Step::Upload)
        {
            self.move_to(Step::Review);
        }

        Ok(summary)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Step 2: skill editing
    // ────────────────────────────────────────────────────────────────────────

    pub fn add_skill(&mut self, input: &str) -> Result<(), WizardError> {
        let skill = match normalize_new_skill(input, self.session.skills()) {
            Ok(skill) => skill,
            Err(err) => return Err(self.fail(err.into())),
        };
        debug!("Session {}: skill added '{skill}'", self.session.id());
        self.session.push_skill(skill);
        self.skills_changed();
        Ok(())
    }

    /// Removes the first entry equal to `skill`. Absent skills are ignored.
    pub fn remove_skill(&mut self, skill: &str) {
        if self.session.remove_skill(skill) {
            debug!("Session {}: skill removed '{skill}'", self.session.id());
            self.skills_changed();
        }
    }

    /// Removes the entry at `index` (display order). Out-of-range indices are ignored.
    pub fn remove_skill_at(&mut self, index: usize) {
        if let Some(removed) = self.session.remove_skill_at(index) {
            debug!("Session {}: skill removed '{removed}'", self.session.id());
            self.skills_changed();
        }
    }

    fn skills_changed(&mut self) {
        self.view.render_skills(self.session.skills());
        self.refresh_forward();
    }

    // ────────────────────────────────────────────────────────────────────────
    // Step 3: prediction and follow-ups
    // ────────────────────────────────────────────────────────────────────────

    pub async fn request_prediction(&mut self) -> Result<PredictionView, WizardError> {
        if self.session.skills().is_empty() {
            return Err(self.fail(ValidationError::NoSkills.into()));
        }

        let request = PredictRequest::from_skills(self.session.skills());
        let prediction = match self.predictions.predict_role(&request).await {
            Ok(prediction) => prediction,
            Err(err) => return Err(self.fail(err.into())),
        };

        info!(
            "Session {}: predicted '{}' at {:.3}",
            self.session.id(),
            prediction.predicted_role,
            prediction.confidence
        );
        let view = self.renderer.render_prediction(&prediction);
        self.session.set_prediction(prediction);
        self.view.render_prediction(&view);
        self.view.show_notice("Career prediction complete");
        Ok(view)
    }

    /// Scores the current skills against `job_role`. Leaves the prediction untouched.
    pub async fn request_job_fit(&mut self, job_role: &str) -> Result<JobFitView, WizardError> {
        let job_role = match normalize_job_role(job_role) {
            Ok(role) => role,
            Err(err) => return Err(self.fail(err.into())),
        };

        let request = JobFitRequest {
            job_role,
            skills: self.session.joined_skills(),
            resume_text: self.session.resume_text().to_string(),
        };
        let job_fit = match self.predictions.analyze_job_fit(&request).await {
            Ok(job_fit) => job_fit,
            Err(err) => return Err(self.fail(err.into())),
        };

        let view = self.renderer.render_job_fit(&job_fit);
        self.session.set_job_fit(job_fit);
        self.view.render_job_fit(&view);
        Ok(view)
    }

    /// Writes the current analysis to `path`. Requires a prediction.
    pub async fn export_report(
        &mut self,
        path: &Path,
        format: ReportFormat,
    ) -> Result<PathBuf, WizardError> {
        let report = match AnalysisReport::from_session(&self.session, &self.renderer) {
            Ok(report) => report,
            Err(err) => return Err(self.fail(err.into())),
        };

        match write_report(&report, path, format).await {
            Ok(written) => {
                self.view
                    .show_notice(&format!("Report saved to {}", written.display()));
                Ok(written)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Surfaces an error to the view and hands it back for the caller to return.
    fn fail(&mut self, err: WizardError) -> WizardError {
        if err.is_remote() {
            warn!("Session {}: {err}", self.session.id());
        }
        self.view.show_error(&err);
        err
    }
}
