use uuid::Uuid;

use crate::models::{JobFitResponse, PredictionResponse, UploadResponse};
use crate::wizard::{ResumeFile, Step};

/// Metadata the backend returned for the last accepted upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedResume {
    pub file_name: String,
    pub file_url: Option<String>,
    pub file_type: Option<String>,
    pub message: Option<String>,
}

/// A backend result together with the inputs it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis<T> {
    pub result: T,
    pub skills: Vec<String>,
    pub file_name: Option<String>,
}

impl<T> Analysis<T> {
    /// Whether both results were computed from the same resume and skill list.
    pub fn same_inputs<U>(&self, other: &Analysis<U>) -> bool {
        self.skills == other.skills && self.file_name == other.file_name
    }
}

/// State of one wizard run. Only `WizardController` mutates it.
#[derive(Debug, Clone)]
pub struct WizardSession {
    id: Uuid,
    step: Step,
    uploaded_file: Option<ResumeFile>,
    upload: Option<UploadedResume>,
    skills: Vec<String>,
    resume_text: String,
    last_prediction: Option<Analysis<PredictionResponse>>,
    last_job_fit: Option<Analysis<JobFitResponse>>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            step: Step::Upload,
            uploaded_file: None,
            upload: None,
            skills: Vec::new(),
            resume_text: String::new(),
            last_prediction: None,
            last_job_fit: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn uploaded_file(&self) -> Option<&ResumeFile> {
        self.uploaded_file.as_ref()
    }

    pub fn upload(&self) -> Option<&UploadedResume> {
        self.upload.as_ref()
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }

    pub fn last_prediction(&self) -> Option<&PredictionResponse> {
        self.last_prediction.as_ref().map(|a| &a.result)
    }

    pub fn last_job_fit(&self) -> Option<&JobFitResponse> {
        self.last_job_fit.as_ref().map(|a| &a.result)
    }

    pub fn prediction_analysis(&self) -> Option<&Analysis<PredictionResponse>> {
        self.last_prediction.as_ref()
    }

    pub fn job_fit_analysis(&self) -> Option<&Analysis<JobFitResponse>> {
        self.last_job_fit.as_ref()
    }

    /// Skills serialized the way the backend expects them.
    pub fn joined_skills(&self) -> String {
        self.skills.join(", ")
    }

    /// Whether leaving `step` forward is currently allowed.
    pub fn can_advance_from(&self, step: Step) -> bool {
        match step {
            Step::Upload => self.uploaded_file.is_some() && !self.skills.is_empty(),
            Step::Review => !self.skills.is_empty(),
            Step::Predict => false,
        }
    }

    // ── mutation, controller only ─────────────────────────────────────────────

    pub(super) fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    /// Applies a successful upload. Backend skills are taken verbatim, duplicates included.
    /// Results computed for the previous resume are dropped.
    pub(super) fn apply_upload(&mut self, file: ResumeFile, response: &UploadResponse) {
        self.upload = Some(UploadedResume {
            file_name: response
                .file_name
                .clone()
                .unwrap_or_else(|| file.file_name().to_string()),
            file_url: response.file_url.clone(),
            file_type: response.file_type.clone(),
            message: response.message.clone(),
        });
        self.uploaded_file = Some(file);
        self.skills = response.skills.clone();
        self.resume_text = response.preview_text.clone().unwrap_or_default();
        self.last_prediction = None;
        self.last_job_fit = None;
    }

    pub(super) fn push_skill(&mut self, skill: String) {
        self.skills.push(skill);
    }

    /// Removes the first exact match. Returns whether anything was removed.
    pub(super) fn remove_skill(&mut self, skill: &str) -> bool {
        match self.skills.iter().position(|s| s == skill) {
            Some(index) => {
                self.skills.remove(index);
                true
            }
            None => false,
        }
    }

    pub(super) fn remove_skill_at(&mut self, index: usize) -> Option<String> {
        (index < self.skills.len()).then(|| self.skills.remove(index))
    }

    /// Stores a prediction made from the current skills and resume.
    pub(super) fn set_prediction(&mut self, prediction: PredictionResponse) {
        self.last_prediction = Some(self.snapshot(prediction));
    }

    pub(super) fn set_job_fit(&mut self, job_fit: JobFitResponse) {
        self.last_job_fit = Some(self.snapshot(job_fit));
    }

    fn snapshot<T>(&self, result: T) -> Analysis<T> {
        Analysis {
            result,
            skills: self.skills.clone(),
            file_name: self.upload.as_ref().map(|u| u.file_name.clone()),
        }
    }
}
