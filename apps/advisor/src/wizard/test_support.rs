//! Fakes shared by wizard tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{RemoteError, WizardError};
use crate::gateway::{PredictionGateway, UploadGateway};
use crate::models::{
    JobFitRequest, JobFitResponse, PredictRequest, PredictionResponse, RankedRole, UploadResponse,
};
use crate::render::{JobFitView, PredictionView, UploadSummary};
use crate::wizard::{ResumeFile, Step, WizardView};

type Reply<T> = Result<T, RemoteError>;

pub fn upload_ok(skills: &[&str]) -> UploadResponse {
    UploadResponse {
        skills: skills.iter().map(|s| s.to_string()).collect(),
        preview_text: Some("Python developer. SQL.".to_string()),
        message: Some("Resume uploaded and analyzed successfully".to_string()),
        file_name: Some("r.pdf".to_string()),
        file_url: Some("/static/uploads/resumes/r.pdf".to_string()),
        file_type: Some("pdf".to_string()),
    }
}

pub fn prediction_ok() -> PredictionResponse {
    PredictionResponse {
        predicted_role: "Data Analyst".to_string(),
        confidence: 0.842,
        svm_role: Some("Data Analyst".to_string()),
        svm_confidence: Some(0.8),
        rf_role: None,
        rf_confidence: None,
        top_roles: vec![
            RankedRole {
                role: "Data Analyst".to_string(),
                confidence: 0.842,
            },
            RankedRole {
                role: "BI Developer".to_string(),
                confidence: 0.61,
            },
        ],
        is_uncertain: false,
        uncertainty_message: None,
        message: None,
    }
}

pub fn job_fit_ok() -> JobFitResponse {
    JobFitResponse {
        job_role: "Data Analyst".to_string(),
        fit_score: 0.71,
        skills_match: "Good".to_string(),
        experience_level: "Intermediate".to_string(),
        message: None,
    }
}

/// Queued replies are used first; once drained, `default` is cloned.
struct Replies<T> {
    queued: Mutex<VecDeque<Reply<T>>>,
    default: Reply<T>,
}

impl<T: Clone> Replies<T> {
    fn new(default: Reply<T>) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            default,
        }
    }

    fn push(&self, reply: Reply<T>) {
        self.queued.lock().unwrap().push_back(reply);
    }

    fn next(&self) -> Reply<T> {
        if let Some(reply) = self.queued.lock().unwrap().pop_front() {
            return reply;
        }
        match &self.default {
            Ok(value) => Ok(value.clone()),
            Err(err) => Err(copy_error(err)),
        }
    }
}

// reqwest::Error is not Clone; fakes only ever produce the other variants.
fn copy_error(err: &RemoteError) -> RemoteError {
    match err {
        RemoteError::Status { status, message } => RemoteError::Status {
            status: *status,
            message: message.clone(),
        },
        other => RemoteError::Rejected(other.to_string()),
    }
}

pub struct FakeUploads {
    replies: Replies<UploadResponse>,
    calls: AtomicUsize,
}

impl FakeUploads {
    pub fn replying(default: Reply<UploadResponse>) -> Self {
        Self {
            replies: Replies::new(default),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn push(&self, reply: Reply<UploadResponse>) {
        self.replies.push(reply);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UploadGateway for FakeUploads {
    async fn upload_resume(&self, _file: &ResumeFile) -> Result<UploadResponse, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies.next()
    }
}

pub struct FakePredictions {
    predictions: Replies<PredictionResponse>,
    job_fits: Replies<JobFitResponse>,
    predict_calls: AtomicUsize,
    job_fit_calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
    last_job_fit: Mutex<Option<JobFitRequest>>,
}

impl FakePredictions {
    pub fn replying(
        prediction: Reply<PredictionResponse>,
        job_fit: Reply<JobFitResponse>,
    ) -> Self {
        Self {
            predictions: Replies::new(prediction),
            job_fits: Replies::new(job_fit),
            predict_calls: AtomicUsize::new(0),
            job_fit_calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
            last_job_fit: Mutex::new(None),
        }
    }

    pub fn push_prediction(&self, reply: Reply<PredictionResponse>) {
        self.predictions.push(reply);
    }

    pub fn push_job_fit(&self, reply: Reply<JobFitResponse>) {
        self.job_fits.push(reply);
    }

    pub fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub fn job_fit_calls(&self) -> usize {
        self.job_fit_calls.load(Ordering::SeqCst)
    }

    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }

    pub fn last_job_fit_request(&self) -> Option<JobFitRequest> {
        self.last_job_fit.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionGateway for FakePredictions {
    async fn predict_role(
        &self,
        request: &PredictRequest,
    ) -> Result<PredictionResponse, RemoteError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(request.text.clone());
        self.predictions.next()
    }

    async fn analyze_job_fit(
        &self,
        request: &JobFitRequest,
    ) -> Result<JobFitResponse, RemoteError> {
        self.job_fit_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_job_fit.lock().unwrap() = Some(request.clone());
        self.job_fits.next()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Step(Step),
    Forward(bool),
    Upload(UploadSummary),
    Skills(Vec<String>),
    Prediction(PredictionView),
    JobFit(JobFitView),
    Notice(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn errors(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Error(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_forward(&self) -> Option<bool> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Forward(enabled) => Some(*enabled),
            _ => None,
        })
    }
}

impl WizardView for RecordingView {
    fn show_step(&mut self, step: Step) {
        self.events.push(ViewEvent::Step(step));
    }

    fn set_forward_enabled(&mut self, enabled: bool) {
        self.events.push(ViewEvent::Forward(enabled));
    }

    fn render_upload(&mut self, summary: &UploadSummary) {
        self.events.push(ViewEvent::Upload(summary.clone()));
    }

    fn render_skills(&mut self, skills: &[String]) {
        self.events.push(ViewEvent::Skills(skills.to_vec()));
    }

    fn render_prediction(&mut self, prediction: &PredictionView) {
        self.events.push(ViewEvent::Prediction(prediction.clone()));
    }

    fn render_job_fit(&mut self, job_fit: &JobFitView) {
        self.events.push(ViewEvent::JobFit(job_fit.clone()));
    }

    fn show_notice(&mut self, message: &str) {
        self.events.push(ViewEvent::Notice(message.to_string()));
    }

    fn show_error(&mut self, error: &WizardError) {
        self.events.push(ViewEvent::Error(error.to_string()));
    }
}
