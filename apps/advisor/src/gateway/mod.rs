//! Gateways to the Career Advisor backend.
//!
//! The wizard only talks to the backend through these traits. `HttpGateway` is the
//! production implementation of both; tests swap in in-memory fakes.

use async_trait::async_trait;

use crate::errors::RemoteError;
use crate::models::{
    JobFitRequest, JobFitResponse, PredictRequest, PredictionResponse, UploadResponse,
};
use crate::wizard::ResumeFile;

pub mod http;

pub use http::HttpGateway;

pub const UPLOAD_RESUME_ENDPOINT: &str = "/api/upload-resume";
pub const PREDICT_ROLE_ENDPOINT: &str = "/api/predict-role";
pub const JOB_FIT_ENDPOINT: &str = "/api/job-fit-analysis";

/// Sends a resume for server-side text and skill extraction.
#[async_trait]
pub trait UploadGateway: Send + Sync {
    async fn upload_resume(&self, file: &ResumeFile) -> Result<UploadResponse, RemoteError>;
}

/// Role prediction and job-fit queries over a skill set.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    async fn predict_role(
        &self,
        request: &PredictRequest,
    ) -> Result<PredictionResponse, RemoteError>;

    async fn analyze_job_fit(&self, request: &JobFitRequest)
        -> Result<JobFitResponse, RemoteError>;
}
