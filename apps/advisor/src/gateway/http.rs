//! reqwest-backed gateway. One client, one request per call.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{
    PredictionGateway, UploadGateway, JOB_FIT_ENDPOINT, PREDICT_ROLE_ENDPOINT,
    UPLOAD_RESUME_ENDPOINT,
};
use crate::config::{normalize_base, Config};
use crate::errors::RemoteError;
use crate::models::{
    JobFitRequest, JobFitResponse, PredictRequest, PredictionResponse, UploadResponse,
};
use crate::wizard::ResumeFile;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for the backend. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: &str, session_cookie: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        if let Some(cookie) = session_cookie {
            let value = HeaderValue::from_str(cookie)
                .context("Session cookie is not a valid header value")?;
            headers.insert(COOKIE, value);
        }

        // No explicit timeout: the transport default applies.
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: normalize_base(base_url),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base, config.session_cookie.as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Sends the request and maps the response onto `T` or a `RemoteError`.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<T, RemoteError> {
        let response = request.send().await.map_err(|e| {
            warn!("{operation}: transport failure: {e}");
            RemoteError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        debug!("{operation}: HTTP {status}, {} bytes", body.len());

        if !status.is_success() {
            let message = extract_error_message(status.as_u16(), &body);
            warn!("{operation} returned {status}: {message}");
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message,
            });
        }

        decode_success(&body, operation)
    }
}

#[async_trait]
impl UploadGateway for HttpGateway {
    async fn upload_resume(&self, file: &ResumeFile) -> Result<UploadResponse, RemoteError> {
        let part = Part::stream_with_length(file.content(), file.size())
            .file_name(file.file_name().to_string())
            .mime_str(file.mime_type())?;
        let form = Form::new().part("file", part);

        info!(
            "Uploading resume {} ({} bytes) to {}",
            file.file_name(),
            file.size(),
            UPLOAD_RESUME_ENDPOINT
        );

        let request = self.client.post(self.url(UPLOAD_RESUME_ENDPOINT)).multipart(form);
        self.send(request, "Failed to upload resume").await
    }
}

#[async_trait]
impl PredictionGateway for HttpGateway {
    async fn predict_role(
        &self,
        request: &PredictRequest,
    ) -> Result<PredictionResponse, RemoteError> {
        info!("Requesting role prediction from {}", PREDICT_ROLE_ENDPOINT);
        let request = self.client.post(self.url(PREDICT_ROLE_ENDPOINT)).json(request);
        self.send(request, "Prediction failed").await
    }

    async fn analyze_job_fit(
        &self,
        request: &JobFitRequest,
    ) -> Result<JobFitResponse, RemoteError> {
        info!("Requesting job fit analysis for '{}'", request.job_role);
        let request = self.client.post(self.url(JOB_FIT_ENDPOINT)).json(request);
        self.send(request, "Job fit analysis failed").await
    }
}

/// Best-effort message from a non-2xx body: `{"error": ...}`, then the raw text,
/// then `Status <code>`.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(ErrorBody { error: Some(message) }) = serde_json::from_str::<ErrorBody>(body) {
        if !message.trim().is_empty() {
            return message;
        }
    }
    let text = body.trim();
    if text.is_empty() {
        format!("Status {status}")
    } else {
        text.to_string()
    }
}

/// Decodes a 2xx body. Bodies without `success: true` are rejections carrying
/// `error`, then `message`, then `fallback`.
pub fn decode_success<T: DeserializeOwned>(body: &str, fallback: &str) -> Result<T, RemoteError> {
    let value: Value = serde_json::from_str(body)?;

    if value.get("success").and_then(Value::as_bool) != Some(true) {
        let message = ["error", "message"]
            .iter()
            .filter_map(|key| value.get(*key).and_then(Value::as_str))
            .find(|m| !m.trim().is_empty())
            .unwrap_or(fallback);
        return Err(RemoteError::Rejected(message.to_string()));
    }

    Ok(serde_json::from_value(value)?)
}
