// src/core/service_client.rs
//! HTTP client for the SkillSnap backend API

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::app_log;
use crate::config::ClientConfig;
use crate::core::backend::Backend;
use crate::types::response::{
    HealthResponse, LlmJobMatchResponse, LlmSkillGapResponse, LlmStatusResponse,
    RecommendResponse, ResumeImproveResponse, ResumeJobRequest, ResumeRequest,
    SkillGapResponse, UploadResponse,
};
use crate::upload::ResumeFile;

const UPLOAD_RESUME_ENDPOINT: &str = "/upload_resume";
const RECOMMEND_JOBS_ENDPOINT: &str = "/recommend_jobs";
const LLM_JOB_MATCH_ENDPOINT: &str = "/llm_job_match";
const SKILL_GAP_ENDPOINT: &str = "/skill_gap";
const LLM_SKILL_GAP_ENDPOINT: &str = "/llm_skill_gap";
const RESUME_IMPROVE_ENDPOINT: &str = "/resume_improve";
const LLM_STATUS_ENDPOINT: &str = "/llm_status";
const HEALTH_ENDPOINT: &str = "/health";

const UPLOAD_FIELD: &str = "file";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Generic POST request with JSON
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        app_log!(info, "POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        Self::decode(response).await
    }

    /// Generic GET request
    pub async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        app_log!(info, "GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        Self::decode(response).await
    }

    /// The backend answers errors with the same JSON envelope and a non-2xx
    /// status, so the body is parsed whatever the status. Only a body that
    /// cannot be read as `R` is an error here.
    async fn decode<R>(response: Response) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        app_log!(trace, "Response status: {}", status);

        let body = response
            .text()
            .await
            .context("Failed to read response text")?;
        app_log!(trace, "Raw response body: {}", body);

        match serde_json::from_str::<R>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) if status.is_success() => {
                Err(e).with_context(|| format!("Failed to parse JSON response: {}", body))
            }
            Err(_) => {
                app_log!(error, "Backend error response {}: {}", status, body);
                anyhow::bail!("HTTP {} error: {}", status, body)
            }
        }
    }
}

#[async_trait]
impl Backend for ServiceClient {
    async fn upload_resume(&self, file: &ResumeFile) -> Result<UploadResponse> {
        let url = self.url(UPLOAD_RESUME_ENDPOINT);

        let form = Form::new().part(
            UPLOAD_FIELD,
            Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.content_type)
                .context("Failed to create multipart")?,
        );

        app_log!(
            info,
            "Uploading resume {} ({} bytes) to {}",
            file.file_name,
            file.size,
            url
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("HTTP request failed")?;

        Self::decode(response).await
    }

    async fn recommend_jobs(&self, resume_text: &str) -> Result<RecommendResponse> {
        self.post_json(RECOMMEND_JOBS_ENDPOINT, &ResumeRequest { resume_text })
            .await
    }

    async fn llm_job_match(&self, resume_text: &str) -> Result<LlmJobMatchResponse> {
        self.post_json(LLM_JOB_MATCH_ENDPOINT, &ResumeRequest { resume_text })
            .await
    }

    async fn skill_gap(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<SkillGapResponse> {
        let payload = ResumeJobRequest {
            resume_text,
            job_description,
        };
        self.post_json(SKILL_GAP_ENDPOINT, &payload).await
    }

    async fn llm_skill_gap(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<LlmSkillGapResponse> {
        let payload = ResumeJobRequest {
            resume_text,
            job_description,
        };
        self.post_json(LLM_SKILL_GAP_ENDPOINT, &payload).await
    }

    async fn resume_improve(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<ResumeImproveResponse> {
        let payload = ResumeJobRequest {
            resume_text,
            job_description,
        };
        self.post_json(RESUME_IMPROVE_ENDPOINT, &payload).await
    }

    async fn llm_status(&self) -> Result<LlmStatusResponse> {
        self.get(LLM_STATUS_ENDPOINT).await
    }

    async fn health(&self) -> Result<HealthResponse> {
        self.get(HEALTH_ENDPOINT).await
    }
}
