// src/core/backend.rs
//! The request/response boundary. Everything behind it is a black box.

use anyhow::Result;
use async_trait::async_trait;

use crate::types::response::{
    HealthResponse, LlmJobMatchResponse, LlmSkillGapResponse, LlmStatusResponse,
    RecommendResponse, ResumeImproveResponse, SkillGapResponse, UploadResponse,
};
use crate::upload::ResumeFile;

/// One method per backend endpoint.
///
/// `Err` means the exchange itself broke (unreachable host, unreadable body).
/// A well-formed `success: false` answer comes back as `Ok`.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn upload_resume(&self, file: &ResumeFile) -> Result<UploadResponse>;

    async fn recommend_jobs(&self, resume_text: &str) -> Result<RecommendResponse>;

    async fn llm_job_match(&self, resume_text: &str) -> Result<LlmJobMatchResponse>;

    async fn skill_gap(&self, resume_text: &str, job_description: &str)
        -> Result<SkillGapResponse>;

    async fn llm_skill_gap(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<LlmSkillGapResponse>;

    async fn resume_improve(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<ResumeImproveResponse>;

    async fn llm_status(&self) -> Result<LlmStatusResponse>;

    async fn health(&self) -> Result<HealthResponse>;
}
