// src/core/fake_backend.rs
//! Scripted in-memory backend for tests.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::backend::Backend;
use crate::types::response::{
    HealthResponse, LlmJobMatchResponse, LlmSkillGapResponse, LlmStatusResponse,
    RecommendResponse, ResumeImproveResponse, SkillGapResponse, UploadResponse,
};
use crate::upload::ResumeFile;

#[derive(Debug, Clone)]
enum Scripted {
    Json(Value),
    Fail(String),
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    scripts: HashMap<&'static str, Scripted>,
    calls: Mutex<Vec<(&'static str, Value)>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `endpoint` with `body` every time it is called.
    pub fn with_json(mut self, endpoint: &'static str, body: Value) -> Self {
        self.scripts.insert(endpoint, Scripted::Json(body));
        self
    }

    /// Fail `endpoint` at the transport level.
    pub fn with_failure(mut self, endpoint: &'static str, message: &str) -> Self {
        self.scripts
            .insert(endpoint, Scripted::Fail(message.to_string()));
        self
    }

    /// A backend that is up and has an LLM provider configured.
    pub fn healthy() -> Self {
        Self::new()
            .with_json("/health", json!({ "status": "healthy" }))
            .with_json(
                "/llm_status",
                json!({
                    "success": true,
                    "llm_status": {
                        "available": true,
                        "provider_info": {
                            "preferred_provider": "openai",
                            "available_providers": ["openai", "anthropic"]
                        }
                    }
                }),
            )
    }

    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.iter().filter(|(e, _)| *e == endpoint).count())
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Body sent with the most recent call to `endpoint`.
    pub fn last_body(&self, endpoint: &str) -> Option<Value> {
        self.calls.lock().ok().and_then(|calls| {
            calls
                .iter()
                .rev()
                .find(|(e, _)| *e == endpoint)
                .map(|(_, body)| body.clone())
        })
    }

    fn respond<R: DeserializeOwned>(&self, endpoint: &'static str, body: Value) -> Result<R> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((endpoint, body));
        }
        match self.scripts.get(endpoint) {
            Some(Scripted::Json(v)) => serde_json::from_value(v.clone())
                .with_context(|| format!("Failed to parse JSON response from {}", endpoint)),
            Some(Scripted::Fail(msg)) => anyhow::bail!("{}", msg),
            None => anyhow::bail!("no response scripted for {}", endpoint),
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn upload_resume(&self, file: &ResumeFile) -> Result<UploadResponse> {
        self.respond(
            "/upload_resume",
            json!({ "file": file.file_name, "content_type": file.content_type }),
        )
    }

    async fn recommend_jobs(&self, resume_text: &str) -> Result<RecommendResponse> {
        self.respond("/recommend_jobs", json!({ "resume_text": resume_text }))
    }

    async fn llm_job_match(&self, resume_text: &str) -> Result<LlmJobMatchResponse> {
        self.respond("/llm_job_match", json!({ "resume_text": resume_text }))
    }

    async fn skill_gap(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<SkillGapResponse> {
        self.respond(
            "/skill_gap",
            json!({ "resume_text": resume_text, "job_description": job_description }),
        )
    }

    async fn llm_skill_gap(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<LlmSkillGapResponse> {
        self.respond(
            "/llm_skill_gap",
            json!({ "resume_text": resume_text, "job_description": job_description }),
        )
    }

    async fn resume_improve(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<ResumeImproveResponse> {
        self.respond(
            "/resume_improve",
            json!({ "resume_text": resume_text, "job_description": job_description }),
        )
    }

    async fn llm_status(&self) -> Result<LlmStatusResponse> {
        self.respond("/llm_status", Value::Null)
    }

    async fn health(&self) -> Result<HealthResponse> {
        self.respond("/health", Value::Null)
    }
}
