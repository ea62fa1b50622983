// src/types/response.rs
use serde::{Deserialize, Serialize};

use crate::errors::{ClientError, ClientResult};
use crate::types::analysis::{ImprovementAnalysis, JobMatchAnalysis, SkillGapAnalysis};

// ===== Request Bodies =====

#[derive(Debug, Serialize)]
pub struct ResumeRequest<'a> {
    pub resume_text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResumeJobRequest<'a> {
    pub resume_text: &'a str,
    pub job_description: &'a str,
}

// ===== Service Response Types =====

/// Every query endpoint answers with a top-level `success` flag and an
/// optional `error`. Anything but an explicit `true` counts as failure.
pub trait ApiEnvelope: Sized {
    fn succeeded(&self) -> bool;
    fn error_message(&self) -> Option<&str>;

    fn into_result(self) -> ClientResult<Self> {
        if self.succeeded() {
            Ok(self)
        } else {
            Err(ClientError::Backend {
                message: self.error_message().map(str::to_string),
            })
        }
    }
}

macro_rules! envelope {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ApiEnvelope for $ty {
                fn succeeded(&self) -> bool {
                    self.success.unwrap_or(false)
                }

                fn error_message(&self) -> Option<&str> {
                    self.error.as_deref()
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: Option<bool>,
    pub text: Option<String>,
    pub filename: Option<String>,
    pub character_count: Option<usize>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub recommendations: Vec<JobRecommendation>,
    pub total_recommendations: Option<usize>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub title: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub matched_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmJobMatchResponse {
    pub success: Option<bool>,
    pub llm_analysis: Option<JobMatchAnalysis>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillGapResponse {
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub analysis: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmSkillGapResponse {
    pub success: Option<bool>,
    pub llm_analysis: Option<SkillGapAnalysis>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeImproveResponse {
    pub success: Option<bool>,
    pub llm_analysis: Option<ImprovementAnalysis>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmStatusResponse {
    pub success: Option<bool>,
    pub llm_status: Option<LlmStatus>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmStatus {
    #[serde(default)]
    pub available: bool,
    pub provider_info: Option<ProviderInfo>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub preferred_provider: Option<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub available_providers: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: Option<String>,
}

pub const HEALTHY_STATUS: &str = "healthy";

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some(HEALTHY_STATUS)
    }
}

envelope!(
    UploadResponse,
    RecommendResponse,
    LlmJobMatchResponse,
    SkillGapResponse,
    LlmSkillGapResponse,
    ResumeImproveResponse,
    LlmStatusResponse,
);

// ===== Client-side results =====

pub const NO_TEXT_EXTRACTED: &str = "No text could be extracted from the PDF";

/// What a successful upload leaves behind for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResult {
    pub filename: String,
    pub character_count: usize,
    pub text: String,
}

impl TryFrom<UploadResponse> for UploadResult {
    type Error = ClientError;

    /// An accepted upload without usable text cannot load a session, so it
    /// is a failure whatever the `success` flag says.
    fn try_from(response: UploadResponse) -> ClientResult<Self> {
        let response = response.into_result()?;
        let text = response.text.unwrap_or_default();
        if text.trim().is_empty() {
            return Err(ClientError::Backend {
                message: Some(NO_TEXT_EXTRACTED.to_string()),
            });
        }
        let character_count = response
            .character_count
            .unwrap_or_else(|| text.chars().count());
        Ok(Self {
            filename: response.filename.unwrap_or_else(|| "resume.pdf".to_string()),
            character_count,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_success_flag_is_failure() {
        let response: RecommendResponse =
            serde_json::from_value(json!({ "recommendations": [] })).unwrap();
        assert!(matches!(
            response.into_result(),
            Err(ClientError::Backend { message: None })
        ));
    }

    #[test]
    fn false_success_carries_error_verbatim() {
        let response: UploadResponse =
            serde_json::from_value(json!({ "success": false, "error": "corrupt file" })).unwrap();
        match response.into_result() {
            Err(ClientError::Backend { message }) => {
                assert_eq!(message.as_deref(), Some("corrupt file"))
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn recommendations_keep_backend_order() {
        let response: RecommendResponse = serde_json::from_value(json!({
            "success": true,
            "recommendations": [
                { "title": "Data Engineer", "score": 42.0, "matched_keywords": ["sql"] },
                {
                    "title": "Backend Developer",
                    "score": 88.5,
                    "matched_keywords": ["python", "aws"]
                }
            ],
            "total_recommendations": 2
        }))
        .unwrap();
        let response = response.into_result().unwrap();
        let titles: Vec<_> = response
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Data Engineer", "Backend Developer"]);
    }

    #[test]
    fn upload_result_counts_characters_when_missing() {
        let result = UploadResult::try_from(UploadResponse {
            success: Some(true),
            text: Some("héllo".to_string()),
            filename: Some("cv.pdf".to_string()),
            character_count: None,
            error: None,
        })
        .unwrap();
        assert_eq!(result.character_count, 5);
        assert_eq!(result.filename, "cv.pdf");
    }

    #[test]
    fn accepted_upload_without_text_is_a_failure() {
        for text in [None, Some(""), Some("  \n ")] {
            let response = UploadResponse {
                success: Some(true),
                text: text.map(str::to_string),
                filename: Some("a.pdf".to_string()),
                character_count: Some(0),
                error: None,
            };
            match UploadResult::try_from(response) {
                Err(ClientError::Backend { message }) => {
                    assert_eq!(message.as_deref(), Some(NO_TEXT_EXTRACTED))
                }
                other => panic!("unexpected: {:?}", other),
            }
        }
    }

    #[test]
    fn null_lists_read_as_empty() {
        let recommend: RecommendResponse =
            serde_json::from_value(json!({ "success": true, "recommendations": null })).unwrap();
        assert!(recommend.recommendations.is_empty());

        let gap: SkillGapResponse =
            serde_json::from_value(json!({ "success": true, "analysis": null })).unwrap();
        assert!(gap.analysis.is_empty());

        let rec: JobRecommendation = serde_json::from_value(json!({
            "title": "QA Engineer",
            "score": 12.0,
            "matched_keywords": null
        }))
        .unwrap();
        assert!(rec.matched_keywords.is_empty());
    }

    #[test]
    fn health_marker() {
        let healthy: HealthResponse =
            serde_json::from_value(json!({ "status": "healthy", "message": "ok" })).unwrap();
        assert!(healthy.is_healthy());
        let degraded: HealthResponse =
            serde_json::from_value(json!({ "status": "degraded" })).unwrap();
        assert!(!degraded.is_healthy());
    }
}
