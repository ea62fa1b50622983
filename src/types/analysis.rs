// src/types/analysis.rs
//! Loosely structured LLM analysis payloads.
//!
//! Every field is optional. Rendering shows what is present and skips the rest.

use serde::{Deserialize, Serialize};

// ===== Job matching =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobMatchAnalysis {
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub matches: Vec<JobMatch>,
    pub analysis_summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_title: Option<String>,
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub reasons: Vec<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub concerns: Vec<String>,
}

// ===== Skill gap =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub missing_skills: Vec<MissingSkill>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub experience_gaps: Vec<ExperienceGap>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub priority_improvements: Vec<String>,
    pub overall_assessment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill: Option<String>,
    pub importance: Option<Importance>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub improvement_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceGap {
    pub area: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub suggestions: Vec<String>,
}

/// Importance tier attached to a missing skill. Unrecognised tiers are kept
/// as-is so they still render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Importance {
    High,
    Medium,
    Low,
    Other(String),
}

impl From<String> for Importance {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" => Importance::High,
            "medium" => Importance::Medium,
            "low" => Importance::Low,
            _ => Importance::Other(value),
        }
    }
}

impl From<Importance> for String {
    fn from(value: Importance) -> Self {
        value.label().to_string()
    }
}

impl Importance {
    pub fn label(&self) -> &str {
        match self {
            Importance::High => "high",
            Importance::Medium => "medium",
            Importance::Low => "low",
            Importance::Other(s) => s.as_str(),
        }
    }
}

// ===== Resume improvement =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImprovementAnalysis {
    pub overall_assessment: Option<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub section_analysis: Vec<SectionAnalysis>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub keyword_optimization: Vec<KeywordOptimization>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub action_items: Vec<String>,
    pub priority_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub section: Option<String>,
    pub current_content: Option<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub issues: Vec<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_empty")]
    pub suggestions: Vec<String>,
    pub rewritten_content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordOptimization {
    pub keyword: Option<String>,
    pub current_usage: Option<String>,
    pub suggested_usage: Option<String>,
}
