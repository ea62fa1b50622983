// src/gate.rs
//! Which controls are usable, derived fresh from session state and the
//! LLM capability every time it is asked.

use std::fmt;

use crate::session::SessionState;

/// Outcome of the LLM status probe.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LlmCapability {
    #[default]
    Unknown,
    Available {
        provider: Option<String>,
        available_providers: Vec<String>,
    },
    Unavailable {
        reason: Option<String>,
    },
}

impl LlmCapability {
    pub fn is_available(&self) -> bool {
        matches!(self, LlmCapability::Available { .. })
    }
}

/// The resume-dependent action controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    RecommendJobs,
    AnalyzeSkills,
    LlmJobMatch,
    LlmSkillGap,
    ImproveResume,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::RecommendJobs,
        Control::AnalyzeSkills,
        Control::LlmJobMatch,
        Control::LlmSkillGap,
        Control::ImproveResume,
    ];

    pub fn requires_llm(self) -> bool {
        matches!(
            self,
            Control::LlmJobMatch | Control::LlmSkillGap | Control::ImproveResume
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::RecommendJobs => "Get Job Recommendations",
            Control::AnalyzeSkills => "Analyze Skill Gap",
            Control::LlmJobMatch => "AI Job Matching",
            Control::LlmSkillGap => "AI Skill Gap Analysis",
            Control::ImproveResume => "Improve Resume",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of every control's enabled flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlStates {
    pub job_description_editable: bool,
    resume_loaded: bool,
    llm_available: bool,
}

impl ControlStates {
    pub fn is_enabled(&self, control: Control) -> bool {
        self.resume_loaded && (!control.requires_llm() || self.llm_available)
    }

    pub fn enabled(&self) -> Vec<Control> {
        Control::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }
}

pub struct FeatureGate;

impl FeatureGate {
    pub fn evaluate(session: &SessionState, capability: &LlmCapability) -> ControlStates {
        ControlStates {
            job_description_editable: session.has_resume(),
            resume_loaded: session.has_resume(),
            llm_available: capability.is_available(),
        }
    }
}
