// src/panels.rs
//! Result panels. Each holds exactly one view, replaced whole on every update.

use std::fmt;

use crate::render::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Upload,
    Recommendations,
    SkillGap,
    Improvement,
}

impl PanelId {
    pub const ALL: [PanelId; 4] = [
        PanelId::Upload,
        PanelId::Recommendations,
        PanelId::SkillGap,
        PanelId::Improvement,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PanelId::Upload => "Resume",
            PanelId::Recommendations => "Job Recommendations",
            PanelId::SkillGap => "Skill Gap Analysis",
            PanelId::Improvement => "Resume Improvement",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Dispatch number for a panel. Only the newest one may write to it.
pub type Ticket = u64;

#[derive(Debug, Clone, Default)]
pub struct Panel {
    view: Option<View>,
    latest_ticket: Ticket,
}

impl Panel {
    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.view.as_ref().is_some_and(View::is_loading)
    }

    pub fn latest_ticket(&self) -> Ticket {
        self.latest_ticket
    }

    /// Show `loading` and hand out the next ticket.
    pub fn dispatch(&mut self, loading: View) -> Ticket {
        self.latest_ticket += 1;
        self.view = Some(loading);
        self.latest_ticket
    }

    /// Replace the content if `ticket` is still the newest dispatch.
    /// Returns whether the view was applied.
    pub fn complete(&mut self, ticket: Ticket, view: View) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }
        self.view = Some(view);
        true
    }

    /// Replace the content outside of any request.
    pub fn set(&mut self, view: View) {
        self.view = Some(view);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Panels {
    upload: Panel,
    recommendations: Panel,
    skill_gap: Panel,
    improvement: Panel,
}

impl Panels {
    pub fn get(&self, id: PanelId) -> &Panel {
        match id {
            PanelId::Upload => &self.upload,
            PanelId::Recommendations => &self.recommendations,
            PanelId::SkillGap => &self.skill_gap,
            PanelId::Improvement => &self.improvement,
        }
    }

    pub fn get_mut(&mut self, id: PanelId) -> &mut Panel {
        match id {
            PanelId::Upload => &mut self.upload,
            PanelId::Recommendations => &mut self.recommendations,
            PanelId::SkillGap => &mut self.skill_gap,
            PanelId::Improvement => &mut self.improvement,
        }
    }
}
