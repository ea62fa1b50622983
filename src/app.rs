// src/app.rs
//! One client session: session state, the upload flow, the analysis
//! orchestrators and the capability probe, all rendering into panels.

use std::fmt;

use crate::app_log;
use crate::config::ClientConfig;
use crate::core::backend::Backend;
use crate::errors::{ClientError, ClientResult};
use crate::gate::{Control, ControlStates, FeatureGate, LlmCapability};
use crate::notify::{Notification, NotificationSurface};
use crate::panels::{PanelId, Panels, Ticket};
use crate::render::templates::{self, ResumeSummary};
use crate::render::View;
use crate::session::{SessionState, SAMPLE_JOB_DESCRIPTION};
use crate::types::analysis::{ImprovementAnalysis, JobMatchAnalysis, SkillGapAnalysis};
use crate::types::response::{ApiEnvelope, JobRecommendation, UploadResult};
use crate::upload::{ResumeFile, UploadArea};

/// The analysis actions a user can trigger once a resume is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RecommendJobs,
    LlmJobMatch,
    SkillGap,
    LlmSkillGap,
    ImproveResume,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::RecommendJobs,
        Action::LlmJobMatch,
        Action::SkillGap,
        Action::LlmSkillGap,
        Action::ImproveResume,
    ];

    pub fn control(self) -> Control {
        match self {
            Action::RecommendJobs => Control::RecommendJobs,
            Action::LlmJobMatch => Control::LlmJobMatch,
            Action::SkillGap => Control::AnalyzeSkills,
            Action::LlmSkillGap => Control::LlmSkillGap,
            Action::ImproveResume => Control::ImproveResume,
        }
    }

    /// Basic and LLM variants of the same analysis share a panel.
    pub fn panel(self) -> PanelId {
        match self {
            Action::RecommendJobs | Action::LlmJobMatch => PanelId::Recommendations,
            Action::SkillGap | Action::LlmSkillGap => PanelId::SkillGap,
            Action::ImproveResume => PanelId::Improvement,
        }
    }

    pub fn needs_job_description(self) -> bool {
        !matches!(self, Action::RecommendJobs | Action::LlmJobMatch)
    }

    pub fn failure_label(self) -> &'static str {
        match self {
            Action::RecommendJobs => "Recommendation failed",
            Action::LlmJobMatch => "LLM job matching failed",
            Action::SkillGap => "Analysis failed",
            Action::LlmSkillGap => "LLM skill gap analysis failed",
            Action::ImproveResume => "Resume improvement failed",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control().label())
    }
}

/// A dispatched analysis request. Owns everything the network call needs,
/// so the session is free while it is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub action: Action,
    pub panel: PanelId,
    pub ticket: Ticket,
    pub resume_text: String,
    pub job_description: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AnalysisResult {
    Recommendations {
        items: Vec<JobRecommendation>,
        total: usize,
    },
    JobMatch(JobMatchAnalysis),
    SkillGap(Vec<String>),
    LlmSkillGap(SkillGapAnalysis),
    Improvement(ImprovementAnalysis),
}

impl AnalysisResult {
    pub fn render(&self) -> View {
        match self {
            AnalysisResult::Recommendations { items, .. } => templates::job_recommendations(items),
            AnalysisResult::JobMatch(a) => templates::llm_job_match(a),
            AnalysisResult::SkillGap(missing) => templates::skill_gap(missing),
            AnalysisResult::LlmSkillGap(a) => templates::llm_skill_gap(a),
            AnalysisResult::Improvement(a) => templates::resume_improvement(a),
        }
    }

    fn success_message(&self) -> String {
        match self {
            AnalysisResult::Recommendations { total, .. } => {
                format!("Found {} job recommendations!", total)
            }
            AnalysisResult::JobMatch(_) => "AI job matching completed!".to_string(),
            AnalysisResult::SkillGap(_) => "Skill gap analysis completed!".to_string(),
            AnalysisResult::LlmSkillGap(_) => "AI skill gap analysis completed!".to_string(),
            AnalysisResult::Improvement(_) => {
                "Resume improvement analysis completed!".to_string()
            }
        }
    }
}

/// Send the request described by `pending`. Exactly one backend call.
pub async fn execute<B>(backend: &B, pending: &PendingRequest) -> ClientResult<AnalysisResult>
where
    B: Backend + ?Sized,
{
    let resume = pending.resume_text.as_str();
    let job = pending.job_description.as_deref().unwrap_or_default();

    app_log!(
        info,
        "Dispatching {:?} (panel {:?}, ticket {})",
        pending.action,
        pending.panel,
        pending.ticket
    );

    let result = match pending.action {
        Action::RecommendJobs => {
            let r = backend.recommend_jobs(resume).await?.into_result()?;
            let total = r.total_recommendations.unwrap_or(r.recommendations.len());
            AnalysisResult::Recommendations {
                items: r.recommendations,
                total,
            }
        }
        Action::LlmJobMatch => {
            let r = backend.llm_job_match(resume).await?.into_result()?;
            AnalysisResult::JobMatch(r.llm_analysis.unwrap_or_default())
        }
        Action::SkillGap => {
            let r = backend.skill_gap(resume, job).await?.into_result()?;
            AnalysisResult::SkillGap(r.analysis)
        }
        Action::LlmSkillGap => {
            let r = backend.llm_skill_gap(resume, job).await?.into_result()?;
            AnalysisResult::LlmSkillGap(r.llm_analysis.unwrap_or_default())
        }
        Action::ImproveResume => {
            let r = backend.resume_improve(resume, job).await?.into_result()?;
            AnalysisResult::Improvement(r.llm_analysis.unwrap_or_default())
        }
    };

    Ok(result)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Rendered,
    /// A newer request for the same panel was dispatched; nothing was shown.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Unhealthy(Option<String>),
    Unreachable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub health: Health,
    pub capability: LlmCapability,
}

/// A staged upload that has been sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub ticket: Ticket,
    pub file: ResumeFile,
}

pub struct App<B> {
    backend: B,
    config: ClientConfig,
    session: SessionState,
    capability: LlmCapability,
    probe: Option<ProbeReport>,
    upload_area: UploadArea,
    summary: Option<ResumeSummary>,
    job_description: String,
    panels: Panels,
    notifications: NotificationSurface,
}

impl<B: Backend> App<B> {
    pub fn new(backend: B, config: ClientConfig) -> Self {
        let notifications = NotificationSurface::new(config.notification_ttl());
        let mut panels = Panels::default();
        panels.get_mut(PanelId::Upload).set(templates::upload_prompt());

        Self {
            backend,
            config,
            session: SessionState::new(),
            capability: LlmCapability::Unknown,
            probe: None,
            upload_area: UploadArea::default(),
            summary: None,
            job_description: String::new(),
            panels,
            notifications,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn capability(&self) -> &LlmCapability {
        &self.capability
    }

    pub fn upload_area(&self) -> &UploadArea {
        &self.upload_area
    }

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    pub fn panel_view(&self, id: PanelId) -> Option<&View> {
        self.panels.get(id).view()
    }

    pub fn notification(&mut self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Close the banner on screen, if any.
    pub fn dismiss_notification(&mut self) {
        if let Some(id) = self.notifications.current().map(|n| n.id) {
            self.notifications.dismiss(id);
        }
    }

    pub fn controls(&self) -> ControlStates {
        FeatureGate::evaluate(&self.session, &self.capability)
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn load_sample_job_description(&mut self) {
        self.job_description = SAMPLE_JOB_DESCRIPTION.to_string();
        self.notifications.success("Sample job description loaded!");
    }

    // ===== Capability probe =====

    /// Check backend health and LLM availability. Runs once per session;
    /// later calls return the first report without touching the network.
    pub async fn probe_capabilities(&mut self) -> ProbeReport {
        if let Some(report) = &self.probe {
            return report.clone();
        }

        let (health, status) = tokio::join!(self.backend.health(), self.backend.llm_status());

        let capability = match status.map_err(ClientError::from).and_then(|s| s.into_result()) {
            Ok(response) => {
                let status = response.llm_status.unwrap_or_default();
                if status.available {
                    let info = status.provider_info.unwrap_or_default();
                    LlmCapability::Available {
                        provider: info
                            .preferred_provider
                            .or_else(|| info.available_providers.first().cloned()),
                        available_providers: info.available_providers,
                    }
                } else {
                    LlmCapability::Unavailable {
                        reason: status.error,
                    }
                }
            }
            Err(e) => LlmCapability::Unavailable {
                reason: Some(e.user_message("LLM status check failed")),
            },
        };

        match &capability {
            LlmCapability::Available { provider, .. } => {
                let provider = provider.as_deref().unwrap_or("unknown");
                app_log!(info, "LLM features available via {}", provider);
                self.notifications
                    .success(format!("AI features enabled (provider: {})", provider));
            }
            LlmCapability::Unavailable { reason } => {
                let reason = reason.as_deref().unwrap_or("No LLM providers configured");
                app_log!(warn, "LLM features unavailable: {}", reason);
                self.notifications.warning(format!(
                    "AI features unavailable: {}. Basic analysis is still available.",
                    reason
                ));
            }
            LlmCapability::Unknown => {}
        }
        self.capability = capability.clone();

        let health = match health {
            Ok(h) if h.is_healthy() => Health::Healthy,
            Ok(h) => {
                app_log!(warn, "Backend health check returned {:?}", h.status);
                self.notifications.warning(
                    "Warning: API health check failed. Some features may not work properly.",
                );
                Health::Unhealthy(h.status)
            }
            Err(e) => {
                app_log!(error, "Backend unreachable: {:#}", e);
                self.notifications.danger(
                    "Warning: Cannot connect to SkillSnap API. Please make sure the backend is running.",
                );
                Health::Unreachable(format!("{:#}", e))
            }
        };

        let report = ProbeReport { health, capability };
        self.probe = Some(report.clone());
        report
    }

    // ===== Upload =====

    /// Stage a file for upload. Nothing is sent until [`App::submit_upload`].
    pub fn select_file(&mut self, file: ResumeFile) -> ClientResult<()> {
        let accepted = self.config.accepted_content_type.clone();
        if let Err(e) = self.upload_area.select(file, &accepted) {
            app_log!(warn, "Rejected file selection: {:?}", e);
            self.notifications.danger(e.to_string());
            return Err(e);
        }
        if let Ok(staged) = self.upload_area.staged() {
            app_log!(info, "Staged {} ({} bytes)", staged.file_name, staged.size);
            let view = templates::staged_file(staged);
            self.panels.get_mut(PanelId::Upload).set(view);
            self.summary = None;
        }
        Ok(())
    }

    pub fn begin_upload(&mut self) -> ClientResult<PendingUpload> {
        let file = match self.upload_area.staged() {
            Ok(f) => f.clone(),
            Err(e) => {
                self.notifications.danger(e.to_string());
                return Err(e);
            }
        };
        let ticket = self
            .panels
            .get_mut(PanelId::Upload)
            .dispatch(templates::loading());
        // The summary is off screen until an upload succeeds again.
        self.summary = None;
        Ok(PendingUpload { ticket, file })
    }

    pub fn finish_upload(
        &mut self,
        pending: &PendingUpload,
        result: ClientResult<UploadResult>,
    ) -> ClientResult<Completion> {
        if pending.ticket != self.panels.get(PanelId::Upload).latest_ticket() {
            app_log!(debug, "Dropping stale upload response (ticket {})", pending.ticket);
            return Ok(Completion::Stale);
        }

        match result {
            Ok(upload) => {
                app_log!(
                    info,
                    "Resume {} processed, {} characters",
                    upload.filename,
                    upload.character_count
                );
                let summary = ResumeSummary::from_upload(&upload, self.config.preview_chars);
                self.panels
                    .get_mut(PanelId::Upload)
                    .complete(pending.ticket, summary.render());
                self.summary = Some(summary);
                self.session.set_from_upload(upload.text);
                self.notifications
                    .success("Resume uploaded and processed successfully!");
                Ok(Completion::Rendered)
            }
            Err(e) => {
                let message = format!("Upload failed: {}", e.user_message("Upload failed"));
                app_log!(error, "{}", message);
                self.panels
                    .get_mut(PanelId::Upload)
                    .complete(pending.ticket, templates::failure(&message));
                self.notifications.danger(message);
                Err(e)
            }
        }
    }

    /// Send the staged file and apply the result.
    pub async fn submit_upload(&mut self) -> ClientResult<()> {
        let pending = self.begin_upload()?;
        let result = match self.backend.upload_resume(&pending.file).await {
            Ok(response) => UploadResult::try_from(response),
            Err(e) => Err(ClientError::Transport(e)),
        };
        self.finish_upload(&pending, result).map(|_| ())
    }

    /// Show or hide the resume text under the summary. Returns the new
    /// visibility, or `None` when the upload panel is not showing a summary
    /// (nothing loaded yet, a file staged, an upload in flight or failed).
    pub fn toggle_resume_preview(&mut self) -> Option<bool> {
        let summary = self.summary.as_mut()?;
        summary.toggle_preview();
        let visible = summary.preview_visible;
        let view = summary.render();
        self.panels.get_mut(PanelId::Upload).set(view);
        Some(visible)
    }

    pub fn load_sample_resume(&mut self) {
        self.session.load_sample();
        let summary = ResumeSummary::from_sample(self.session.resume_text());
        self.panels.get_mut(PanelId::Upload).set(summary.render());
        self.summary = Some(summary);
        self.notifications.success(
            "Sample resume loaded successfully! You can now try job recommendations and skill analysis.",
        );
    }

    // ===== Analysis =====

    fn check_preconditions(&self, action: Action) -> ClientResult<Option<String>> {
        if !self.session.has_resume() {
            return Err(ClientError::ResumeRequired);
        }

        let job_description = if action.needs_job_description() {
            let trimmed = self.job_description.trim();
            if trimmed.is_empty() {
                return Err(ClientError::JobDescriptionRequired);
            }
            Some(trimmed.to_string())
        } else {
            None
        };

        if !self.controls().is_enabled(action.control()) {
            return Err(ClientError::LlmUnavailable);
        }

        Ok(job_description)
    }

    /// Validate, put the panel into its loading state and hand back the
    /// request to send. Rejections show a banner and send nothing.
    pub fn begin(&mut self, action: Action) -> ClientResult<PendingRequest> {
        let job_description = match self.check_preconditions(action) {
            Ok(job) => job,
            Err(e) => {
                app_log!(info, "{:?} rejected: {}", action, e);
                self.notifications.danger(e.to_string());
                return Err(e);
            }
        };

        let panel = action.panel();
        let ticket = self.panels.get_mut(panel).dispatch(templates::loading());

        Ok(PendingRequest {
            action,
            panel,
            ticket,
            resume_text: self.session.resume_text().to_string(),
            job_description,
        })
    }

    /// Apply the outcome of `pending`, unless a newer request has since been
    /// dispatched to the same panel.
    pub fn finish(
        &mut self,
        pending: &PendingRequest,
        result: ClientResult<AnalysisResult>,
    ) -> ClientResult<Completion> {
        let panel = self.panels.get_mut(pending.panel);
        if pending.ticket != panel.latest_ticket() {
            app_log!(
                debug,
                "Dropping stale {:?} response (ticket {}, latest {})",
                pending.action,
                pending.ticket,
                panel.latest_ticket()
            );
            return Ok(Completion::Stale);
        }

        match result {
            Ok(analysis) => {
                panel.complete(pending.ticket, analysis.render());
                self.notifications.success(analysis.success_message());
                Ok(Completion::Rendered)
            }
            Err(e) => {
                let label = pending.action.failure_label();
                let message = format!("{}: {}", label, e.user_message(label));
                app_log!(error, "{}", message);
                panel.complete(pending.ticket, templates::failure(&message));
                self.notifications.danger(message);
                Err(e)
            }
        }
    }

    pub async fn run(&mut self, action: Action) -> ClientResult<()> {
        let pending = self.begin(action)?;
        let result = execute(&self.backend, &pending).await;
        self.finish(&pending, result).map(|_| ())
    }

    pub async fn recommend_jobs(&mut self) -> ClientResult<()> {
        self.run(Action::RecommendJobs).await
    }

    pub async fn llm_job_match(&mut self) -> ClientResult<()> {
        self.run(Action::LlmJobMatch).await
    }

    pub async fn analyze_skill_gap(&mut self) -> ClientResult<()> {
        self.run(Action::SkillGap).await
    }

    pub async fn llm_skill_gap(&mut self) -> ClientResult<()> {
        self.run(Action::LlmSkillGap).await
    }

    pub async fn improve_resume(&mut self) -> ClientResult<()> {
        self.run(Action::ImproveResume).await
    }
}
