// src/render/templates.rs
use crate::render::{BadgeStyle, View};
use crate::types::analysis::{
    ExperienceGap, ImprovementAnalysis, JobMatch, JobMatchAnalysis, KeywordOptimization,
    MissingSkill, SectionAnalysis, SkillGapAnalysis,
};
use crate::types::response::{JobRecommendation, UploadResult};
use crate::upload::ResumeFile;
use crate::utils::{format_size_mb, truncate_preview};

pub const LOADING_LABEL: &str = "Processing...";
pub const UPLOAD_BUTTON: &str = "Upload Resume";
pub const PREVIEW_BUTTON: &str = "Preview Text";

pub fn loading() -> View {
    View::Loading {
        label: LOADING_LABEL.to_string(),
    }
}

pub fn failure(message: &str) -> View {
    View::Error {
        message: message.to_string(),
    }
}

// ===== Upload area =====

pub fn upload_prompt() -> View {
    View::Empty {
        icon: "file-pdf",
        message: "Drop your PDF resume here or click to browse".to_string(),
    }
}

pub fn staged_file(file: &ResumeFile) -> View {
    View::Card {
        icon: Some("file-pdf"),
        title: file.file_name.clone(),
        children: vec![
            View::Muted(format_size_mb(file.size)),
            View::Button {
                label: UPLOAD_BUTTON.to_string(),
            },
        ],
    }
}

/// Resume summary shown after an upload or a sample load, with its preview
/// toggle. The toggle is the only state it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeSummary {
    pub kind: SummaryKind,
    pub preview: String,
    pub preview_visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryKind {
    Uploaded {
        filename: String,
        character_count: usize,
    },
    Sample {
        character_count: usize,
    },
}

impl ResumeSummary {
    pub fn from_upload(result: &UploadResult, preview_chars: usize) -> Self {
        Self {
            kind: SummaryKind::Uploaded {
                filename: result.filename.clone(),
                character_count: result.character_count,
            },
            preview: truncate_preview(&result.text, preview_chars),
            preview_visible: false,
        }
    }

    pub fn from_sample(text: &str) -> Self {
        Self {
            kind: SummaryKind::Sample {
                character_count: text.chars().count(),
            },
            preview: text.to_string(),
            preview_visible: false,
        }
    }

    pub fn toggle_preview(&mut self) {
        self.preview_visible = !self.preview_visible;
    }

    pub fn render(&self) -> View {
        let mut children = match &self.kind {
            SummaryKind::Uploaded {
                filename,
                character_count,
            } => vec![
                View::Field {
                    label: "File".to_string(),
                    value: filename.clone(),
                },
                View::Field {
                    label: "Characters extracted".to_string(),
                    value: character_count.to_string(),
                },
            ],
            SummaryKind::Sample { character_count } => vec![View::Field {
                label: "Characters".to_string(),
                value: character_count.to_string(),
            }],
        };
        children.push(View::Button {
            label: PREVIEW_BUTTON.to_string(),
        });
        children.push(View::Preview {
            visible: self.preview_visible,
            text: self.preview.clone(),
        });

        let (icon, title) = match self.kind {
            SummaryKind::Uploaded { .. } => ("check-circle", "Resume Processed"),
            SummaryKind::Sample { .. } => ("file-text", "Sample Resume Loaded"),
        };

        View::Card {
            icon: Some(icon),
            title: title.to_string(),
            children,
        }
    }
}

// ===== Basic analysis =====

pub fn job_recommendations(recommendations: &[JobRecommendation]) -> View {
    if recommendations.is_empty() {
        return View::Empty {
            icon: "search",
            message: "No job recommendations found.".to_string(),
        };
    }

    View::Stack(recommendations.iter().map(job_card).collect())
}

fn job_card(job: &JobRecommendation) -> View {
    View::Card {
        icon: Some("briefcase"),
        title: job.title.clone(),
        children: vec![
            View::ScoreBadge { score: job.score },
            View::Muted("Matched Skills:".to_string()),
            View::Badges {
                style: BadgeStyle::Skill,
                items: job.matched_keywords.clone(),
            },
            View::Progress { percent: job.score },
        ],
    }
}

pub const PERFECT_MATCH_TITLE: &str = "Perfect Match!";

pub fn skill_gap(missing_skills: &[String]) -> View {
    if missing_skills.is_empty() {
        return View::Card {
            icon: Some("check-circle"),
            title: PERFECT_MATCH_TITLE.to_string(),
            children: vec![View::Muted(
                "Your resume covers all the required skills for this job.".to_string(),
            )],
        };
    }

    View::Card {
        icon: Some("exclamation-triangle"),
        title: "Skills to Develop".to_string(),
        children: vec![
            View::Muted(
                "The following skills are mentioned in the job description but not found in your resume:"
                    .to_string(),
            ),
            View::Badges {
                style: BadgeStyle::MissingSkill,
                items: missing_skills.to_vec(),
            },
            View::Tip(
                "Consider adding these skills to your resume if you have experience with them, or plan to learn them to improve your job match."
                    .to_string(),
            ),
        ],
    }
}

// ===== LLM analysis =====

fn push_list(children: &mut Vec<View>, title: &str, items: &[String]) {
    if !items.is_empty() {
        children.push(View::Section {
            title: title.to_string(),
            children: vec![View::List {
                items: items.to_vec(),
            }],
        });
    }
}

fn push_text(children: &mut Vec<View>, title: &str, text: Option<&String>) {
    if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
        children.push(View::Section {
            title: title.to_string(),
            children: vec![View::Text(text.clone())],
        });
    }
}

pub fn llm_job_match(analysis: &JobMatchAnalysis) -> View {
    let mut blocks = Vec::new();
    push_text(&mut blocks, "AI Analysis Summary", analysis.analysis_summary.as_ref());

    if analysis.matches.is_empty() {
        blocks.push(View::Empty {
            icon: "search",
            message: "No job matches found.".to_string(),
        });
    } else {
        blocks.extend(analysis.matches.iter().map(llm_match_card));
    }

    View::Stack(blocks)
}

fn llm_match_card(job: &JobMatch) -> View {
    let mut children = Vec::new();
    if let Some(score) = job.score {
        children.push(View::ScoreBadge { score });
        children.push(View::Progress { percent: score });
    }
    push_list(&mut children, "Why it fits", &job.reasons);
    push_list(&mut children, "Strengths", &job.strengths);
    push_list(&mut children, "Concerns", &job.concerns);

    View::Card {
        icon: Some("robot"),
        title: job
            .job_title
            .clone()
            .unwrap_or_else(|| "Untitled role".to_string()),
        children,
    }
}

pub fn llm_skill_gap(analysis: &SkillGapAnalysis) -> View {
    let mut blocks = Vec::new();
    push_text(&mut blocks, "Overall Assessment", analysis.overall_assessment.as_ref());

    if !analysis.missing_skills.is_empty() {
        blocks.push(View::Section {
            title: "Missing Skills".to_string(),
            children: analysis.missing_skills.iter().map(missing_skill_card).collect(),
        });
    }

    if !analysis.experience_gaps.is_empty() {
        blocks.push(View::Section {
            title: "Experience Gaps".to_string(),
            children: analysis.experience_gaps.iter().map(experience_gap_card).collect(),
        });
    }

    push_list(&mut blocks, "Priority Improvements", &analysis.priority_improvements);

    if blocks.is_empty() {
        return View::Card {
            icon: Some("check-circle"),
            title: PERFECT_MATCH_TITLE.to_string(),
            children: vec![View::Muted(
                "No skill gaps were identified for this job.".to_string(),
            )],
        };
    }

    View::Stack(blocks)
}

fn missing_skill_card(skill: &MissingSkill) -> View {
    let mut children = Vec::new();
    if let Some(importance) = &skill.importance {
        children.push(View::ImportanceBadge(importance.clone()));
    }
    if let Some(description) = &skill.description {
        children.push(View::Text(description.clone()));
    }
    push_list(&mut children, "How to improve", &skill.improvement_suggestions);

    View::Card {
        icon: Some("exclamation-triangle"),
        title: skill.skill.clone().unwrap_or_else(|| "Unnamed skill".to_string()),
        children,
    }
}

fn experience_gap_card(gap: &ExperienceGap) -> View {
    let mut children = Vec::new();
    if let Some(description) = &gap.description {
        children.push(View::Text(description.clone()));
    }
    push_list(&mut children, "Suggestions", &gap.suggestions);

    View::Card {
        icon: None,
        title: gap.area.clone().unwrap_or_else(|| "Experience".to_string()),
        children,
    }
}

pub fn resume_improvement(analysis: &ImprovementAnalysis) -> View {
    let mut blocks = Vec::new();

    if let Some(score) = analysis.priority_score {
        blocks.push(View::Section {
            title: "Resume Score".to_string(),
            children: vec![
                View::Text(format!("{:.0}/100", score)),
                View::Progress { percent: score },
            ],
        });
    }
    push_text(&mut blocks, "Overall Assessment", analysis.overall_assessment.as_ref());

    if !analysis.section_analysis.is_empty() {
        blocks.push(View::Section {
            title: "Section Analysis".to_string(),
            children: analysis.section_analysis.iter().map(section_card).collect(),
        });
    }

    if !analysis.keyword_optimization.is_empty() {
        blocks.push(View::Section {
            title: "Keyword Optimization".to_string(),
            children: analysis
                .keyword_optimization
                .iter()
                .map(keyword_card)
                .collect(),
        });
    }

    push_list(&mut blocks, "Action Items", &analysis.action_items);

    if blocks.is_empty() {
        return View::Empty {
            icon: "lightbulb",
            message: "No improvement suggestions were returned.".to_string(),
        };
    }

    View::Stack(blocks)
}

fn section_card(section: &SectionAnalysis) -> View {
    let mut children = Vec::new();
    if let Some(current) = &section.current_content {
        children.push(View::Muted(current.clone()));
    }
    push_list(&mut children, "Issues", &section.issues);
    push_list(&mut children, "Suggestions", &section.suggestions);
    push_text(&mut children, "Suggested Rewrite", section.rewritten_content.as_ref());

    let title = section
        .section
        .as_deref()
        .map(capitalize)
        .unwrap_or_else(|| "Section".to_string());

    View::Card {
        icon: None,
        title,
        children,
    }
}

fn keyword_card(keyword: &KeywordOptimization) -> View {
    let mut children = Vec::new();
    if let Some(current) = &keyword.current_usage {
        children.push(View::Field {
            label: "Current".to_string(),
            value: current.clone(),
        });
    }
    if let Some(suggested) = &keyword.suggested_usage {
        children.push(View::Field {
            label: "Suggested".to_string(),
            value: suggested.clone(),
        });
    }

    View::Card {
        icon: None,
        title: keyword.keyword.clone().unwrap_or_else(|| "Keyword".to_string()),
        children,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::analysis::Importance;
    use serde_json::json;

    #[test]
    fn empty_gap_is_perfect_match_not_empty_list() {
        let view = skill_gap(&[]);
        assert!(view.contains_text(PERFECT_MATCH_TITLE));
        assert!(!view.contains_text("Skills to Develop"));
    }

    #[test]
    fn missing_skills_rendered_as_badges() {
        let view = skill_gap(&["kubernetes".to_string(), "graphql".to_string()]);
        assert!(view.contains_text("Skills to Develop"));
        assert!(view.to_text().contains("[-kubernetes] [-graphql]"));
    }

    #[test]
    fn recommendations_render_in_given_order() {
        let jobs = vec![
            JobRecommendation {
                title: "Junior Analyst".to_string(),
                score: 12.0,
                matched_keywords: vec!["excel".to_string()],
            },
            JobRecommendation {
                title: "Staff Engineer".to_string(),
                score: 91.0,
                matched_keywords: vec!["rust".to_string()],
            },
        ];
        let text = job_recommendations(&jobs).to_text();
        let first = text.find("Junior Analyst").unwrap();
        let second = text.find("Staff Engineer").unwrap();
        assert!(first < second);
        assert!(text.contains("91.0% Match"));
    }

    #[test]
    fn no_recommendations_message() {
        assert!(job_recommendations(&[]).contains_text("No job recommendations found."));
    }

    #[test]
    fn upload_summary_starts_collapsed_and_truncates() {
        let result = UploadResult {
            filename: "cv.pdf".to_string(),
            character_count: 12,
            text: "abcdefghijkl".to_string(),
        };
        let mut summary = ResumeSummary::from_upload(&result, 5);
        assert!(!summary.render().contains_text("abcde"));

        summary.toggle_preview();
        assert!(summary.render().contains_text("abcde..."));
        assert!(summary.render().contains_text("Characters extracted: 12"));
    }

    #[test]
    fn sample_summary_shows_full_text() {
        let mut summary = ResumeSummary::from_sample("line one\nline two");
        summary.toggle_preview();
        let view = summary.render();
        assert!(view.contains_text("Sample Resume Loaded"));
        assert!(view.contains_text("line one\nline two"));
    }

    #[test]
    fn llm_skill_gap_omits_absent_sections() {
        let analysis: SkillGapAnalysis = serde_json::from_value(json!({
            "missing_skills": [
                { "skill": "Kubernetes", "importance": "high" }
            ]
        }))
        .unwrap();
        let view = llm_skill_gap(&analysis);
        assert!(view.contains_text("Missing Skills"));
        assert!(view.contains_text("Kubernetes"));
        assert!(!view.contains_text("Experience Gaps"));
        assert!(!view.contains_text("Priority Improvements"));
        assert!(!view.contains_text("Overall Assessment"));

        let has_badge = match &view {
            View::Stack(blocks) => blocks.iter().any(|b| match b {
                View::Section { children, .. } => children.iter().any(|c| match c {
                    View::Card { children, .. } => children
                        .iter()
                        .any(|v| *v == View::ImportanceBadge(Importance::High)),
                    _ => false,
                }),
                _ => false,
            }),
            _ => false,
        };
        assert!(has_badge);
    }

    #[test]
    fn llm_job_match_with_summary_only() {
        let analysis: JobMatchAnalysis = serde_json::from_value(json!({
            "analysis_summary": "Strong backend profile"
        }))
        .unwrap();
        let view = llm_job_match(&analysis);
        assert!(view.contains_text("Strong backend profile"));
        assert!(view.contains_text("No job matches found."));
    }

    #[test]
    fn llm_job_match_cards() {
        let analysis: JobMatchAnalysis = serde_json::from_value(json!({
            "matches": [{
                "job_title": "Platform Engineer",
                "score": 78,
                "reasons": ["AWS and Docker experience"],
                "concerns": ["No Kubernetes"]
            }]
        }))
        .unwrap();
        let view = llm_job_match(&analysis);
        assert!(view.contains_text("Platform Engineer"));
        assert!(view.contains_text("78.0% Match"));
        assert!(view.contains_text("Why it fits"));
        assert!(view.contains_text("Concerns"));
        assert!(!view.contains_text("Strengths"));
    }

    #[test]
    fn improvement_renders_present_parts() {
        let analysis: ImprovementAnalysis = serde_json::from_value(json!({
            "priority_score": 64,
            "section_analysis": [{
                "section": "summary",
                "issues": ["Too generic"],
                "rewritten_content": "Backend engineer with 3 years of Python"
            }],
            "action_items": ["Add metrics to each role"]
        }))
        .unwrap();
        let view = resume_improvement(&analysis);
        assert!(view.contains_text("64/100"));
        assert!(view.contains_text("Summary"));
        assert!(view.contains_text("Suggested Rewrite"));
        assert!(view.contains_text("Add metrics to each role"));
        assert!(!view.contains_text("Keyword Optimization"));
        assert!(!view.contains_text("Overall Assessment"));
    }

    #[test]
    fn empty_improvement_payload() {
        let view = resume_improvement(&ImprovementAnalysis::default());
        assert!(view.contains_text("No improvement suggestions were returned."));
    }

    #[test]
    fn staged_file_shows_size_and_button() {
        let file = ResumeFile::new("cv.pdf", "application/pdf", vec![0u8; 1_572_864]);
        let view = staged_file(&file);
        assert!(view.contains_text("cv.pdf"));
        assert!(view.contains_text("1.50 MB"));
        assert!(view.contains_text(UPLOAD_BUTTON));
    }
}
