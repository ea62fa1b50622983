// src/render/mod.rs
//! View trees produced from typed results, and their terminal rendering.
//!
//! Templates in [`templates`] are pure: data in, [`View`] out. Nothing here
//! touches the network or session state.

pub mod templates;

use std::fmt::Write;

use crate::types::analysis::Importance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Skill,
    MissingSkill,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Indeterminate progress indicator.
    Loading { label: String },
    Card {
        icon: Option<&'static str>,
        title: String,
        children: Vec<View>,
    },
    Empty { icon: &'static str, message: String },
    Error { message: String },
    Text(String),
    Muted(String),
    Field { label: String, value: String },
    Badges { style: BadgeStyle, items: Vec<String> },
    ImportanceBadge(Importance),
    ScoreBadge { score: f64 },
    Progress { percent: f64 },
    List { items: Vec<String> },
    Section { title: String, children: Vec<View> },
    Tip(String),
    Button { label: String },
    /// Collapsible resume text.
    Preview { visible: bool, text: String },
    Stack(Vec<View>),
}

impl View {
    pub fn is_loading(&self) -> bool {
        matches!(self, View::Loading { .. })
    }

    /// Every piece of text the view would show, depth first. Collapsed
    /// previews contribute nothing.
    pub fn visible_text(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            View::Loading { label } => out.push(label.clone()),
            View::Card {
                title, children, ..
            }
            | View::Section { title, children } => {
                out.push(title.clone());
                children.iter().for_each(|c| c.collect_text(out));
            }
            View::Empty { message, .. } | View::Error { message } => out.push(message.clone()),
            View::Text(s) | View::Muted(s) | View::Tip(s) => out.push(s.clone()),
            View::Field { label, value } => out.push(format!("{}: {}", label, value)),
            View::Badges { items, .. } | View::List { items } => out.extend(items.iter().cloned()),
            View::ImportanceBadge(i) => out.push(i.label().to_string()),
            View::ScoreBadge { score } => out.push(score_label(*score)),
            View::Progress { .. } => {}
            View::Button { label } => out.push(label.clone()),
            View::Preview { visible, text } => {
                if *visible {
                    out.push(text.clone())
                }
            }
            View::Stack(children) => children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.visible_text().iter().any(|t| t.contains(needle))
    }

    /// Plain-text rendering for a terminal.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out, 0);
        out
    }

    fn write_text(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        // Writing to a String cannot fail.
        let _ = match self {
            View::Loading { label } => writeln!(out, "{}⏳ {}", pad, label),
            View::Card {
                icon,
                title,
                children,
            } => {
                let _ = writeln!(out, "{}{}{}", pad, icon_glyph(*icon), title);
                children.iter().for_each(|c| c.write_text(out, depth + 1));
                Ok(())
            }
            View::Section { title, children } => {
                let _ = writeln!(out, "{}{}", pad, title);
                children.iter().for_each(|c| c.write_text(out, depth + 1));
                Ok(())
            }
            View::Empty { icon, message } => {
                writeln!(out, "{}{}{}", pad, icon_glyph(Some(*icon)), message)
            }
            View::Error { message } => writeln!(out, "{}✗ {}", pad, message),
            View::Text(s) => writeln!(out, "{}{}", pad, s),
            View::Muted(s) => writeln!(out, "{}({})", pad, s),
            View::Field { label, value } => writeln!(out, "{}{}: {}", pad, label, value),
            View::Badges { style, items } => {
                let mark = match style {
                    BadgeStyle::Skill => "+",
                    BadgeStyle::MissingSkill => "-",
                };
                let rendered: Vec<String> =
                    items.iter().map(|i| format!("[{}{}]", mark, i)).collect();
                writeln!(out, "{}{}", pad, rendered.join(" "))
            }
            View::ImportanceBadge(i) => writeln!(out, "{}<{}>", pad, i.label()),
            View::ScoreBadge { score } => writeln!(out, "{}{}", pad, score_label(*score)),
            View::Progress { percent } => {
                let filled = (percent.clamp(0.0, 100.0) / 5.0).round() as usize;
                writeln!(
                    out,
                    "{}[{}{}]",
                    pad,
                    "#".repeat(filled),
                    ".".repeat(20 - filled)
                )
            }
            View::List { items } => {
                items.iter().for_each(|i| {
                    let _ = writeln!(out, "{}• {}", pad, i);
                });
                Ok(())
            }
            View::Tip(s) => writeln!(out, "{}💡 {}", pad, s),
            View::Button { label } => writeln!(out, "{}[ {} ]", pad, label),
            View::Preview { visible, text } => {
                if *visible {
                    text.lines().for_each(|l| {
                        let _ = writeln!(out, "{}│ {}", pad, l);
                    });
                }
                Ok(())
            }
            View::Stack(children) => {
                children.iter().for_each(|c| c.write_text(out, depth));
                Ok(())
            }
        };
    }
}

pub fn score_label(score: f64) -> String {
    format!("{:.1}% Match", score)
}

pub fn icon_glyph(icon: Option<&str>) -> &'static str {
    match icon {
        Some("check-circle") => "✓ ",
        Some("exclamation-triangle") => "⚠ ",
        Some("info-circle") => "ℹ ",
        Some("briefcase") => "💼 ",
        Some("search") => "🔍 ",
        Some("file-pdf") => "📄 ",
        Some("file-text") => "📝 ",
        Some("robot") => "🤖 ",
        Some("lightbulb") => "💡 ",
        Some(_) => "• ",
        None => "",
    }
}
