// src/cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::{Action, App};
use crate::app_log;
use crate::core::{Backend, ServiceClient};
use crate::config::ClientConfig;
use crate::notify::Notification;
use crate::panels::PanelId;
use crate::render::icon_glyph;
use crate::upload::ResumeFile;

#[derive(Parser)]
#[command(name = "skillsnap")]
#[command(about = "Resume analysis client for the SkillSnap API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend origin, e.g. http://127.0.0.1:5001
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// YAML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ResumeArgs {
    /// PDF resume to upload before the analysis
    #[arg(long, conflicts_with = "sample_resume")]
    pub resume: Option<PathBuf>,

    /// Use the built-in sample resume
    #[arg(long)]
    pub sample_resume: bool,
}

#[derive(Args, Debug, Clone)]
pub struct JobArgs {
    /// File holding the job description
    #[arg(long, conflicts_with_all = ["sample_job", "job_text"])]
    pub job: Option<PathBuf>,

    /// Use the built-in sample job description
    #[arg(long, conflicts_with = "job_text")]
    pub sample_job: bool,

    /// Job description given inline
    #[arg(long)]
    pub job_text: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check backend health and LLM availability
    Status,
    /// Upload a PDF resume and show the extracted summary
    Upload {
        file: PathBuf,
        /// Expand the resume text preview
        #[arg(long)]
        preview: bool,
    },
    /// Load the built-in sample resume
    Sample {
        #[arg(long)]
        preview: bool,
    },
    /// Keyword-based job recommendations
    Recommend {
        #[command(flatten)]
        resume: ResumeArgs,
    },
    /// LLM job matching
    LlmMatch {
        #[command(flatten)]
        resume: ResumeArgs,
    },
    /// Keyword-based skill gap against a job description
    SkillGap {
        #[command(flatten)]
        resume: ResumeArgs,
        #[command(flatten)]
        job: JobArgs,
    },
    /// LLM skill gap analysis
    LlmSkillGap {
        #[command(flatten)]
        resume: ResumeArgs,
        #[command(flatten)]
        job: JobArgs,
    },
    /// LLM resume improvement suggestions
    Improve {
        #[command(flatten)]
        resume: ResumeArgs,
        #[command(flatten)]
        job: JobArgs,
    },
    /// Interactive session reading commands from stdin
    Shell,
}

pub async fn handle_command(cli: Cli, mut config: ClientConfig) -> Result<()> {
    if let Some(origin) = cli.origin {
        config = config.with_origin(origin);
    }
    app_log!(info, "SkillSnap API: {}", config.api_base_url());

    let client = ServiceClient::new(&config)?;
    let mut app = App::new(client, config);
    app.probe_capabilities().await;

    match cli.command {
        Command::Status => {
            print_status(&mut app);
            Ok(())
        }
        Command::Upload { file, preview } => {
            upload(&mut app, &file).await?;
            if preview {
                app.toggle_resume_preview();
            }
            print_panel(&app, PanelId::Upload);
            print_banner(&mut app);
            Ok(())
        }
        Command::Sample { preview } => {
            app.load_sample_resume();
            if preview {
                app.toggle_resume_preview();
            }
            print_panel(&app, PanelId::Upload);
            print_banner(&mut app);
            Ok(())
        }
        Command::Recommend { resume } => {
            run_action(&mut app, Action::RecommendJobs, &resume, None).await
        }
        Command::LlmMatch { resume } => {
            run_action(&mut app, Action::LlmJobMatch, &resume, None).await
        }
        Command::SkillGap { resume, job } => {
            run_action(&mut app, Action::SkillGap, &resume, Some(&job)).await
        }
        Command::LlmSkillGap { resume, job } => {
            run_action(&mut app, Action::LlmSkillGap, &resume, Some(&job)).await
        }
        Command::Improve { resume, job } => {
            run_action(&mut app, Action::ImproveResume, &resume, Some(&job)).await
        }
        Command::Shell => shell(&mut app).await,
    }
}

async fn upload<B: Backend>(app: &mut App<B>, path: &Path) -> Result<()> {
    let file = ResumeFile::from_path(path).await?;
    if app.select_file(file).is_ok() {
        print_panel(app, PanelId::Upload);
        // Failures are already on screen; the session simply stays empty.
        let _ = app.submit_upload().await;
    }
    Ok(())
}

async fn run_action<B: Backend>(
    app: &mut App<B>,
    action: Action,
    resume: &ResumeArgs,
    job: Option<&JobArgs>,
) -> Result<()> {
    if let Some(path) = &resume.resume {
        upload(app, path).await?;
    } else if resume.sample_resume {
        app.load_sample_resume();
    }

    if let Some(job) = job {
        if let Some(path) = &job.job {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read job description: {}", path.display()))?;
            app.set_job_description(text);
        } else if job.sample_job {
            app.load_sample_job_description();
        } else if let Some(text) = &job.job_text {
            app.set_job_description(text.clone());
        }
    }

    let outcome = app.run(action).await;
    print_panel(app, action.panel());
    print_banner(app);
    outcome.map_err(|e| anyhow::anyhow!("{} failed: {}", action, e))
}

fn print_status<B: Backend>(app: &mut App<B>) {
    println!("API: {}", app.config().api_base_url());
    println!("LLM: {:?}", app.capability());
    print_controls(app);
    print_banner(app);
}

fn print_controls<B: Backend>(app: &App<B>) {
    let states = app.controls();
    for control in crate::gate::Control::ALL {
        let mark = if states.is_enabled(control) { "✓" } else { "✗" };
        println!("  {} {}", mark, control);
    }
    let editable = if states.job_description_editable { "✓" } else { "✗" };
    println!("  {} Job description", editable);
}

fn print_panel<B: Backend>(app: &App<B>, id: PanelId) {
    println!("── {} ──", id);
    match app.panel_view(id) {
        Some(view) => print!("{}", view.to_text()),
        None => println!("(empty)"),
    }
}

fn print_banner<B: Backend>(app: &mut App<B>) {
    if let Some(n) = app.notification() {
        println!("{}", banner_line(n));
    }
}

fn banner_line(n: &Notification) -> String {
    format!(
        "[{}] {}{} ({})",
        n.issued_at.format("%H:%M:%S"),
        icon_glyph(Some(n.severity.icon())),
        n.message,
        n.severity.style()
    )
}

const SHELL_HELP: &str = "commands: select <pdf> | upload | sample | sample-job | job <text> | \
recommend | llm-match | gap | llm-gap | improve | preview | controls | panels | dismiss | \
help | quit";

async fn shell<B: Backend>(app: &mut App<B>) -> Result<()> {
    println!("{}", SHELL_HELP);
    print_banner(app);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));

        let action = match cmd {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", SHELL_HELP);
                continue;
            }
            "controls" => {
                print_controls(app);
                continue;
            }
            "panels" => {
                for id in PanelId::ALL {
                    print_panel(app, id);
                }
                continue;
            }
            "dismiss" => {
                app.dismiss_notification();
                continue;
            }
            "select" => {
                match ResumeFile::from_path(Path::new(rest.trim())).await {
                    Ok(file) => {
                        let _ = app.select_file(file);
                        print_panel(app, PanelId::Upload);
                    }
                    Err(e) => println!("✗ {:#}", e),
                }
                print_banner(app);
                continue;
            }
            "upload" => {
                let _ = app.submit_upload().await;
                print_panel(app, PanelId::Upload);
                print_banner(app);
                continue;
            }
            "sample" => {
                app.load_sample_resume();
                print_panel(app, PanelId::Upload);
                print_banner(app);
                continue;
            }
            "preview" => {
                if app.toggle_resume_preview().is_some() {
                    print_panel(app, PanelId::Upload);
                }
                continue;
            }
            "sample-job" => {
                app.load_sample_job_description();
                print_banner(app);
                continue;
            }
            "job" => {
                app.set_job_description(rest);
                continue;
            }
            "recommend" => Action::RecommendJobs,
            "llm-match" => Action::LlmJobMatch,
            "gap" => Action::SkillGap,
            "llm-gap" => Action::LlmSkillGap,
            "improve" => Action::ImproveResume,
            other => {
                println!("unknown command: {}", other);
                continue;
            }
        };

        let _ = app.run(action).await;
        print_panel(app, action.panel());
        print_banner(app);
    }

    Ok(())
}
