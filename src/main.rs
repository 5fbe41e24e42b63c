use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use resume_reviewer::config::Config;
use resume_reviewer::document::{self, JobSource};
use resume_reviewer::gemini::client::GeminiClient;
use resume_reviewer::keywords::gap::{KeywordGapExtractor, DEFAULT_MISSING_LIMIT};
use resume_reviewer::output::{self, terminal};
use resume_reviewer::review::{self, ReviewRequest};

/// Resume reviewer: compare a resume against a job description with Google Gemini.
///
/// Produces categorized feedback, a score out of 100, and the job
/// description keywords the resume never mentions.
#[derive(Parser)]
#[command(name = "resume-reviewer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review a resume against a job description (calls the Gemini API)
    Review {
        #[command(flatten)]
        inputs: InputArgs,

        /// Where to save the feedback and score (default: resume_feedback.txt)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Don't save the feedback file
        #[arg(long)]
        no_save: bool,
    },

    /// Show job description keywords missing from the resume (offline)
    Keywords {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Resume file (PDF or plain text)
    #[arg(long, short)]
    resume: PathBuf,

    /// Job description file (PDF or plain text). Reads stdin if neither
    /// --job nor --job-text is given.
    #[arg(long, short, conflicts_with = "job_text")]
    job: Option<PathBuf>,

    /// Job description pasted as a string
    #[arg(long)]
    job_text: Option<String>,

    /// Max missing keywords to show (default: 10)
    #[arg(long, default_value_t = DEFAULT_MISSING_LIMIT)]
    limit: usize,
}

impl InputArgs {
    fn job_source(&self) -> Result<JobSource> {
        match (&self.job, &self.job_text) {
            (Some(path), _) => Ok(JobSource::File(path.clone())),
            (None, Some(text)) => Ok(JobSource::Text(text.clone())),
            (None, None) => {
                if std::io::stdin().is_terminal() {
                    anyhow::bail!(
                        "No job description given. Pass --job <FILE>, --job-text <TEXT>, \
                         or pipe it on stdin."
                    );
                }
                Ok(JobSource::Stdin)
            }
        }
    }

    /// Read both documents into a review request.
    fn load(&self) -> Result<ReviewRequest> {
        let resume_text = document::extract_text(&self.resume)?;
        let job_description = self.job_source()?.load()?;
        let request = ReviewRequest::new(resume_text, job_description);
        request.validate()?;
        Ok(request)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays clean for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resume_reviewer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Review {
            inputs,
            output: output_path,
            no_save,
        } => {
            let config = Config::load()?;
            config.require_gemini()?;

            let request = inputs.load()?;
            let client = GeminiClient::new(
                &config.gemini_api_key,
                &config.gemini_base_url,
                &config.gemini_model,
            )?;
            let extractor = KeywordGapExtractor::default().with_limit(inputs.limit);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {msg}")
                    .expect("valid template"),
            );
            spinner.set_message("Analyzing your resume using Gemini...");
            spinner.enable_steady_tick(Duration::from_millis(120));

            let result = review::run(&client, &request, &extractor).await;
            spinner.finish_and_clear();
            let report = result?;

            terminal::display_report(&report);

            if !no_save {
                let path = output_path.unwrap_or(config.output_path);
                let written = output::report::save_feedback(&report, &path)?;
                println!(
                    "\n{}",
                    format!("Feedback saved to: {}", written.display()).bold()
                );
            }
        }

        Commands::Keywords { inputs } => {
            let request = inputs.load()?;
            let extractor = KeywordGapExtractor::default().with_limit(inputs.limit);

            let missing = extractor.missing(&request.resume_text, &request.job_description);
            info!(missing = missing.len(), "Keyword gap computed");

            terminal::display_keyword_gap(&missing);
        }
    }

    Ok(())
}
