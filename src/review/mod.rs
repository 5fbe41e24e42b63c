// Review pipeline — one resume, one job description, one report.
//
// Runs the feedback prompt, then the score prompt, then the local keyword
// gap. The model calls are sequential; the keyword gap needs no network.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::info;

use crate::gemini::prompts::{feedback_prompt, score_prompt};
use crate::gemini::traits::ReviewModel;
use crate::keywords::gap::KeywordGapExtractor;

// "Score: 88/100", "**Score:** 88 / 100", "score:88/100"
static SCORE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bscore\b\s*\**\s*:\s*\**\s*(\d{1,3})\s*/\s*100\b")
        .expect("score pattern is valid")
});

/// The two texts a review compares.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub resume_text: String,
    pub job_description: String,
}

impl ReviewRequest {
    pub fn new(resume_text: impl Into<String>, job_description: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            job_description: job_description.into(),
        }
    }

    /// Both texts must have some content.
    pub fn validate(&self) -> Result<()> {
        if self.resume_text.trim().is_empty() || self.job_description.trim().is_empty() {
            anyhow::bail!("Please provide both a resume and a job description.");
        }
        Ok(())
    }
}

/// Everything a review produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewReport {
    /// Categorized feedback, as markdown from the model
    pub feedback: String,
    /// The model's score reply, verbatim
    pub score: String,
    /// The 0-100 value from the score reply, when it followed the format
    pub score_value: Option<u32>,
    /// Job description keywords the resume never uses
    pub missing_keywords: Vec<String>,
}

impl ReviewReport {
    /// Text saved to the feedback file: feedback, blank line, score.
    pub fn download_text(&self) -> String {
        format!("{}\n\n{}", self.feedback, self.score)
    }
}

/// Run a full review against `model`.
pub async fn run(
    model: &dyn ReviewModel,
    request: &ReviewRequest,
    extractor: &KeywordGapExtractor,
) -> Result<ReviewReport> {
    request.validate()?;

    info!(
        model = model.name(),
        resume_chars = request.resume_text.chars().count(),
        job_chars = request.job_description.chars().count(),
        "Starting review"
    );

    let feedback = model
        .generate(&feedback_prompt(&request.resume_text, &request.job_description))
        .await
        .context("Feedback request failed")?;

    let score = model
        .generate(&score_prompt(&request.resume_text, &request.job_description))
        .await
        .context("Score request failed")?;

    let score_value = parse_score(&score);
    let missing_keywords = extractor.missing(&request.resume_text, &request.job_description);

    info!(
        score = ?score_value,
        missing = missing_keywords.len(),
        "Review complete"
    );

    Ok(ReviewReport {
        feedback,
        score,
        score_value,
        missing_keywords,
    })
}

/// Pull the numeric score out of a `Score: NN/100` line.
///
/// Returns `None` when the reply doesn't follow the format or the value is
/// above 100.
pub fn parse_score(text: &str) -> Option<u32> {
    let caps = SCORE_LINE.captures(text)?;
    let value: u32 = caps.get(1)?.as_str().parse().ok()?;
    (value <= 100).then_some(value)
}
