// Composition tests — verifying that the modules chain together correctly.
//
// These tests exercise the data flow:
//   document -> review (canned model) -> keyword gap -> saved feedback file
// without any network calls. Fixture files are written under the system
// temp directory.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use resume_reviewer::document::{extract_text, JobSource};
use resume_reviewer::gemini::traits::ReviewModel;
use resume_reviewer::keywords::gap::KeywordGapExtractor;
use resume_reviewer::output::report::save_feedback;
use resume_reviewer::output::terminal::format_keyword_list;
use resume_reviewer::review::{self, ReviewRequest};

/// Answers feedback prompts and score prompts with fixed text.
struct EchoModel;

#[async_trait]
impl ReviewModel for EchoModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if prompt.contains("resume evaluator") {
            Ok("Score: 72/100\nReason: Missing cloud tooling.".to_string())
        } else {
            Ok("1. ✅ Strong Rust experience\n2. ⚠️ No Kubernetes".to_string())
        }
    }
}

fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("resume_reviewer_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn files_to_saved_feedback() {
    let dir = fixture_dir("composition_files");
    let resume_path = dir.join("resume.txt");
    let job_path = dir.join("job.md");
    std::fs::write(
        &resume_path,
        "Jane Doe\nSystems engineer. Rust, Tokio, PostgreSQL.\n",
    )
    .unwrap();
    std::fs::write(
        &job_path,
        "Seeking a systems engineer fluent in Rust and Kubernetes.\nTerraform a plus.\n",
    )
    .unwrap();

    let resume_text = extract_text(&resume_path).unwrap();
    let job_description = JobSource::File(job_path).load().unwrap();
    let request = ReviewRequest::new(resume_text, job_description);

    let report = review::run(&EchoModel, &request, &KeywordGapExtractor::default())
        .await
        .unwrap();

    assert_eq!(report.score_value, Some(72));
    assert_eq!(
        report.missing_keywords,
        vec!["seeking", "fluent", "kubernetes", "terraform"]
    );
    assert_eq!(
        format_keyword_list(&report.missing_keywords),
        "seeking, fluent, kubernetes, terraform"
    );

    let out = dir.join("out/resume_feedback.txt");
    save_feedback(&report, &out).unwrap();
    let saved = std::fs::read_to_string(&out).unwrap();
    assert!(saved.starts_with("1. ✅ Strong Rust experience"));
    assert!(saved.ends_with("Score: 72/100\nReason: Missing cloud tooling."));
    assert!(saved.contains("No Kubernetes\n\nScore: 72/100"));
}

#[tokio::test]
async fn pasted_job_text_matches_file_input() {
    let dir = fixture_dir("composition_pasted");
    let job = "Backend developer with GraphQL and Kafka experience";
    let job_path = dir.join("job.txt");
    std::fs::write(&job_path, job).unwrap();

    let from_file = JobSource::File(job_path).load().unwrap();
    let from_text = JobSource::Text(job.to_string()).load().unwrap();

    let extractor = KeywordGapExtractor::default();
    let resume = "Backend developer, Kafka streams";
    assert_eq!(
        extractor.missing(resume, &from_file),
        extractor.missing(resume, &from_text)
    );
    assert_eq!(extractor.missing(resume, &from_text), vec!["graphql", "experience"]);
}

#[tokio::test]
async fn resume_covering_everything_has_no_gap() {
    let job = "Python engineer";
    let request = ReviewRequest::new("Python engineer with ten years of python", job);

    let report = review::run(&EchoModel, &request, &KeywordGapExtractor::default())
        .await
        .unwrap();
    assert!(report.missing_keywords.is_empty());
}
