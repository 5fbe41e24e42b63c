// Colored terminal output for review reports.
//
// main.rs delegates all result printing here. Logs go through tracing;
// this module is for what the user actually reads.

use colored::Colorize;

use crate::review::ReviewReport;

/// Display a full review: feedback, score, and missing keywords.
pub fn display_report(report: &ReviewReport) {
    println!("\n{}", "=== Gemini Feedback ===".bold());
    println!();
    println!("{}", report.feedback.trim());

    println!("\n{}", "=== Resume Score ===".bold());
    println!();
    if let Some(value) = report.score_value {
        println!("  {}", colorize_score(value));
        println!();
    }
    println!("{}", report.score.trim());

    if !report.missing_keywords.is_empty() {
        display_keyword_gap(&report.missing_keywords);
    }
}

/// Display the keywords the resume is missing.
pub fn display_keyword_gap(missing: &[String]) {
    println!("\n{}", "=== Missing Keywords ===".bold());
    println!();
    if missing.is_empty() {
        println!("  {}", "The resume covers every job description keyword.".green());
        return;
    }
    println!("  {}", format_keyword_list(missing).yellow());
}

/// Keywords joined for display: "kubernetes, deployment".
pub fn format_keyword_list(missing: &[String]) -> String {
    missing.join(", ")
}

/// Colorize a score by band.
fn colorize_score(value: u32) -> colored::ColoredString {
    let text = format!("{value}/100");
    if value >= 75 {
        text.green().bold()
    } else if value >= 50 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}
