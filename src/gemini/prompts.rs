// Prompt templates for the two review calls.

/// Prompt asking for categorized, bullet-pointed feedback.
pub fn feedback_prompt(resume: &str, job_description: &str) -> String {
    format!(
        r#"
You are a professional resume reviewer and job coach.

Compare the resume with the job description and provide bullet-pointed feedback under the following categories:

1. ✅ Matching strengths
2. ⚠️ Weak points or missing skills
3. 🛠️ Suggestions to improve the resume for this job
4. 💡 Extra ways to make it stand out (keywords, phrasing, formatting)

Resume:
"""{resume}"""

Job Description:
"""{job_description}"""
"#
    )
}

/// Prompt asking for a score out of 100 in a fixed two-line format.
pub fn score_prompt(resume: &str, job_description: &str) -> String {
    format!(
        r#"
You are a resume evaluator. Based on this resume and job description, give a score out of 100 with a short reason.

Resume:
"""{resume}"""

Job Description:
"""{job_description}"""

Output format:
Score: 88/100
Reason: ...
"#
    )
}
