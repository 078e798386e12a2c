// Instruction templates for the two evaluation actions.
// The résumé and job description are appended by `requester::build_prompt`.

use serde::{Deserialize, Serialize};

/// Qualitative review of how the résumé fits the role.
pub const REVIEW_FIT_PROMPT: &str = "\
You are an experienced Technical Human Resource Manager, your task is to review the provided resume against the job description.
Please share your professional evaluation on whether the candidate's profile aligns with the role.
Highlight the strengths and weaknesses of the applicant in relation to the specified job requirements.";

/// Percentage match, then missing keywords, then final thoughts.
pub const PERCENTAGE_MATCH_PROMPT: &str = "\
You are a skilled ATS (Applicant Tracking System) scanner with a deep understanding of data science and ATS functionality.
Your task is to evaluate the resume against the provided job description.
Give me the percentage match if the resume matches the job description. First, the output should come as a percentage, then keywords missing, and lastly, final thoughts.";

/// Which evaluation the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationKind {
    ReviewFit,
    PercentageMatch,
}

impl EvaluationKind {
    pub fn template(self) -> &'static str {
        match self {
            EvaluationKind::ReviewFit => REVIEW_FIT_PROMPT,
            EvaluationKind::PercentageMatch => PERCENTAGE_MATCH_PROMPT,
        }
    }
}
