//! Evaluation Requester — assembles the prompt and makes the single model call.

use tracing::info;

use crate::errors::EvaluationError;
use crate::llm_client::TextGenerator;

/// Joins the three prompt sections in fixed order, separated by blank lines.
/// Inputs are used as-is; either may be empty.
pub fn build_prompt(template: &str, job_description: &str, resume_text: &str) -> String {
    format!("{template}\n\nJob Description:\n{job_description}\n\nResume Content:\n{resume_text}")
}

/// Sends one prompt to the model and returns its text unmodified.
pub async fn evaluate(
    generator: &dyn TextGenerator,
    job_description: &str,
    resume_text: &str,
    template: &str,
) -> Result<String, EvaluationError> {
    let prompt = build_prompt(template, job_description, resume_text);

    info!(
        "Requesting evaluation from {} ({} prompt chars)",
        generator.model(),
        prompt.len()
    );

    generator
        .generate(&prompt)
        .await
        .map_err(|e| EvaluationError::RemoteEvaluation(e.to_string()))
}
