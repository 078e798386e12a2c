//! Action Dispatch — one linear run per user action with a single error boundary.

use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::EvaluationError;
use crate::evaluation::prompts::EvaluationKind;
use crate::evaluation::requester::evaluate;
use crate::extraction::extract_first_page_blocking;
use crate::llm_client::TextGenerator;

pub const UPLOAD_WARNING: &str = "Please upload the resume";

/// Which step an action failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCause {
    Document,
    Remote,
}

/// The single user-visible result of one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Response { kind: EvaluationKind, text: String },
    Warning { message: String },
    Failure { cause: FailureCause, message: String },
}

/// Runs extraction then evaluation for `kind`.
///
/// A missing document short-circuits to a warning before any model call.
pub async fn run_action(
    kind: EvaluationKind,
    job_description: &str,
    document: Option<Bytes>,
    generator: &dyn TextGenerator,
) -> ActionOutcome {
    match try_action(kind, job_description, document, generator).await {
        Ok(text) => {
            info!("{kind:?} action completed ({} chars)", text.len());
            ActionOutcome::Response { kind, text }
        }
        Err(EvaluationError::MissingInput) => ActionOutcome::Warning {
            message: UPLOAD_WARNING.to_string(),
        },
        Err(e) => {
            let cause = match &e {
                EvaluationError::RemoteEvaluation(_) => FailureCause::Remote,
                _ => FailureCause::Document,
            };
            ActionOutcome::Failure {
                cause,
                message: format!("Error: {e}"),
            }
        }
    }
}

async fn try_action(
    kind: EvaluationKind,
    job_description: &str,
    document: Option<Bytes>,
    generator: &dyn TextGenerator,
) -> Result<String, EvaluationError> {
    let resume_text = extract_first_page_blocking(document).await?;
    evaluate(generator, job_description, &resume_text, kind.template()).await
}
