//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, error};

use crate::errors::AppError;
use crate::evaluation::dispatch::{run_action, ActionOutcome, FailureCause};
use crate::evaluation::prompts::EvaluationKind;
use crate::state::AppState;

const RESPONSE_HEADING: &str = "The Response is";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Decoded multipart form for one evaluation action.
#[derive(Debug, Default)]
pub struct EvaluationForm {
    pub job_description: String,
    /// `None` when no file part was sent, or it was empty.
    pub resume: Option<Bytes>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationResponse {
    Ok {
        action: EvaluationKind,
        heading: &'static str,
        response: String,
    },
    Warning {
        message: String,
    },
    Error {
        cause: FailureCause,
        message: String,
    },
}

impl IntoResponse for ActionOutcome {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ActionOutcome::Response { kind, text } => (
                StatusCode::OK,
                EvaluationResponse::Ok {
                    action: kind,
                    heading: RESPONSE_HEADING,
                    response: text,
                },
            ),
            ActionOutcome::Warning { message } => {
                (StatusCode::BAD_REQUEST, EvaluationResponse::Warning { message })
            }
            ActionOutcome::Failure { cause, message } => {
                error!("Evaluation error: {message}");
                let status = match cause {
                    FailureCause::Document => StatusCode::UNPROCESSABLE_ENTITY,
                    FailureCause::Remote => StatusCode::BAD_GATEWAY,
                };
                (status, EvaluationResponse::Error { cause, message })
            }
        };

        (status, Json(body)).into_response()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart decoding
// ────────────────────────────────────────────────────────────────────────────

/// Reads the `job_description` and `resume` parts; other parts are ignored.
pub async fn read_form(mut multipart: Multipart) -> Result<EvaluationForm, AppError> {
    let mut form = EvaluationForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("job_description") => {
                form.job_description = field.text().await?;
            }
            Some("resume") => {
                if let Some(content_type) = field.content_type() {
                    if content_type != "application/pdf" {
                        return Err(AppError::Validation(format!(
                            "resume must be a PDF, got '{content_type}'"
                        )));
                    }
                }
                let data = field.bytes().await?;
                form.resume = (!data.is_empty()).then_some(data);
            }
            other => debug!("Ignoring multipart field {other:?}"),
        }
    }

    Ok(form)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn handle_action(
    state: AppState,
    kind: EvaluationKind,
    multipart: Multipart,
) -> Result<ActionOutcome, AppError> {
    let form = read_form(multipart).await?;
    Ok(run_action(
        kind,
        &form.job_description,
        form.resume,
        state.generator.as_ref(),
    )
    .await)
}

/// POST /api/v1/evaluations/review
///
/// "Tell me about the resume": qualitative fit review.
pub async fn handle_review(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<ActionOutcome, AppError> {
    handle_action(state, EvaluationKind::ReviewFit, multipart).await
}

/// POST /api/v1/evaluations/match
pub async fn handle_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<ActionOutcome, AppError> {
    handle_action(state, EvaluationKind::PercentageMatch, multipart).await
}
