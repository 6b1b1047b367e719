//! Axum route handlers for the matcher form and its JSON twin.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::matching::page::{render_page, PageView};
use crate::matching::pipeline::{run_match, MatchError, MatchReport, RESULTS_MESSAGE};
use crate::matching::upload::UploadedFile;
use crate::state::AppState;

/// Decoded multipart submission.
#[derive(Debug, Default)]
pub struct MatchForm {
    pub job_description: String,
    pub files: Vec<UploadedFile>,
}

/// Collects `job_description` and every `resumes` part. Other fields are ignored.
pub async fn read_form(mut multipart: Multipart) -> Result<MatchForm, AppError> {
    let mut form = MatchForm::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => form.job_description = field.text().await?,
            "resumes" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                form.files.push(UploadedFile { filename, bytes });
            }
            _ => {}
        }
    }
    Ok(form)
}

async fn run_blocking(
    state: &AppState,
    form: MatchForm,
) -> Result<Result<MatchReport, MatchError>, AppError> {
    let upload_dir = state.config.upload_dir.clone();
    let policy = state.config.skip_policy;
    info!(
        "Matching {} uploaded file(s) with policy {policy}",
        form.files.len()
    );
    tokio::task::spawn_blocking(move || {
        run_match(&form.job_description, &form.files, &upload_dir, policy)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("match task failed: {e}")))
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// POST /matcher
///
/// Always answers with the page: the top résumés, a user-facing message, or
/// the client-safe text of whatever went wrong under its HTTP status.
pub async fn handle_match_page(
    State(state): State<AppState>,
    multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let outcome = match read_form(multipart).await {
        Ok(form) => run_blocking(&state, form).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(Ok(report)) => (
            StatusCode::OK,
            Html(render_page(&PageView {
                message: Some(RESULTS_MESSAGE),
                results: &report.results,
                warnings: &report.warnings,
            })),
        ),
        Ok(Err(e)) if e.is_user_facing() => message_page(StatusCode::OK, &e.to_string()),
        Ok(Err(e)) => error_page(e.into()),
        Err(e) => error_page(e),
    }
}

fn error_page(err: AppError) -> (StatusCode, Html<String>) {
    let (status, _, message) = err.parts();
    message_page(status, &message)
}

fn message_page(status: StatusCode, message: &str) -> (StatusCode, Html<String>) {
    let page = render_page(&PageView {
        message: Some(message),
        ..PageView::default()
    });
    (status, Html(page))
}

/// POST /api/v1/match
pub async fn handle_match_json(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let form = read_form(multipart).await?;
    let report = run_blocking(&state, form).await??;
    Ok(Json(report))
}
