//! Axum route handlers for the upload page and the Analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::analysis::{run_analysis, AnalysisReport, AnalysisRequest};
use crate::demo::{generate_demo_resume, DEMO_FILE_NAME};
use crate::errors::AppError;
use crate::extraction::Upload;
use crate::render::render_page;
use crate::skills::{MatchMode, SkillVocabulary};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub match_mode: MatchMode,
    pub terms: SkillVocabulary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Upload page with no report yet.
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&AnalysisReport::awaiting(state.extractor.mode())))
}

/// POST /analyze
///
/// Form target: runs the analysis and re-renders the page with the report.
pub async fn handle_analyze_page(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, AppError> {
    let report = analyze(&state, multipart).await?;
    Ok(Html(render_page(&report)))
}

/// POST /api/v1/analyze
///
/// Same analysis as the form, returned as JSON. Extraction failures are part
/// of the report (HTTP 200), not HTTP errors.
pub async fn handle_analyze_json(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = analyze(&state, multipart).await?;
    Ok(Json(report))
}

/// GET /api/v1/demo-resume
pub async fn handle_demo_resume() -> Result<impl IntoResponse, AppError> {
    let pdf = generate_demo_resume()?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DEMO_FILE_NAME}\""),
            ),
        ],
        pdf,
    ))
}

/// GET /api/v1/vocabulary
pub async fn handle_vocabulary(State(state): State<AppState>) -> Json<VocabularyResponse> {
    Json(VocabularyResponse {
        match_mode: state.extractor.mode(),
        terms: state.vocabulary.as_ref().clone(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart parsing
// ────────────────────────────────────────────────────────────────────────────

async fn analyze(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AnalysisReport, AppError> {
    let request = read_analysis_request(multipart?).await?;
    let report = run_analysis(request, &state.vocabulary, state.extractor.as_ref()).await?;
    Ok(report)
}

/// Reads the `resume`, `job_description` and `use_demo` form fields.
/// A file input left empty arrives as a part with no file name and no bytes;
/// it is treated as absent.
async fn read_analysis_request(mut multipart: Multipart) -> Result<AnalysisRequest, AppError> {
    let mut request = AnalysisRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" | "job_description" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .filter(|n| !n.is_empty());
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;

                if file_name.is_none() && bytes.is_empty() {
                    continue;
                }

                let upload = Upload {
                    file_name,
                    content_type,
                    bytes,
                };
                if name == "resume" {
                    request.resume = Some(upload);
                } else {
                    request.job_description = Some(upload);
                }
            }
            "use_demo" => {
                let value = field.text().await?;
                request.use_demo = is_checked(&value);
            }
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(request)
}

fn is_checked(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1"
    )
}
