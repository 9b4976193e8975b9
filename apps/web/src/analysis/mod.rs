// Analysis orchestration: uploads in, structured report out.
// Rendering (HTML/JSON) happens in the handlers; nothing here touches HTTP.

pub mod handlers;

use anyhow::Result;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::demo::demo_upload;
use crate::extraction::{extract_or_report, DocumentRole, ExtractionNotice, Upload};
use crate::skills::{score_match, MatchMode, SkillExtractor, SkillSet, SkillVocabulary};

// ────────────────────────────────────────────────────────────────────────────
// Request / report types
// ────────────────────────────────────────────────────────────────────────────

/// One form submission. Absent files are `None`.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub resume: Option<Upload>,
    pub job_description: Option<Upload>,
    /// Replace the resume with the generated demo document.
    pub use_demo: bool,
}

/// Orchestrator-level failures. Each one replaces the whole report with a
/// single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Upload both a resume and a job description.")]
    MissingInput,

    #[error("Failed to load text from one or both files.")]
    EmptyExtraction,
}

impl AnalysisError {
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::MissingInput => "MISSING_INPUT",
            AnalysisError::EmptyExtraction => "EMPTY_EXTRACTION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    AwaitingUploads,
    AnalysisReady,
    ExtractionFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportError {
    pub code: String,
    pub message: String,
}

impl From<AnalysisError> for ReportError {
    fn from(e: AnalysisError) -> Self {
        ReportError {
            code: e.code().to_string(),
            message: e.to_string(),
        }
    }
}

/// Skills detected on each side plus their overlap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillComparison {
    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
    pub matched: SkillSet,
    pub missing: SkillSet,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub state: AnalysisState,
    pub match_mode: MatchMode,
    /// Per-document extraction problems, shown even when analysis fails.
    pub notices: Vec<ExtractionNotice>,
    pub error: Option<ReportError>,
    pub comparison: Option<SkillComparison>,
}

impl AnalysisReport {
    fn new(analysis_id: Uuid, match_mode: MatchMode, state: AnalysisState) -> Self {
        AnalysisReport {
            analysis_id,
            state,
            match_mode,
            notices: Vec::new(),
            error: None,
            comparison: None,
        }
    }

    /// Report for a page that has not been submitted yet.
    pub fn awaiting(match_mode: MatchMode) -> Self {
        Self::new(Uuid::new_v4(), match_mode, AnalysisState::AwaitingUploads)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestrator
// ────────────────────────────────────────────────────────────────────────────

/// Runs one analysis pass.
///
/// awaiting_uploads → extracting → (analysis_ready | extraction_failed).
/// Extraction problems never abort the pass: each document is processed on
/// its own and failures surface as notices. Errors returned here are
/// internal (the demo document could not be built).
pub async fn run_analysis(
    request: AnalysisRequest,
    vocabulary: &SkillVocabulary,
    extractor: &dyn SkillExtractor,
) -> Result<AnalysisReport> {
    let analysis_id = Uuid::new_v4();
    let span = tracing::info_span!("analysis", %analysis_id);

    async move {
        let mode = extractor.mode();

        let resume = if request.use_demo {
            Some(demo_upload()?)
        } else {
            request.resume
        };

        let (resume, job) = match (resume, request.job_description) {
            (Some(r), Some(j)) => (r, j),
            _ => {
                info!("Analysis skipped: missing upload");
                let mut report = AnalysisReport::new(analysis_id, mode, AnalysisState::AwaitingUploads);
                report.error = Some(AnalysisError::MissingInput.into());
                return Ok(report);
            }
        };

        let resume_extraction = extract_or_report(DocumentRole::Resume, &resume).await;
        let job_extraction = extract_or_report(DocumentRole::JobDescription, &job).await;

        let notices: Vec<ExtractionNotice> = [&resume_extraction, &job_extraction]
            .into_iter()
            .filter_map(|e| e.notice.clone())
            .collect();

        if resume_extraction.text.is_empty() || job_extraction.text.is_empty() {
            info!(notices = notices.len(), "Analysis failed: empty extraction");
            let mut report = AnalysisReport::new(analysis_id, mode, AnalysisState::ExtractionFailed);
            report.notices = notices;
            report.error = Some(AnalysisError::EmptyExtraction.into());
            return Ok(report);
        }

        let resume_skills = extractor.extract(&resume_extraction.text, vocabulary);
        let job_skills = extractor.extract(&job_extraction.text, vocabulary);
        let result = score_match(&resume_skills, &job_skills);

        info!(
            resume_skills = resume_skills.len(),
            job_skills = job_skills.len(),
            matched = result.matched.len(),
            score = result.score,
            "Analysis complete"
        );

        let mut report = AnalysisReport::new(analysis_id, mode, AnalysisState::AnalysisReady);
        report.notices = notices;
        report.comparison = Some(SkillComparison {
            resume_skills,
            job_skills,
            matched: result.matched,
            missing: result.missing,
            score: result.score,
        });
        Ok(report)
    }
    .instrument(span)
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
