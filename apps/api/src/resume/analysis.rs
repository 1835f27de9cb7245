//! Resume analysis pipeline: extract → normalize → keyword scan → ATS score,
//! followed by AI feedback on the cleaned text.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::{request_json, TextGenerator};
use crate::resume::ats::{self, ScoreBreakdown};
use crate::resume::extract::{extract, ExtractionError};
use crate::resume::keywords::{analyze, KeywordMatches};
use crate::resume::normalize::normalize;
use crate::resume::prompts::build_resume_prompt;
use crate::status::AiStatus;

/// Deterministic part of the analysis; no network involved.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeScan {
    pub clean_text: String,
    pub keywords: KeywordMatches,
    pub breakdown: ScoreBreakdown,
    pub ats_score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionItem {
    pub priority: String,
    pub item: String,
}

/// Reviewer feedback produced by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeFeedback {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub formatting_feedback: String,
    pub action_items: Vec<ActionItem>,
    pub overall_impression: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysisResponse {
    pub ats_score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub keywords_found: KeywordMatches,
    pub analysis: Option<ResumeFeedback>,
    pub analysis_error: Option<String>,
}

/// Runs the CPU-bound part of the pipeline on raw upload bytes.
pub fn scan_document(bytes: &[u8], filename: &str) -> Result<ResumeScan, ExtractionError> {
    let text = extract(bytes, filename)?;
    Ok(scan_text(&text))
}

pub fn scan_text(text: &str) -> ResumeScan {
    let clean_text = normalize(text);
    let keywords = analyze(&clean_text);
    let breakdown = ats::breakdown(&clean_text, &keywords);
    let ats_score = ats::score(&clean_text, &keywords);
    ResumeScan {
        clean_text,
        keywords,
        breakdown,
        ats_score,
    }
}

/// Asks the model for feedback. Failures are reported in `analysis_error`
/// and the AI health record, never as an error.
pub async fn review(scan: ResumeScan, llm: &dyn TextGenerator, status: &AiStatus) -> ResumeAnalysisResponse {
    let prompt = build_resume_prompt(&scan.clean_text);

    let (analysis, analysis_error) = match request_json(llm, status, &prompt).await {
        Ok(value) => match serde_json::from_value::<ResumeFeedback>(value) {
            Ok(feedback) => (Some(feedback), None),
            Err(e) => {
                let message = format!("Malformed AI response: {e}");
                status.record_parse_failed(&message);
                (None, Some(message))
            }
        },
        Err(e) => {
            warn!("Resume AI feedback unavailable: {e}");
            (None, Some(e.to_string()))
        }
    };

    info!(
        "Resume analyzed: ats_score={}, keywords={}, ai_feedback={}",
        scan.ats_score,
        scan.keywords.total(),
        analysis.is_some()
    );

    ResumeAnalysisResponse {
        ats_score: scan.ats_score,
        score_breakdown: scan.breakdown,
        keywords_found: scan.keywords,
        analysis,
        analysis_error,
    }
}
