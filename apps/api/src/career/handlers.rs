//! Axum route handler for the career recommendation API.

use axum::{extract::State, Json};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::audit::{AuditEvent, AuditKind};
use crate::career::recommendation::{recommend_plan, CareerRecommendation};
use crate::errors::AppError;
use crate::state::AppState;
use crate::upskill::build_upskill;

/// Both fields are optional; `null` and absent read as empty text.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CareerRequest {
    pub interests: Option<String>,
    pub career_goal: Option<String>,
}

impl CareerRequest {
    /// Parses a JSON body regardless of its Content-Type. An empty body is an
    /// empty request.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))
    }
}

#[derive(Debug, Serialize)]
pub struct CareerResponse {
    pub recommendation: CareerRecommendation,
}

/// POST /career
///
/// Answers 200 for any JSON object: AI failures fall back to the static plan.
pub async fn handle_career(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CareerResponse>, AppError> {
    let request = CareerRequest::from_body(&body)?;
    let interests = request.interests.unwrap_or_default();
    let career_goal = request.career_goal.unwrap_or_default();
    let user_text = format!("{interests} {career_goal}");

    let outcome = recommend_plan(
        &interests,
        &career_goal,
        state.llm.as_ref(),
        &state.ai_status,
    )
    .await;
    let (field, upskill) =
        build_upskill(&user_text, &state.upskill_db, state.videos.as_ref()).await;

    state
        .audit
        .dispatch(AuditEvent::new(AuditKind::CareerRecommendation {
            field: field.key().to_string(),
            used_fallback: outcome.used_fallback,
        }));

    Ok(Json(CareerResponse {
        recommendation: CareerRecommendation {
            plan: outcome.plan,
            upskill,
        },
    }))
}
