//! Career recommendation: AI call, response normalization, fallback payload.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::career::prompts::build_career_prompt;
use crate::llm_client::{request_json, TextGenerator};
use crate::status::AiStatus;
use crate::upskill::db::UpskillBundle;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Career {
    pub name: String,
    pub justification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextStep {
    pub action: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceScore {
    /// Percentage, 0–100.
    #[serde(deserialize_with = "percentage")]
    pub overall: u8,
    pub explanation: String,
}

/// Accepts any JSON number; rounds and clamps it into 0..=100.
fn percentage<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().clamp(0.0, 100.0) as u8)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGapAnalysis {
    pub missing_skills: Vec<String>,
}

/// Response sections the model is asked for. Absent sections default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerPlan {
    pub careers: Vec<Career>,
    pub courses: Vec<Course>,
    pub next_steps: Vec<NextStep>,
    pub confidence_score: ConfidenceScore,
    pub skill_gap_analysis: SkillGapAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerRecommendation {
    #[serde(flatten)]
    pub plan: CareerPlan,
    pub upskill: UpskillBundle,
}

/// Outcome of asking the model for a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    pub plan: CareerPlan,
    pub used_fallback: bool,
}

/// Gets a career plan from the model, substituting [`fallback_plan`] on any
/// failure. The failure is recorded in `status`.
pub async fn recommend_plan(
    interests: &str,
    career_goal: &str,
    llm: &dyn TextGenerator,
    status: &AiStatus,
) -> PlanOutcome {
    let prompt = build_career_prompt(interests, career_goal);

    let parsed = match request_json(llm, status, &prompt).await {
        Ok(value) => serde_json::from_value::<CareerPlan>(value).map_err(|e| {
            let message = format!("Malformed AI response: {e}");
            status.record_parse_failed(&message);
            message
        }),
        Err(e) => Err(e.to_string()),
    };

    match parsed {
        Ok(plan) => PlanOutcome {
            plan,
            used_fallback: false,
        },
        Err(message) => {
            warn!("AI career recommendation failed, using fallback: {message}");
            PlanOutcome {
                plan: fallback_plan(),
                used_fallback: true,
            }
        }
    }
}

/// Always-valid recommendation used when the AI call or its parsing fails.
pub fn fallback_plan() -> CareerPlan {
    CareerPlan {
        careers: vec![
            Career {
                name: "Professional Specialist".to_string(),
                justification: "Flexible role allowing specialization with continuous learning."
                    .to_string(),
            },
            Career {
                name: "Junior Analyst / Associate".to_string(),
                justification: "Entry-level analytical role building real-world exposure."
                    .to_string(),
            },
            Career {
                name: "Technical Support / Operations Executive".to_string(),
                justification: "Hands-on operational role developing problem-solving skills."
                    .to_string(),
            },
        ],
        courses: vec![
            Course {
                name: "Foundational Skills Program".to_string(),
                description: "Builds technical and professional fundamentals.".to_string(),
            },
            Course {
                name: "Introduction to Technology & Systems".to_string(),
                description: "Explains how modern IT systems work.".to_string(),
            },
            Course {
                name: "Professional Communication Skills".to_string(),
                description: "Improves workplace and teamwork skills.".to_string(),
            },
        ],
        next_steps: vec![
            NextStep {
                action: "Choose a domain".to_string(),
                details: "Identify your strongest interest area.".to_string(),
            },
            NextStep {
                action: "Learn fundamentals".to_string(),
                details: "Start with beginner-friendly courses.".to_string(),
            },
            NextStep {
                action: "Practice".to_string(),
                details: "Apply learning using projects.".to_string(),
            },
        ],
        confidence_score: ConfidenceScore {
            overall: 68,
            explanation: "Good potential with scope for improvement.".to_string(),
        },
        skill_gap_analysis: SkillGapAnalysis {
            missing_skills: vec![
                "Hands-on experience".to_string(),
                "Advanced tools".to_string(),
                "Industry exposure".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubGenerator;
    use serde_json::json;

    const AI_REPLY: &str = r#"Here is your plan:
```json
{
  "careers": [{"name": "Data Analyst", "justification": "Matches SQL interest"}],
  "courses": [{"name": "SQL for Data Science", "description": "Query fundamentals"}],
  "next_steps": [{"action": "Build a portfolio", "details": "Three dashboards"}],
  "confidence_score": {"overall": 87, "explanation": "Specific and aligned"},
  "skill_gap_analysis": {"missing_skills": ["Statistics"]}
}
```"#;

    #[tokio::test]
    async fn test_parsed_plan_from_ai() {
        let status = AiStatus::new(true);
        let outcome = recommend_plan(
            "SQL",
            "data analyst",
            &StubGenerator::replying(AI_REPLY),
            &status,
        )
        .await;

        assert!(!outcome.used_fallback);
        assert_eq!(outcome.plan.careers[0].name, "Data Analyst");
        assert_eq!(outcome.plan.confidence_score.overall, 87);
        assert_eq!(outcome.plan.skill_gap_analysis.missing_skills, vec!["Statistics"]);
        assert!(status.snapshot().model_parsed);
    }

    #[tokio::test]
    async fn test_missing_sections_default_to_empty() {
        let status = AiStatus::new(true);
        let reply = r#"{"careers": [{"name": "Nurse"}]}"#;
        let outcome =
            recommend_plan("care", "nurse", &StubGenerator::replying(reply), &status).await;

        assert!(!outcome.used_fallback);
        assert_eq!(outcome.plan.careers[0].justification, "");
        assert!(outcome.plan.courses.is_empty());
        assert_eq!(outcome.plan.confidence_score, ConfidenceScore::default());
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_is_clamped() {
        let status = AiStatus::new(true);
        let reply = r#"{"confidence_score": {"overall": 140, "explanation": "x"}}"#;
        let outcome = recommend_plan("a", "b", &StubGenerator::replying(reply), &status).await;
        assert_eq!(outcome.plan.confidence_score.overall, 100);
    }

    #[tokio::test]
    async fn test_fractional_and_negative_confidence_rounded_into_range() {
        let status = AiStatus::new(true);
        let reply = r#"{"confidence_score": {"overall": 72.6, "explanation": "x"}}"#;
        let outcome = recommend_plan("a", "b", &StubGenerator::replying(reply), &status).await;
        assert_eq!(outcome.plan.confidence_score.overall, 73);

        let reply = r#"{"confidence_score": {"overall": -5}}"#;
        let outcome = recommend_plan("a", "b", &StubGenerator::replying(reply), &status).await;
        assert!(!outcome.used_fallback);
        assert_eq!(outcome.plan.confidence_score.overall, 0);
    }

    #[tokio::test]
    async fn test_unreachable_ai_uses_fallback() {
        let status = AiStatus::new(false);
        let outcome = recommend_plan("a", "b", &StubGenerator::failing(), &status).await;
        assert!(outcome.used_fallback);
        assert_eq!(outcome.plan, fallback_plan());
        assert!(status.snapshot().last_error.is_some());
    }

    #[tokio::test]
    async fn test_non_json_reply_uses_fallback() {
        let status = AiStatus::new(true);
        let outcome = recommend_plan(
            "a",
            "b",
            &StubGenerator::replying("Sorry, I can't help."),
            &status,
        )
        .await;
        assert!(outcome.used_fallback);
        let health = status.snapshot();
        assert!(health.model_responded);
        assert!(!health.model_parsed);
    }

    #[tokio::test]
    async fn test_wrong_shape_uses_fallback() {
        let status = AiStatus::new(true);
        let reply = r#"{"careers": "Doctor"}"#;
        let outcome = recommend_plan("a", "b", &StubGenerator::replying(reply), &status).await;
        assert!(outcome.used_fallback);
        assert!(!status.snapshot().model_parsed);
    }

    #[test]
    fn test_fallback_plan_shape() {
        let plan = fallback_plan();
        assert_eq!(plan.careers.len(), 3);
        assert_eq!(plan.courses.len(), 3);
        assert_eq!(plan.next_steps.len(), 3);
        assert_eq!(plan.confidence_score.overall, 68);
        assert_eq!(plan.skill_gap_analysis.missing_skills.len(), 3);
    }

    #[test]
    fn test_recommendation_serializes_flat() {
        let rec = CareerRecommendation {
            plan: fallback_plan(),
            upskill: UpskillBundle::default(),
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["confidence_score"]["overall"], json!(68));
        assert!(value["careers"].is_array());
        assert!(value["upskill"].is_object());
    }
}
