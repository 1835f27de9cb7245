// Career recommendation LLM prompt templates.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

pub const CAREER_PROMPT_TEMPLATE: &str = r#"You are a backend API.
Give output in at least 20-30 words per field.
The confidence_score.overall must be a number between 0 and 100 (percentage).
Calculate the confidence score based on:
1. Input Detail (30%): Higher if interests/goals are specific (e.g., "Python backend" > "coding").
2. Alignment (40%): Higher if interests match the career goal.
3. Feasibility (30%): Higher if the path is realistic.
Return a precise integer (e.g., 87, 62, 95). Do NOT default to 65.
Do Not use 1-5 or 1-10 scales.
{
  "careers":[{"name":"","justification":""}],
  "courses":[{"name":"","description":""}],
  "next_steps":[{"action":"","details":""}],
  "confidence_score":{"overall":0,"explanation":""},
  "skill_gap_analysis":{"missing_skills":[]}
}

User interests: {interests}
Career goal: {career_goal}"#;

pub fn build_career_prompt(interests: &str, career_goal: &str) -> String {
    format!(
        "{}\n\n{}",
        JSON_ONLY_INSTRUCTION,
        CAREER_PROMPT_TEMPLATE
            .replace("{interests}", interests)
            .replace("{career_goal}", career_goal)
    )
}
