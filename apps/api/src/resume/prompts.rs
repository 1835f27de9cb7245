// Resume analysis LLM prompt templates.

/// Characters of normalized resume text sent to the model.
pub const RESUME_PROMPT_CHAR_LIMIT: usize = 3000;

pub const RESUME_ANALYSIS_PROMPT: &str = r#"You are an expert resume reviewer and career coach.
Analyze the following resume and provide detailed feedback in JSON format.

Resume Content:
{resume_text}

Provide analysis in this EXACT JSON format:
{
  "strengths": ["strength 1", "strength 2", "strength 3"],
  "weaknesses": ["weakness 1", "weakness 2", "weakness 3"],
  "missing_keywords": ["keyword 1", "keyword 2", "keyword 3"],
  "formatting_feedback": "Brief feedback on structure and formatting",
  "action_items": [
    {"priority": "high", "item": "specific action"},
    {"priority": "medium", "item": "specific action"},
    {"priority": "low", "item": "specific action"}
  ],
  "overall_impression": "Brief overall assessment"
}

Be specific, actionable, and constructive."#;

pub fn build_resume_prompt(clean_text: &str) -> String {
    let excerpt: String = clean_text.chars().take(RESUME_PROMPT_CHAR_LIMIT).collect();
    format!(
        "{}\n\n{}",
        RESUME_ANALYSIS_PROMPT.replace("{resume_text}", &excerpt),
        crate::llm_client::prompts::JSON_ONLY_INSTRUCTION
    )
}
