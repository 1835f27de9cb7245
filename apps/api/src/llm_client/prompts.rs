// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Instruction appended to every prompt that expects a JSON reply.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Return ONLY raw JSON. \
Do NOT include any text outside the JSON object. \
Do NOT use markdown code fences.";
