// Career recommendation: AI-generated plan merged with the upskill bundle.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod recommendation;
