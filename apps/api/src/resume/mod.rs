// Resume analysis: text extraction, normalization, keyword scan, ATS scoring,
// AI reviewer feedback. All LLM calls go through llm_client.

pub mod analysis;
pub mod ats;
pub mod extract;
pub mod handlers;
pub mod keywords;
pub mod normalize;
pub mod prompts;
