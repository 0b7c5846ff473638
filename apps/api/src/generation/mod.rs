// Text generation: language selection, prompt templates, the generation
// pipeline and its process-lifetime counter.
// All provider calls go through llm_client.

pub mod counter;
pub mod generator;
pub mod handlers;
pub mod language;
pub mod prompts;
