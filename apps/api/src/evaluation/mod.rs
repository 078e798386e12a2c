// Résumé evaluation: prompt templates, the requester, action dispatch and HTTP handlers.
// All model calls go through llm_client::TextGenerator.

pub mod dispatch;
pub mod handlers;
pub mod prompts;
pub mod requester;
