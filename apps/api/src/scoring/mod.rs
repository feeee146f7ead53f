// Competency scoring: label similarity, best-match selection, aggregate scores.
// The keyword path is pure; the optional LLM cross-check lives behind the scorer trait.

pub mod competency;
pub mod handlers;
pub mod prompts;
pub mod scorer;
pub mod similarity;
