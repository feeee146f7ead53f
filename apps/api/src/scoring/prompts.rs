// Prompt constants for the optional LLM cross-check of keyword scores.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System prompt for fit validation.
pub const FIT_VALIDATION_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Fit validation prompt. Replace: {competencies}, {keyword_score}, {gaps}, {resume_text}
pub const FIT_VALIDATION_PROMPT_TEMPLATE: &str = r#"You are reviewing an automated resume screen.

REQUIRED COMPETENCIES:
{competencies}

A keyword matcher scored this candidate {keyword_score}/100 and reported these gaps:
{gaps}

Read the resume below and give your own independent estimate of how well the candidate
covers the required competencies. Credit equivalent or clearly transferable skills the
keyword matcher may have missed. Do NOT reward skills that are not evidenced in the text.

Return a JSON object with this EXACT schema:
{
  "fit_score": 72,
  "rationale": "One or two sentences."
}

`fit_score` must be an integer from 0 to 100.

RESUME:
{resume_text}"#;
