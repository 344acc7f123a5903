// Analysis engine: tokenization, keyword extraction, formatting heuristics,
// keyword matching, the deterministic ATS report, and the orchestrator that
// prefers the AI model and degrades to the local pipeline.
// All model calls go through llm_client; no direct HTTP calls here.

pub mod analyzer;
pub mod ats_report;
pub mod fallback;
pub mod formatting;
pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod schema;
pub mod tokenizer;
