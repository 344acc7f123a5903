//! AI-or-fallback orchestrator. Each operation makes exactly one oracle
//! attempt, validates the response shape, and degrades to the deterministic
//! fallback when anything goes wrong. None of these operations can fail.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::analysis::fallback::{
    fallback_ats_analysis, fallback_resume_analysis, fallback_validity,
};
use crate::analysis::schema::{
    extract_json_object, AtsAnalysis, ResumeAnalysis, ResumeValidity, ValidityVerdict,
};
use crate::llm_client::prompts::{
    ATS_CHECK_PROMPT, RESUME_ANALYSIS_PROMPT, RESUME_VALIDATION_PROMPT,
};
use crate::llm_client::TextModel;

/// The validity check reads only the head of the document.
const VALIDATION_SAMPLE_CHARS: usize = 2_000;

/// Orchestrates oracle calls with deterministic local fallbacks.
///
/// Carried in `AppState`; handlers never talk to the model directly.
#[derive(Clone)]
pub struct ResumeAnalyzer {
    model: Arc<dyn TextModel>,
}

impl ResumeAnalyzer {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Full resume feedback. Falls back to local heuristics on any oracle,
    /// parse, or schema failure.
    pub async fn analyze_resume(&self, resume_text: &str) -> ResumeAnalysis {
        let prompt = RESUME_ANALYSIS_PROMPT.replace("{resume_text}", resume_text);
        match self.ask::<ResumeAnalysis>(&prompt).await {
            Ok(analysis) => {
                info!(
                    "Resume analyzed by model (score {})",
                    analysis.overall_score
                );
                analysis
            }
            Err(reason) => {
                warn!("Resume analysis degraded to fallback: {reason}");
                fallback_resume_analysis(resume_text)
            }
        }
    }

    /// ATS comparison against a job description; same degradation contract.
    pub async fn check_ats(&self, resume_text: &str, job_description: &str) -> AtsAnalysis {
        let prompt = ATS_CHECK_PROMPT
            .replace("{resume_text}", resume_text)
            .replace("{job_description}", job_description);
        match self.ask::<AtsAnalysis>(&prompt).await {
            Ok(analysis) => {
                info!("ATS check answered by model (score {})", analysis.ats_score);
                analysis
            }
            Err(reason) => {
                warn!("ATS check degraded to keyword fallback: {reason}");
                fallback_ats_analysis(resume_text, job_description)
            }
        }
    }

    /// Is this document a resume at all? Fails open: an oracle or parse
    /// failure yields a verdict with `valid: true` instead of blocking the
    /// upload, so only an explicit low-confidence reply rejects.
    pub async fn validate_resume(&self, document_text: &str) -> ValidityVerdict {
        let sample: String = document_text
            .chars()
            .take(VALIDATION_SAMPLE_CHARS)
            .collect();
        let prompt = RESUME_VALIDATION_PROMPT.replace("{document_text}", &sample);
        match self.ask::<ResumeValidity>(&prompt).await {
            Ok(reply) => {
                info!(
                    "Document validity verdict: is_resume={} confidence={}",
                    reply.is_resume, reply.confidence
                );
                ValidityVerdict::from(reply)
            }
            Err(reason) => {
                warn!("Validity check failed open: {reason}");
                fallback_validity()
            }
        }
    }

    /// One oracle attempt: generate, recover the JSON span, deserialize.
    /// The error string only feeds logs; callers own the fallback decision.
    async fn ask<T: DeserializeOwned>(&self, prompt: &str) -> Result<T, String> {
        let raw = self
            .model
            .generate(prompt)
            .await
            .map_err(|e| e.to_string())?;
        let json = extract_json_object(&raw)
            .ok_or_else(|| "no JSON object in model output".to_string())?;
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
