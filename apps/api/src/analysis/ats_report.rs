//! Deterministic ATS report: strict keyword extraction on both texts, exact
//! matching, formatting heuristics, and a 60/40 weighted aggregate. Runs
//! entirely locally; the oracle is never consulted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::formatting::{check_formatting, FormattingReport};
use crate::analysis::keywords::{extract_keywords, ExtractOptions};
use crate::analysis::matcher::{match_keywords, MatchStrategy};

/// Keyword lists surfaced in the report are truncated to this many entries.
const REPORT_KEYWORDS_CAP: usize = 20;

/// Weighting of the two sub-scores in the aggregate.
const KEYWORD_WEIGHT: f64 = 0.6;
const FORMATTING_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    /// `round(0.6 * keyword_match + 0.4 * formatting.score)`, in 0..=100.
    pub ats_score: u32,
    pub keyword_match: u32,
    pub resume_keywords: Vec<String>,
    pub job_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub formatting: FormattingReport,
}

/// Builds the full deterministic report for a resume / job-description pair.
pub fn generate_ats_report(resume_text: &str, job_description: &str) -> AtsReport {
    let opts = ExtractOptions::ats();
    let mut resume_keywords = extract_keywords(resume_text, &opts);
    let mut job_keywords = extract_keywords(job_description, &opts);

    let matched = match_keywords(&resume_keywords, &job_keywords, MatchStrategy::Exact);
    let formatting = check_formatting(resume_text);

    let ats_score = (f64::from(matched.match_percentage) * KEYWORD_WEIGHT
        + f64::from(formatting.score) * FORMATTING_WEIGHT)
        .round() as u32;

    debug!(
        "ATS report generated: ats_score={ats_score}, keyword_match={}, formatting={}",
        matched.match_percentage, formatting.score
    );

    resume_keywords.truncate(REPORT_KEYWORDS_CAP);
    job_keywords.truncate(REPORT_KEYWORDS_CAP);

    AtsReport {
        ats_score,
        keyword_match: matched.match_percentage,
        resume_keywords,
        job_keywords,
        missing_keywords: matched.missing_keywords,
        formatting,
    }
}
