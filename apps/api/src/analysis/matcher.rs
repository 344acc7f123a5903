//! Keyword matching between resume keywords and job-description keywords.
//!
//! Two strategies coexist on purpose: `Exact` backs the deterministic ATS
//! report, `Containment` backs the degraded ATS path where partial overlaps
//! like "kubernetes" vs "kubernetes-operator" should still count.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Returned matched list never exceeds this many entries.
pub const MATCHED_KEYWORDS_CAP: usize = 15;
/// Returned missing list never exceeds this many entries.
pub const MISSING_KEYWORDS_CAP: usize = 10;

/// How a resume keyword and a job keyword are considered the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Case-insensitive equality.
    Exact,
    /// Bidirectional substring containment.
    Containment,
}

impl MatchStrategy {
    fn is_match(self, resume_kw: &str, job_kw: &str) -> bool {
        match self {
            MatchStrategy::Exact => resume_kw == job_kw,
            MatchStrategy::Containment => {
                resume_kw.contains(job_kw) || job_kw.contains(resume_kw)
            }
        }
    }
}

/// Result of matching job keywords against resume keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatch {
    /// `round(100 * matched / max(job_total, 1))`, computed over the full
    /// intersection before either list is capped.
    pub match_percentage: u32,
    /// Job keywords found in the resume, in job order.
    pub matched_keywords: Vec<String>,
    /// Job keywords absent from the resume, in job order.
    pub missing_keywords: Vec<String>,
}

/// Matches every unique job keyword against the resume keywords.
///
/// Each job keyword lands in exactly one of the two output lists, so they
/// are always disjoint. Comparison is case-insensitive under both strategies.
pub fn match_keywords(
    resume_keywords: &[String],
    job_keywords: &[String],
    strategy: MatchStrategy,
) -> KeywordMatch {
    let resume: Vec<String> = resume_keywords.iter().map(|k| k.to_lowercase()).collect();
    let job = dedup_preserving_order(job_keywords);

    let mut matched_total = 0usize;
    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();

    for jk in &job {
        if resume.iter().any(|rk| strategy.is_match(rk, jk)) {
            matched_total += 1;
            if matched_keywords.len() < MATCHED_KEYWORDS_CAP {
                matched_keywords.push(jk.clone());
            }
        } else if missing_keywords.len() < MISSING_KEYWORDS_CAP {
            missing_keywords.push(jk.clone());
        }
    }

    let match_percentage =
        ((matched_total as f64 / job.len().max(1) as f64) * 100.0).round() as u32;

    KeywordMatch {
        match_percentage,
        matched_keywords,
        missing_keywords,
    }
}

fn dedup_preserving_order(keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for k in keywords {
        let lower = k.to_lowercase();
        if seen.insert(lower.clone()) {
            out.push(lower);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_exact_partial_overlap() {
        let result = match_keywords(
            &kws(&["python", "aws"]),
            &kws(&["python", "docker", "kubernetes"]),
            MatchStrategy::Exact,
        );
        assert_eq!(result.match_percentage, 33);
        assert_eq!(result.matched_keywords, kws(&["python"]));
        assert_eq!(result.missing_keywords, kws(&["docker", "kubernetes"]));
    }

    #[test]
    fn test_exact_is_case_insensitive() {
        let result = match_keywords(
            &kws(&["Python"]),
            &kws(&["PYTHON"]),
            MatchStrategy::Exact,
        );
        assert_eq!(result.match_percentage, 100);
        assert_eq!(result.matched_keywords, kws(&["python"]));
    }

    #[test]
    fn test_exact_does_not_match_substrings() {
        let result = match_keywords(
            &kws(&["javascript"]),
            &kws(&["java"]),
            MatchStrategy::Exact,
        );
        assert_eq!(result.match_percentage, 0);
        assert_eq!(result.missing_keywords, kws(&["java"]));
    }

    #[test]
    fn test_containment_matches_both_directions() {
        let longer_in_resume = match_keywords(
            &kws(&["kubernetes-operator"]),
            &kws(&["kubernetes"]),
            MatchStrategy::Containment,
        );
        assert_eq!(longer_in_resume.match_percentage, 100);

        let longer_in_job = match_keywords(
            &kws(&["kubernetes"]),
            &kws(&["kubernetes-operator"]),
            MatchStrategy::Containment,
        );
        assert_eq!(longer_in_job.match_percentage, 100);
    }

    #[test]
    fn test_empty_job_keywords_score_zero() {
        let result = match_keywords(&kws(&["python"]), &[], MatchStrategy::Exact);
        assert_eq!(result.match_percentage, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_resume_keywords_match_nothing() {
        let result = match_keywords(&[], &kws(&["python", "docker"]), MatchStrategy::Exact);
        assert_eq!(result.match_percentage, 0);
        assert!(result.matched_keywords.is_empty());
        assert_eq!(result.missing_keywords, kws(&["python", "docker"]));
    }

    #[test]
    fn test_matched_list_is_capped_but_percentage_is_not() {
        let job: Vec<String> = (0..20).map(|i| format!("skill{i}")).collect();
        let result = match_keywords(&job.clone(), &job, MatchStrategy::Exact);
        assert_eq!(result.matched_keywords.len(), MATCHED_KEYWORDS_CAP);
        assert_eq!(result.match_percentage, 100);
    }

    #[test]
    fn test_missing_list_is_capped() {
        let job: Vec<String> = (0..25).map(|i| format!("skill{i}")).collect();
        let result = match_keywords(&[], &job, MatchStrategy::Exact);
        assert_eq!(result.missing_keywords.len(), MISSING_KEYWORDS_CAP);
        assert_eq!(result.match_percentage, 0);
    }

    #[test]
    fn test_matched_and_missing_are_disjoint() {
        let result = match_keywords(
            &kws(&["python", "rust"]),
            &kws(&["python", "rust", "go", "java"]),
            MatchStrategy::Exact,
        );
        for kw in &result.matched_keywords {
            assert!(!result.missing_keywords.contains(kw));
        }
        assert_eq!(result.match_percentage, 50);
    }

    #[test]
    fn test_duplicate_job_keywords_count_once() {
        let result = match_keywords(
            &kws(&["python"]),
            &kws(&["python", "Python", "docker"]),
            MatchStrategy::Exact,
        );
        // 2 unique job keywords, 1 matched
        assert_eq!(result.match_percentage, 50);
        assert_eq!(result.matched_keywords, kws(&["python"]));
        assert_eq!(result.missing_keywords, kws(&["docker"]));
    }

    #[test]
    fn test_job_order_is_preserved() {
        let result = match_keywords(
            &kws(&["b", "d"]),
            &kws(&["a", "b", "c", "d"]),
            MatchStrategy::Exact,
        );
        assert_eq!(result.matched_keywords, kws(&["b", "d"]));
        assert_eq!(result.missing_keywords, kws(&["a", "c"]));
    }
}
