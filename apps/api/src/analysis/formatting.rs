//! Formatting heuristics: six independent checks that approximate how an
//! applicant tracking system sees a resume. Pure text predicates, no I/O.

use serde::{Deserialize, Serialize};

const CONTACT_MARKERS: &[&str] = &["email", "phone", "linkedin", "github"];

const SECTION_MARKERS: &[&str] = &["experience", "education", "skills", "projects"];

const ACTION_VERBS: &[&str] = &[
    "developed",
    "managed",
    "created",
    "led",
    "implemented",
    "designed",
    "improved",
];

/// Character-count bounds for a reasonably sized resume.
const MIN_RESUME_CHARS: usize = 500;
const MAX_RESUME_CHARS: usize = 10_000;

/// Outcome of each individual heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingChecks {
    pub has_contact_info: bool,
    pub has_sections: bool,
    pub has_action_verbs: bool,
    pub has_metrics: bool,
    pub not_too_short: bool,
    pub not_too_long: bool,
}

/// Full formatting report: per-check booleans plus an aggregate score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingReport {
    /// `round(100 * passed / total)`, always in 0..=100.
    pub score: u32,
    pub checks: FormattingChecks,
    pub passed: u32,
    pub total: u32,
}

/// Runs all six heuristics against `resume_text`.
///
/// Checks are case-insensitive and independent; a resume failing one check
/// still gets credit for the others.
pub fn check_formatting(resume_text: &str) -> FormattingReport {
    let lower = resume_text.to_lowercase();
    let char_count = resume_text.chars().count();

    let checks = FormattingChecks {
        has_contact_info: contains_any(&lower, CONTACT_MARKERS),
        has_sections: contains_any(&lower, SECTION_MARKERS),
        has_action_verbs: contains_any(&lower, ACTION_VERBS),
        has_metrics: contains_metric(resume_text),
        not_too_short: char_count > MIN_RESUME_CHARS,
        not_too_long: char_count < MAX_RESUME_CHARS,
    };

    let passed = [
        checks.has_contact_info,
        checks.has_sections,
        checks.has_action_verbs,
        checks.has_metrics,
        checks.not_too_short,
        checks.not_too_long,
    ]
    .iter()
    .filter(|&&c| c)
    .count() as u32;

    let total = 6u32;
    let score = ((passed as f64 / total as f64) * 100.0).round() as u32;

    FormattingReport {
        score,
        checks,
        passed,
        total,
    }
}

fn contains_any(text_lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text_lower.contains(m))
}

/// True if the text contains `<digits>%` or `<digits> <letter…>`, the two
/// shapes quantified achievements take ("grew revenue 40%", "managed 5 engineers").
fn contains_metric(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'%' {
                return true;
            }
            if j + 1 < bytes.len() && bytes[j] == b' ' && bytes[j + 1].is_ascii_alphabetic() {
                return true;
            }
            i = j;
        } else {
            i += 1;
        }
    }
    false
}
