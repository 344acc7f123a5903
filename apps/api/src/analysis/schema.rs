//! Typed shapes the oracle must return, the validity verdict derived from
//! them, and the lenient JSON recovery applied to raw model output before
//! deserialization.

use serde::{Deserialize, Deserializer, Serialize};

/// Resume feedback, from the oracle or the deterministic fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    #[serde(deserialize_with = "de_score")]
    pub overall_score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub key_skills: Vec<String>,
    pub summary: String,
}

/// ATS comparison of one resume against one job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    #[serde(deserialize_with = "de_score")]
    pub ats_score: u32,
    #[serde(deserialize_with = "de_score")]
    pub match_percentage: u32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: String,
}

/// Verdict on whether an uploaded document is actually a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeValidity {
    pub is_resume: bool,
    #[serde(deserialize_with = "de_score")]
    pub confidence: u32,
    pub reason: String,
}

impl ResumeValidity {
    /// A document counts as a resume only with a positive verdict at
    /// confidence 60 or above.
    pub fn is_valid(&self) -> bool {
        self.is_resume && self.confidence >= 60
    }
}

/// Validity outcome with the acceptance decision already made. The fallback
/// path hard-codes `valid: true`, so callers must gate on `valid` and never
/// recompute it from the confidence.
#[derive(Debug, Clone)]
pub struct ValidityVerdict {
    pub valid: bool,
    pub confidence: u32,
    pub reason: String,
}

impl From<ResumeValidity> for ValidityVerdict {
    fn from(reply: ResumeValidity) -> Self {
        ValidityVerdict {
            valid: reply.is_valid(),
            confidence: reply.confidence,
            reason: reply.reason,
        }
    }
}

/// Accepts any JSON number for a score field, rounds it, and clamps to 0..=100.
fn de_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().clamp(0.0, 100.0) as u32)
}

/// Returns the span from the first `{` to the last `}` in `text`, if both
/// exist in order. Models wrap JSON in prose or code fences; taking the
/// outermost brace span recovers the object without parsing the wrapping.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANALYSIS_JSON: &str = r#"{
        "overallScore": 82,
        "strengths": ["Clear impact statements", "Strong technical depth"],
        "weaknesses": ["No summary section"],
        "suggestions": ["Add a professional summary"],
        "keySkills": ["rust", "postgresql"],
        "summary": "A solid backend engineering resume."
    }"#;

    #[test]
    fn test_resume_analysis_deserializes_camel_case() {
        let analysis: ResumeAnalysis = serde_json::from_str(ANALYSIS_JSON).unwrap();
        assert_eq!(analysis.overall_score, 82);
        assert_eq!(analysis.strengths.len(), 2);
        assert_eq!(analysis.key_skills, vec!["rust", "postgresql"]);
    }

    #[test]
    fn test_score_accepts_floats_and_rounds() {
        let json = ANALYSIS_JSON.replace("82", "87.6");
        let analysis: ResumeAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(analysis.overall_score, 88);
    }

    #[test]
    fn test_score_clamps_above_one_hundred() {
        let json = ANALYSIS_JSON.replace("82", "150");
        let analysis: ResumeAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(analysis.overall_score, 100);
    }

    #[test]
    fn test_score_clamps_below_zero() {
        let json = ANALYSIS_JSON.replace("82", "-5");
        let analysis: ResumeAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(analysis.overall_score, 0);
    }

    #[test]
    fn test_missing_field_is_a_schema_error() {
        let json = r#"{"overallScore": 82, "strengths": []}"#;
        assert!(serde_json::from_str::<ResumeAnalysis>(json).is_err());
    }

    #[test]
    fn test_mistyped_field_is_a_schema_error() {
        let json = ANALYSIS_JSON.replace(
            r#"["Clear impact statements", "Strong technical depth"]"#,
            r#""not an array""#,
        );
        assert!(serde_json::from_str::<ResumeAnalysis>(&json).is_err());
    }

    #[test]
    fn test_ats_analysis_deserializes() {
        let json = r#"{
            "atsScore": 74,
            "matchPercentage": 65.4,
            "matchedKeywords": ["python"],
            "missingKeywords": ["docker"],
            "recommendations": ["Add docker experience"],
            "summary": "Decent match."
        }"#;
        let ats: AtsAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(ats.ats_score, 74);
        assert_eq!(ats.match_percentage, 65);
        assert_eq!(ats.missing_keywords, vec!["docker"]);
    }

    #[test]
    fn test_validity_threshold_requires_both_conditions() {
        let valid = ResumeValidity {
            is_resume: true,
            confidence: 60,
            reason: String::new(),
        };
        assert!(valid.is_valid());

        let low_confidence = ResumeValidity {
            is_resume: true,
            confidence: 59,
            reason: String::new(),
        };
        assert!(!low_confidence.is_valid());

        let not_a_resume = ResumeValidity {
            is_resume: false,
            confidence: 95,
            reason: String::new(),
        };
        assert!(!not_a_resume.is_valid());
    }

    #[test]
    fn test_verdict_carries_the_threshold_decision() {
        let verdict = ValidityVerdict::from(ResumeValidity {
            is_resume: true,
            confidence: 59,
            reason: "borderline".to_string(),
        });
        assert!(!verdict.valid);
        assert_eq!(verdict.confidence, 59);
        assert_eq!(verdict.reason, "borderline");
    }

    #[test]
    fn test_extract_json_object_plain() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_extract_json_object_inside_prose() {
        let text = "Here is the analysis you asked for:\n{\"a\": 1}\nLet me know!";
        assert_eq!(extract_json_object(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_extract_json_object_inside_code_fence() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_object(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_extract_json_object_spans_nested_braces() {
        let text = r#"prefix {"a": {"b": 2}} suffix"#;
        assert_eq!(extract_json_object(text), Some(r#"{"a": {"b": 2}}"#));
    }

    #[test]
    fn test_extract_json_object_none_without_braces() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object(""), None);
    }

    #[test]
    fn test_extract_json_object_none_when_braces_reversed() {
        assert_eq!(extract_json_object("} before {"), None);
    }
}
