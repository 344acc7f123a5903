// All Gemini prompt templates used by the analyzer. Placeholders are
// substituted with `.replace()` at the call site.

/// Resume feedback prompt. Replace `{resume_text}` before sending.
pub const RESUME_ANALYSIS_PROMPT: &str = r#"You are an expert resume analyzer and career counselor. Analyze the following resume and provide detailed feedback.

Resume Content:
{resume_text}

Please provide a comprehensive analysis in the following JSON format:
{
  "overallScore": <number between 0-100>,
  "strengths": [<list of 3-5 strengths>],
  "weaknesses": [<list of 3-5 areas for improvement>],
  "suggestions": [<list of 3-5 actionable suggestions>],
  "keySkills": [<list of key skills identified>],
  "summary": "<brief 2-3 sentence summary>"
}

Be specific, actionable, and constructive in your feedback."#;

/// ATS comparison prompt. Replace `{resume_text}` and `{job_description}`.
pub const ATS_CHECK_PROMPT: &str = r#"You are an ATS (Applicant Tracking System) expert. Compare this resume against the job description and provide a compatibility analysis.

Resume:
{resume_text}

Job Description:
{job_description}

Provide your analysis in this JSON format:
{
  "atsScore": <number between 0-100>,
  "matchPercentage": <number between 0-100>,
  "matchedKeywords": [<list of keywords found in both>],
  "missingKeywords": [<list of important keywords from job description missing in resume>],
  "recommendations": [<list of 3-5 specific recommendations>],
  "summary": "<brief summary of compatibility>"
}"#;

/// Document validity prompt. Replace `{document_text}` with the truncated
/// head of the extracted text; the full document is never sent.
pub const RESUME_VALIDATION_PROMPT: &str = r#"You are a resume validator. Analyze the following text and determine if it's a resume/CV or not.

A resume/CV typically contains:
- Personal information (name, contact details, email, phone)
- Work experience or employment history
- Education details (degree, university, graduation year)
- Skills section
- Professional summary or objective

Text to analyze:
{document_text}

Respond with ONLY a JSON object in this exact format (no additional text):
{
  "isResume": true or false,
  "confidence": <number 0-100>,
  "reason": "<brief explanation>"
}

JSON Response:"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_their_placeholders() {
        assert!(RESUME_ANALYSIS_PROMPT.contains("{resume_text}"));
        assert!(ATS_CHECK_PROMPT.contains("{resume_text}"));
        assert!(ATS_CHECK_PROMPT.contains("{job_description}"));
        assert!(RESUME_VALIDATION_PROMPT.contains("{document_text}"));
    }

    #[test]
    fn test_templates_demand_json_shapes() {
        assert!(RESUME_ANALYSIS_PROMPT.contains("\"overallScore\""));
        assert!(ATS_CHECK_PROMPT.contains("\"atsScore\""));
        assert!(RESUME_VALIDATION_PROMPT.contains("\"isResume\""));
    }
}
