use crate::error::{OutlineError, Result};
use crate::models::outline::Outline;

/// Decoded model response.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResponse {
    /// The model followed the JSON shape instruction.
    Structured(Outline),
    /// The model answered in plain text; passed through unchanged.
    Plain(String),
}

/// Slice out the JSON object blob from first `{` to last `}`, if present.
/// Models routinely wrap the JSON in prose or code fences.
pub fn extract_json_blob(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Decode generated text into an outline.
///
/// An empty body is a parse failure. A shape-valid JSON blob becomes a
/// structured outline; anything else is treated as already-displayable text.
pub fn parse_generated(text: &str) -> Result<ParsedResponse> {
    if text.trim().is_empty() {
        return Err(OutlineError::Parse("generated text was empty".into()));
    }

    if let Some(blob) = extract_json_blob(text) {
        if let Ok(outline) = serde_json::from_str::<Outline>(blob) {
            if outline.validate().is_ok() {
                return Ok(ParsedResponse::Structured(outline));
            }
        }
    }

    Ok(ParsedResponse::Plain(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURED: &str = r#"Here is your outline:
{
    "h1": "Rust Ownership: Essential Guide",
    "sections": [
        {"h2": "Introduction", "bullets": ["What it is", "Why it matters"]},
        {"h2": "Borrowing", "bullets": ["Shared", "Mutable"]},
        {"h2": "Lifetimes", "bullets": ["Elision", "Annotations"]}
    ],
    "ctas": [{"after": 0, "text": "Keep reading!"}]
}
Hope this helps."#;

    #[test]
    fn test_extract_blob_from_noisy_text() {
        let blob = extract_json_blob(STRUCTURED).unwrap();
        assert!(blob.starts_with('{'));
        assert!(blob.ends_with('}'));
        assert!(serde_json::from_str::<serde_json::Value>(blob).is_ok());
    }

    #[test]
    fn test_extract_blob_absent() {
        assert!(extract_json_blob("no json here").is_none());
        assert!(extract_json_blob("} reversed {").is_none());
    }

    #[test]
    fn test_parse_structured() {
        match parse_generated(STRUCTURED).unwrap() {
            ParsedResponse::Structured(outline) => {
                assert_eq!(outline.h1, "Rust Ownership: Essential Guide");
                assert_eq!(outline.sections.len(), 3);
            }
            other => panic!("expected structured outline, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_plain_text_unchanged() {
        let text = "1. Intro\n2. Body\n3. Conclusion";
        assert_eq!(
            parse_generated(text).unwrap(),
            ParsedResponse::Plain(text.to_string())
        );
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(matches!(
            parse_generated(""),
            Err(OutlineError::Parse(_))
        ));
        assert!(matches!(
            parse_generated(" \n\t"),
            Err(OutlineError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_shape_falls_back_to_plain() {
        // JSON present but missing sections: displayable as text, not an error.
        let text = r#"{"h1": "Only a heading"}"#;
        assert_eq!(
            parse_generated(text).unwrap(),
            ParsedResponse::Plain(text.to_string())
        );
    }

    #[test]
    fn test_malformed_json_falls_back_to_plain() {
        let text = r#"{"h1": "unterminated"#;
        assert!(extract_json_blob(text).is_none());
        assert_eq!(
            parse_generated(text).unwrap(),
            ParsedResponse::Plain(text.to_string())
        );
    }
}
