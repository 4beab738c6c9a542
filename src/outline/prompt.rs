use crate::models::common::ArticleType;

/// Per-type guidance line embedded in the prompt.
pub fn type_guidance(article_type: ArticleType) -> &'static str {
    match article_type {
        ArticleType::HowTo => "Create a practical how-to guide with clear steps.",
        ArticleType::Listicle => "Create a comparison or list article.",
        ArticleType::Explanatory => "Create an educational article with examples.",
        ArticleType::General => "Create a comprehensive article.",
    }
}

/// Build the outline prompt: topic, optional target keyword, type guidance,
/// and the JSON shape the response must follow.
pub fn build_prompt(topic: &str, keyword: Option<&str>, article_type: ArticleType) -> String {
    format!(
        r#"Generate a detailed article outline in JSON format.

Topic: {topic}
Keyword: {keyword}
Type: {guidance}

Return ONLY valid JSON:
{{
    "h1": "SEO-optimized main heading",
    "sections": [
        {{
            "h2": "First section heading",
            "bullets": ["Point 1", "Point 2", "Point 3"]
        }},
        {{
            "h2": "Second section heading",
            "bullets": ["Point 1", "Point 2", "Point 3"]
        }},
        {{
            "h2": "Third section heading",
            "bullets": ["Point 1", "Point 2", "Point 3"]
        }},
        {{
            "h2": "Fourth section heading",
            "bullets": ["Point 1", "Point 2", "Point 3"]
        }}
    ],
    "ctas": [
        {{"after": 0, "text": "CTA after first section"}},
        {{"after": 1, "text": "CTA after second section"}},
        {{"after": 3, "text": "Final CTA"}}
    ]
}}"#,
        topic = topic,
        keyword = keyword.filter(|k| !k.trim().is_empty()).unwrap_or("Not specified"),
        guidance = type_guidance(article_type),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_topic_and_keyword() {
        let prompt = build_prompt(
            "how to buy a phone",
            Some("phone guide 2024"),
            ArticleType::HowTo,
        );
        assert!(prompt.contains("Topic: how to buy a phone"));
        assert!(prompt.contains("Keyword: phone guide 2024"));
        assert!(prompt.contains("how-to guide"));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn test_prompt_without_keyword() {
        let prompt = build_prompt("rust ownership", None, ArticleType::General);
        assert!(prompt.contains("Keyword: Not specified"));
        assert!(prompt.contains("comprehensive article"));
    }

    #[test]
    fn test_blank_keyword_treated_as_unset() {
        let prompt = build_prompt("rust ownership", Some("   "), ArticleType::General);
        assert!(prompt.contains("Keyword: Not specified"));
    }

    #[test]
    fn test_prompt_shape_instruction_is_valid_json() {
        let prompt = build_prompt("t", None, ArticleType::General);
        let start = prompt.find('{').unwrap();
        let end = prompt.rfind('}').unwrap();
        let blob = &prompt[start..=end];
        assert!(serde_json::from_str::<serde_json::Value>(blob).is_ok());
    }
}
