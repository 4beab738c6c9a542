use crate::models::common::ArticleType;
use crate::models::outline::{CallToAction, Outline, OutlineSection};

/// Build a deterministic scaffold outline for the topic.
///
/// Used by callers when generation fails or no model is available; the
/// result satisfies the same shape rules as a model-produced outline.
pub fn scaffold(topic: &str, keyword: Option<&str>) -> Outline {
    let article_type = ArticleType::detect(topic);

    let (mut h1, sections) = match article_type {
        ArticleType::HowTo => (
            format!(
                "How to {}: Complete Guide",
                title_case(strip_marker(topic, "how to").trim())
            ),
            how_to_sections(),
        ),
        _ => (
            format!("{}: Essential Guide", title_case(topic)),
            general_sections(topic),
        ),
    };

    if let Some(keyword) = keyword.filter(|k| !k.trim().is_empty()) {
        let base = h1.split(':').next().unwrap_or(&h1).to_string();
        h1 = format!("{}: {}", base, title_case(keyword));
    }

    Outline {
        h1,
        sections,
        ctas: vec![
            CallToAction {
                after: 0,
                text: format!("Ready to master {}? Continue reading!", topic),
            },
            CallToAction {
                after: 1,
                text: "Apply these strategies today for best results.".to_string(),
            },
            CallToAction {
                after: 3,
                text: "Start implementing now!".to_string(),
            },
        ],
    }
}

fn how_to_sections() -> Vec<OutlineSection> {
    vec![
        section(
            "Getting Started: Prerequisites",
            &[
                "Understanding requirements and tools",
                "Setting up for success",
                "Avoiding common mistakes",
            ],
        ),
        section(
            "Step-by-Step Process",
            &[
                "Following the proven methodology",
                "Best practices for each phase",
                "Troubleshooting common issues",
            ],
        ),
        section(
            "Advanced Techniques",
            &[
                "Taking results to the next level",
                "Professional strategies",
                "Measuring and improving outcomes",
            ],
        ),
        section(
            "Long-Term Success",
            &[
                "Ongoing maintenance",
                "Scaling your approach",
                "Continued learning resources",
            ],
        ),
    ]
}

fn general_sections(topic: &str) -> Vec<OutlineSection> {
    vec![
        OutlineSection {
            h2: "Introduction and Overview".to_string(),
            bullets: vec![
                format!("Understanding {}", topic),
                "Why this topic matters".to_string(),
                "What you will learn".to_string(),
            ],
        },
        section(
            "Key Components",
            &[
                "Main aspects and features",
                "How elements work together",
                "Critical success factors",
            ],
        ),
        section(
            "Best Practices",
            &["Proven strategies", "Common pitfalls to avoid", "Expert tips"],
        ),
        section(
            "Next Steps",
            &[
                "Emerging trends",
                "Future opportunities",
                "Resources for learning",
            ],
        ),
    ]
}

fn section(h2: &str, bullets: &[&str]) -> OutlineSection {
    OutlineSection {
        h2: h2.to_string(),
        bullets: bullets.iter().map(|b| b.to_string()).collect(),
    }
}

/// Remove a case-insensitive marker phrase. Works on the lowercased text;
/// callers title-case the result afterwards.
fn strip_marker(text: &str, marker: &str) -> String {
    let mut lower = text.to_lowercase();
    if let Some(pos) = lower.find(marker) {
        lower.replace_range(pos..pos + marker.len(), "");
    }
    lower
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
