use crate::models::outline::Outline;

/// Longest topic prefix used when deriving a filename.
const SLUG_TOPIC_CHARS: usize = 50;

/// Render the outline as display text: heading, section headings with
/// `•` bullets, and call-to-action lines after their sections.
pub fn render_text(outline: &Outline) -> String {
    let mut text = format!("# {}\n\n", outline.h1);

    for (idx, section) in outline.sections.iter().enumerate() {
        text.push_str(&format!("## {}\n\n", section.h2));
        for bullet in &section.bullets {
            text.push_str(&format!("• {}\n", bullet));
        }
        text.push('\n');

        if let Some(cta) = outline.cta_after(idx) {
            text.push_str(&format!("💡 {}\n\n", cta.text));
        }
    }

    text
}

/// Derive a download filename from the topic: lowercase, every
/// non-alphanumeric character collapsed to `-`, capped at
/// [`SLUG_TOPIC_CHARS`] characters, with an `-outline.txt` suffix.
pub fn slug_filename(topic: &str) -> String {
    let slug: String = topic
        .to_lowercase()
        .chars()
        .take(SLUG_TOPIC_CHARS)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    format!("{}-outline.txt", slug)
}
