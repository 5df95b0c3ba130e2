// Display helpers for recommendation output

/// Truncate text to at most `max_len` characters, marking the cut with "..."
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Render a similarity in [0, 1] as a percentage with one decimal
pub fn format_match_percent(similarity: f64) -> String {
    format!("{:.1}%", similarity.clamp(0.0, 1.0) * 100.0)
}
