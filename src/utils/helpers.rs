//! Helper functions and utilities

/// Join a first and optional last name into a display name
pub fn display_name(first_name: &str, last_name: Option<&str>) -> String {
    match last_name.filter(|l| !l.is_empty()) {
        Some(last) => format!("{} {}", first_name, last),
        None => first_name.to_string(),
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
