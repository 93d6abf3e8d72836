//! Discord message limits
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

/// Discord message content limit, counted in characters
pub const MESSAGE_LIMIT: usize = 2000;

/// Truncate text to fit the message limit, adding an ellipsis if needed
///
/// Counts characters rather than bytes, so multi-byte names are never split.
pub fn truncate_for_message(text: &str) -> String {
    if text.chars().count() <= MESSAGE_LIMIT {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(MESSAGE_LIMIT - 3).collect();
    truncated.push_str("...");
    truncated
}
