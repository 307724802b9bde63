//! Label decoration for prompts with a default value.

/// Append the default value to `label` when there is one.
///
/// A default that is empty after trimming leaves the label unchanged; a
/// non-empty default is shown untrimmed.
pub fn format_label(label: &str, default: &str) -> String {
    if default.trim().is_empty() {
        return label.to_string();
    }
    format!("{} (default: {})", label, default)
}
