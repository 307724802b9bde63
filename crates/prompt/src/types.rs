//! Prompt result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Items offered by the yes/no prompts, in order.
pub const YES_NO: [&str; 2] = ["Yes", "No"];

/// The item picked from a selection prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Position of the item in the offered list
    pub index: usize,

    /// The item itself
    pub value: String,
}

impl Selection {
    pub fn new(index: usize, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }

    /// Whether a yes/no prompt was answered "Yes".
    pub fn is_yes(&self) -> bool {
        self.index == 0
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_json() {
        let selection = Selection::new(1, "No");
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json, serde_json::json!({"index": 1, "value": "No"}));
        assert!(!selection.is_yes());
        assert_eq!(selection.to_string(), "No");
    }
}
