//! Command handlers for the promter CLI.
//!
//! One subcommand per prompt kind. Each handler runs its prompt and returns
//! an [`Answer`]; `main` renders it to stdout.

pub mod select;
pub mod text;
pub mod url;

use promter_core::AppResult;
use promter_prompt::Selection;
use serde::Serialize;

// Re-export command types for convenience
pub use select::{SelectCommand, YesNoCommand};
pub use text::{OptionalTextCommand, TextCommand};
pub use url::UrlCommand;

/// The result of one prompt command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Selection(Selection),
    Text { value: String },
}

impl Answer {
    pub fn text(value: String) -> Self {
        Answer::Text { value }
    }

    /// Render for stdout: the bare value, or a JSON object with `json`.
    pub fn render(&self, json: bool) -> AppResult<String> {
        if json {
            return Ok(serde_json::to_string(self)?);
        }
        Ok(match self {
            Answer::Selection(selection) => selection.value.clone(),
            Answer::Text { value } => value.clone(),
        })
    }
}
