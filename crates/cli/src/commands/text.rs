//! Free-text commands.

use clap::Args;
use promter_core::{AppResult, PrompterOptions};
use promter_prompt::{PromptBackend, Prompter};

use super::Answer;

/// Ask for non-empty text
#[derive(Args, Debug)]
pub struct TextCommand {
    /// Label shown to the user
    pub label: String,

    /// Value used when the input is left blank
    #[arg(short, long)]
    pub default: Option<String>,
}

impl TextCommand {
    pub fn execute<B: PromptBackend>(&self, prompter: &mut Prompter<B>) -> AppResult<Answer> {
        tracing::debug!("Text options: {:?}", self);

        let value = match &self.default {
            Some(default) => {
                prompter.text_with_default(&self.label, default, PrompterOptions::default())?
            }
            None => prompter.text(&self.label, PrompterOptions::default())?,
        };
        Ok(Answer::text(value))
    }
}

/// Ask for text that may be left empty
#[derive(Args, Debug)]
pub struct OptionalTextCommand {
    /// Label shown to the user
    pub label: String,

    /// Value used when the input is left blank
    #[arg(short, long)]
    pub default: Option<String>,
}

impl OptionalTextCommand {
    pub fn execute<B: PromptBackend>(&self, prompter: &mut Prompter<B>) -> AppResult<Answer> {
        tracing::debug!("Optional text options: {:?}", self);

        let value = match &self.default {
            Some(default) => prompter.optional_text_with_default(
                &self.label,
                default,
                PrompterOptions::default(),
            )?,
            None => prompter.optional_text(&self.label, PrompterOptions::default())?,
        };
        Ok(Answer::text(value))
    }
}
