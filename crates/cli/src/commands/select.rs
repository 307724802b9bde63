//! Yes/no and list selection commands.

use clap::Args;
use promter_core::AppResult;
use promter_prompt::{PromptBackend, Prompter};

use super::Answer;

/// Ask a Yes/No question
#[derive(Args, Debug)]
pub struct YesNoCommand {
    /// Question shown to the user
    pub label: String,

    /// Default shown next to the question
    #[arg(short, long)]
    pub default: Option<String>,
}

impl YesNoCommand {
    pub fn execute<B: PromptBackend>(&self, prompter: &mut Prompter<B>) -> AppResult<Answer> {
        tracing::debug!("Yes/no options: {:?}", self);

        let selection = match &self.default {
            Some(default) => prompter.yes_no_with_default(&self.label, default)?,
            None => prompter.yes_no(&self.label)?,
        };
        Ok(Answer::Selection(selection))
    }
}

/// Pick one item from a list
#[derive(Args, Debug)]
pub struct SelectCommand {
    /// Label shown above the list
    pub label: String,

    /// Items to choose from
    #[arg(required = true)]
    pub items: Vec<String>,

    /// Default shown next to the label
    #[arg(short, long)]
    pub default: Option<String>,
}

impl SelectCommand {
    pub fn execute<B: PromptBackend>(&self, prompter: &mut Prompter<B>) -> AppResult<Answer> {
        tracing::debug!("Select options: {:?}", self);

        let selection = match &self.default {
            Some(default) => prompter.select_with_default(&self.label, &self.items, default)?,
            None => prompter.select(&self.label, &self.items)?,
        };
        Ok(Answer::Selection(selection))
    }
}
