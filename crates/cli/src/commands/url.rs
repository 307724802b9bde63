//! URL command.

use clap::Args;
use promter_core::{AppResult, PrompterOptions};
use promter_prompt::{PromptBackend, Prompter};

use super::Answer;

/// Ask for an http(s) URL (printed lowercased)
#[derive(Args, Debug)]
pub struct UrlCommand {
    /// Label shown to the user
    pub label: String,

    /// URL used when the input is left empty
    #[arg(short, long)]
    pub default: Option<String>,
}

impl UrlCommand {
    pub fn execute<B: PromptBackend>(&self, prompter: &mut Prompter<B>) -> AppResult<Answer> {
        tracing::debug!("URL options: {:?}", self);

        let value = match &self.default {
            Some(default) => {
                prompter.url_with_default(&self.label, default, PrompterOptions::default())?
            }
            None => prompter.url(&self.label, PrompterOptions::default())?,
        };
        Ok(Answer::text(value))
    }
}
