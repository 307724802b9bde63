//! Terminal prompt backends.
//!
//! A backend collects one raw answer: a line of text or an index into a list.
//! Everything above that (labels, defaults, retries) lives in `Prompter`.

use dialoguer::{theme::ColorfulTheme, Input, Select};
use promter_core::{AppError, AppResult, ValidationError};

/// Validator applied by the backend to each submitted line.
pub type LineValidator<'a> = &'a dyn Fn(&str) -> Result<(), ValidationError>;

/// The underlying prompt primitive.
pub trait PromptBackend {
    /// Let the user pick one of `items`, returning its index.
    fn run_select(&mut self, label: &str, items: &[String]) -> AppResult<usize>;

    /// Read one line of input that passes `validate`.
    fn run_line(&mut self, label: &str, validate: LineValidator<'_>) -> AppResult<String>;
}

/// Interactive backend built on `dialoguer`.
///
/// The validator is installed on the input widget, so a rejected line is
/// re-prompted in place with the validation message.
pub struct DialoguerBackend {
    theme: ColorfulTheme,
}

impl DialoguerBackend {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBackend for DialoguerBackend {
    fn run_select(&mut self, label: &str, items: &[String]) -> AppResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact()
            .map_err(input_error)
    }

    fn run_line(&mut self, label: &str, validate: LineValidator<'_>) -> AppResult<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .validate_with(|input: &String| validate(input.as_str()))
            .interact_text()
            .map_err(input_error)
    }
}

fn input_error(err: dialoguer::Error) -> AppError {
    AppError::Input(err.to_string())
}
