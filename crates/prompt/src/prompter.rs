//! The `Prompter` handle and its prompt kinds.
//!
//! Every prompt kind runs through [`Prompter::run_with_retries`], so they all
//! share the handle's retry counter. Text kinds preserve the case of what was
//! typed; URL kinds lowercase their result.

use promter_core::{AppConfig, AppError, AppResult, PrompterOptions, ValidationError};

use crate::backend::{DialoguerBackend, PromptBackend};
use crate::label::format_label;
use crate::retry::{RetryDecision, RetryState};
use crate::types::{Selection, YES_NO};
use crate::validate::{resolve_default, validate_text, validate_text_with_default, validate_url};

/// Stateful prompt handle.
///
/// Reuse one handle for a sequence of related prompts. Select kinds use the
/// handle's options; text kinds merge a per-call override on top of them.
pub struct Prompter<B = DialoguerBackend> {
    backend: B,
    options: PrompterOptions,
    retries: RetryState,
}

impl Prompter<DialoguerBackend> {
    /// Interactive prompter with default options.
    pub fn new() -> Self {
        Self::with_backend(DialoguerBackend::new())
    }

    /// Interactive prompter using the options from `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new().with_options(config.prompter)
    }
}

impl Default for Prompter<DialoguerBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: PromptBackend> Prompter<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            options: PrompterOptions::defaults(),
            retries: RetryState::new(),
        }
    }

    /// Merge `options` into the handle's base options.
    pub fn with_options(mut self, options: PrompterOptions) -> Self {
        self.options = self.options.merge(options);
        self
    }

    pub fn options(&self) -> PrompterOptions {
        self.options
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Current value of the shared retry counter.
    pub fn retry_count(&self) -> u32 {
        self.retries.count()
    }

    /// Clear the shared retry counter, giving the next call a full allotment.
    pub fn reset_retries(&mut self) {
        self.retries.reset();
    }

    /// Run `attempt` until it succeeds or the retry policy gives up.
    ///
    /// Returns the outcome of the last attempt.
    pub fn run_with_retries<T, F>(
        &mut self,
        overrides: PrompterOptions,
        mut attempt: F,
    ) -> AppResult<T>
    where
        F: FnMut(&mut B) -> AppResult<T>,
    {
        let options = self.options.merge(overrides);
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let outcome = attempt(&mut self.backend);

            match self.retries.record(&outcome, options) {
                RetryDecision::Retry => {
                    if let Err(e) = &outcome {
                        tracing::warn!(
                            attempt = attempts,
                            retry_count = self.retries.count(),
                            "Prompt failed, asking again: {}",
                            e
                        );
                    }
                }
                RetryDecision::Finish => {
                    if let Err(e) = &outcome {
                        tracing::debug!(
                            attempts,
                            retry_count = self.retries.count(),
                            "Prompt failed: {}",
                            e
                        );
                    }
                    return outcome;
                }
            }
        }
    }

    /// Ask a Yes/No question.
    pub fn yes_no(&mut self, label: &str) -> AppResult<Selection> {
        self.select(label, &YES_NO)
    }

    /// Ask a Yes/No question, showing `default` in the label.
    pub fn yes_no_with_default(&mut self, label: &str, default: &str) -> AppResult<Selection> {
        self.select_with_default(label, &YES_NO, default)
    }

    /// Pick one of `items`.
    ///
    /// An empty list fails with [`AppError::EmptySelection`] without prompting.
    pub fn select<S: AsRef<str>>(&mut self, label: &str, items: &[S]) -> AppResult<Selection> {
        self.select_labeled(label.to_string(), items)
    }

    /// Pick one of `items`, showing `default` in the label.
    pub fn select_with_default<S: AsRef<str>>(
        &mut self,
        label: &str,
        items: &[S],
        default: &str,
    ) -> AppResult<Selection> {
        self.select_labeled(format_label(label, default), items)
    }

    fn select_labeled<S: AsRef<str>>(
        &mut self,
        label: String,
        items: &[S],
    ) -> AppResult<Selection> {
        if items.is_empty() {
            return Err(AppError::EmptySelection);
        }
        let items: Vec<String> = items.iter().map(|item| item.as_ref().to_string()).collect();

        self.run_with_retries(PrompterOptions::default(), |backend| {
            let index = backend.run_select(&label, &items)?;
            let value = items.get(index).cloned().ok_or_else(|| {
                AppError::Input(format!("selection index {} out of range", index))
            })?;
            Ok(Selection { index, value })
        })
    }

    /// Ask for non-blank text.
    pub fn text(&mut self, label: &str, options: PrompterOptions) -> AppResult<String> {
        self.run_with_retries(options, |backend| backend.run_line(label, &validate_text))
    }

    /// Ask for text, substituting `default` for blank input.
    ///
    /// Non-blank input is returned verbatim.
    pub fn text_with_default(
        &mut self,
        label: &str,
        default: &str,
        options: PrompterOptions,
    ) -> AppResult<String> {
        let label = format_label(label, default);
        self.run_with_retries(options, |backend| {
            let input = backend.run_line(&label, &|input: &str| {
                validate_text_with_default(input, default)
            })?;
            Ok(resolve_default(&input, default))
        })
    }

    /// Ask for text that may be left empty.
    pub fn optional_text(&mut self, label: &str, options: PrompterOptions) -> AppResult<String> {
        self.run_with_retries(options, |backend| backend.run_line(label, &accept_any))
    }

    /// Ask for optional text, substituting `default` for blank input.
    pub fn optional_text_with_default(
        &mut self,
        label: &str,
        default: &str,
        options: PrompterOptions,
    ) -> AppResult<String> {
        let label = format_label(label, default);
        self.run_with_retries(options, |backend| {
            let input = backend.run_line(&label, &accept_any)?;
            Ok(resolve_default(&input, default))
        })
    }

    /// Ask for an http(s) URL or nothing. The result is lowercased.
    pub fn url(&mut self, label: &str, options: PrompterOptions) -> AppResult<String> {
        self.run_with_retries(options, |backend| read_url(backend, label))
    }

    /// Ask for an http(s) URL, substituting `default` for empty input.
    ///
    /// The result is lowercased whichever value it came from.
    pub fn url_with_default(
        &mut self,
        label: &str,
        default: &str,
        options: PrompterOptions,
    ) -> AppResult<String> {
        let label = format_label(label, default);
        self.run_with_retries(options, |backend| {
            let url = read_url(backend, &label)?;
            Ok(resolve_default(&url, default).to_lowercase())
        })
    }
}

fn accept_any(_input: &str) -> Result<(), ValidationError> {
    Ok(())
}

/// One URL attempt, without retries of its own.
fn read_url<B: PromptBackend>(backend: &mut B, label: &str) -> AppResult<String> {
    let url = backend.run_line(label, &validate_url)?;
    Ok(url.to_lowercase())
}
