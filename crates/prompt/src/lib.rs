//! Interactive prompting for promter.
//!
//! This crate provides typed terminal prompts with:
//! - Default values shown in the label and substituted for empty input
//! - Per-kind validation (required text, http(s) URLs)
//! - A bounded automatic-retry policy shared across a `Prompter` handle
//! - A pluggable backend, `dialoguer` by default
//!
//! # Example
//! ```no_run
//! use promter_core::PrompterOptions;
//! use promter_prompt::Prompter;
//!
//! # fn example() -> promter_core::AppResult<()> {
//! let mut prompter = Prompter::new();
//! let env = prompter.text_with_default("Env", "prod", PrompterOptions::default())?;
//! let homepage = prompter.url("Homepage", PrompterOptions::default())?;
//! println!("{} {}", env, homepage);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod label;
pub mod prompter;
pub mod retry;
pub mod types;
pub mod validate;

#[cfg(test)]
mod tests;

// Re-export main types
pub use backend::{DialoguerBackend, LineValidator, PromptBackend};
pub use label::format_label;
pub use prompter::Prompter;
pub use retry::{RetryDecision, RetryState, MAX_RETRIES};
pub use types::{Selection, YES_NO};
