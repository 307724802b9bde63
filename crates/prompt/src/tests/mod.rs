//! Scenario tests for `Prompter`, driven by an in-memory backend.


use std::collections::VecDeque;

use promter_core::{AppError, AppResult};

use crate::backend::{LineValidator, PromptBackend};

/// One scripted answer.
#[derive(Debug, Clone)]
pub(crate) enum Answer {
    /// A submitted line; run through the validator
    Line(String),
    /// A selected index
    Choice(usize),
    /// The widget itself fails
    Fail(String),
}

pub(crate) fn line(text: &str) -> Answer {
    Answer::Line(text.to_string())
}

/// Backend replaying queued answers.
///
/// A line that the validator rejects is returned as a validation error, as a
/// widget that gives up on invalid input would.
#[derive(Debug, Default)]
pub(crate) struct ScriptedBackend {
    answers: VecDeque<Answer>,
    pub line_calls: usize,
    pub select_calls: usize,
    pub labels: Vec<String>,
}

impl ScriptedBackend {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, answer: Answer) {
        self.answers.push_back(answer);
    }

    pub fn calls(&self) -> usize {
        self.line_calls + self.select_calls
    }

    fn next(&mut self, label: &str) -> AppResult<Answer> {
        self.labels.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| AppError::Input("script exhausted".to_string()))
    }
}

impl PromptBackend for ScriptedBackend {
    fn run_select(&mut self, label: &str, items: &[String]) -> AppResult<usize> {
        self.select_calls += 1;
        match self.next(label)? {
            Answer::Choice(index) if index < items.len() => Ok(index),
            Answer::Choice(index) => Err(AppError::Input(format!("no item {}", index))),
            Answer::Fail(message) => Err(AppError::Input(message)),
            Answer::Line(_) => Err(AppError::Input("expected a choice".to_string())),
        }
    }

    fn run_line(&mut self, label: &str, validate: LineValidator<'_>) -> AppResult<String> {
        self.line_calls += 1;
        match self.next(label)? {
            Answer::Line(text) => {
                validate(text.as_str())?;
                Ok(text)
            }
            Answer::Fail(message) => Err(AppError::Input(message)),
            Answer::Choice(_) => Err(AppError::Input("expected a line".to_string())),
        }
    }
}
