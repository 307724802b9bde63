//! Bounded retry policy for prompt calls.
//!
//! A single counter is kept per `Prompter` handle and shared by every prompt
//! kind. It is bumped on every attempt, cleared by a successful one, and left
//! as-is when a call gives up, so a later call through the same handle gives
//! up after its first failure until something succeeds again.

use promter_core::PrompterOptions;

/// Retries allowed while the counter stays at or below this value.
pub const MAX_RETRIES: u32 = 3;

/// What the prompt loop should do after an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Issue the same prompt again
    Retry,
    /// Return this attempt's outcome to the caller
    Finish,
}

/// Retry counter owned by a prompter handle.
#[derive(Debug, Clone, Default)]
pub struct RetryState {
    count: u32,
}

impl RetryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counter value.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Clear the counter.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Record one attempt's outcome and decide whether to retry.
    ///
    /// With retries disabled the counter is left untouched.
    pub fn record<T, E>(
        &mut self,
        outcome: &Result<T, E>,
        options: PrompterOptions,
    ) -> RetryDecision {
        if !options.handle_retries() {
            return RetryDecision::Finish;
        }

        self.count = self.count.saturating_add(1);

        match outcome {
            Ok(_) => {
                self.count = 0;
                RetryDecision::Finish
            }
            Err(_) if self.count <= MAX_RETRIES => RetryDecision::Retry,
            Err(_) => RetryDecision::Finish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAIL: Result<(), ()> = Err(());
    const OK: Result<(), ()> = Ok(());

    #[test]
    fn test_three_retries_from_zero() {
        let mut state = RetryState::new();
        let opts = PrompterOptions::default();

        assert_eq!(state.record(&FAIL, opts), RetryDecision::Retry);
        assert_eq!(state.record(&FAIL, opts), RetryDecision::Retry);
        assert_eq!(state.record(&FAIL, opts), RetryDecision::Retry);
        assert_eq!(state.record(&FAIL, opts), RetryDecision::Finish);
        assert_eq!(state.count(), 4);
    }

    #[test]
    fn test_success_resets() {
        let mut state = RetryState::new();
        let opts = PrompterOptions::default();

        state.record(&FAIL, opts);
        state.record(&FAIL, opts);
        assert_eq!(state.record(&OK, opts), RetryDecision::Finish);
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_exhausted_counter_is_kept() {
        let mut state = RetryState::new();
        let opts = PrompterOptions::default();

        for _ in 0..4 {
            state.record(&FAIL, opts);
        }
        // Next failure gives up straight away
        assert_eq!(state.record(&FAIL, opts), RetryDecision::Finish);
        assert_eq!(state.count(), 5);
    }

    #[test]
    fn test_disabled_is_noop() {
        let mut state = RetryState::new();
        state.record(&FAIL, PrompterOptions::default());

        let off = PrompterOptions::no_retries();
        assert_eq!(state.record(&FAIL, off), RetryDecision::Finish);
        assert_eq!(state.record(&OK, off), RetryDecision::Finish);
        assert_eq!(state.count(), 1);
    }
}
