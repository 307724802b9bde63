//! Per-prompter and per-call options.
//!
//! Every field is optional so that a value can act as an override. Merging is
//! per field and last-writer-wins; unset fields resolve to the documented
//! defaults.

use serde::{Deserialize, Serialize};

/// Default for [`PrompterOptions::handle_retries`].
pub const DEFAULT_HANDLE_RETRIES: bool = true;

/// Options controlling how a prompt call behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrompterOptions {
    /// Re-issue a failed prompt automatically (default: true)
    #[serde(
        rename = "handleRetries",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub handle_retries: Option<bool>,
}

impl PrompterOptions {
    /// Options with every field explicitly set to its default.
    pub fn defaults() -> Self {
        Self {
            handle_retries: Some(DEFAULT_HANDLE_RETRIES),
        }
    }

    /// Override that turns automatic retries off.
    pub fn no_retries() -> Self {
        Self {
            handle_retries: Some(false),
        }
    }

    /// Set whether failed attempts are retried.
    pub fn with_handle_retries(mut self, handle_retries: bool) -> Self {
        self.handle_retries = Some(handle_retries);
        self
    }

    /// Merge `other` on top of `self`. Fields set in `other` win.
    pub fn merge(self, other: PrompterOptions) -> Self {
        Self {
            handle_retries: other.handle_retries.or(self.handle_retries),
        }
    }

    /// Fold a sequence of overrides onto the defaults.
    pub fn resolve<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = PrompterOptions>,
    {
        overrides
            .into_iter()
            .fold(Self::defaults(), |acc, next| acc.merge(next))
    }

    /// Effective value of `handle_retries`.
    pub fn handle_retries(&self) -> bool {
        self.handle_retries.unwrap_or(DEFAULT_HANDLE_RETRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(PrompterOptions::defaults().handle_retries());
        assert!(PrompterOptions::default().handle_retries());
        assert_eq!(PrompterOptions::default().handle_retries, None);
    }

    #[test]
    fn test_merge_overrides_set_fields_only() {
        let base = PrompterOptions::no_retries();
        assert!(!base.merge(PrompterOptions::default()).handle_retries());
        assert!(base
            .merge(PrompterOptions::default().with_handle_retries(true))
            .handle_retries());
    }

    #[test]
    fn test_resolve_last_writer_wins() {
        let resolved = PrompterOptions::resolve([
            PrompterOptions::no_retries(),
            PrompterOptions::default(),
        ]);
        assert!(!resolved.handle_retries());

        let resolved = PrompterOptions::resolve([
            PrompterOptions::no_retries(),
            PrompterOptions::default().with_handle_retries(true),
        ]);
        assert!(resolved.handle_retries());

        assert!(PrompterOptions::resolve([]).handle_retries());
    }

    #[test]
    fn test_yaml_key() {
        let opts: PrompterOptions = serde_yaml::from_str("handleRetries: false").unwrap();
        assert_eq!(opts, PrompterOptions::no_retries());

        let empty: PrompterOptions = serde_yaml::from_str("{}").unwrap();
        assert_eq!(empty, PrompterOptions::default());
    }
}
