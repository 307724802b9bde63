//! Configuration management for promter.
//!
//! This module handles loading and merging configuration from multiple sources,
//! lowest precedence first:
//! - Built-in defaults
//! - Config file (`.promter/config.yaml` or an explicit path)
//! - Environment variables
//! - Command-line flags

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::options::PrompterOptions;

/// Config file looked up relative to the current directory.
pub const DEFAULT_CONFIG_PATH: &str = ".promter/config.yaml";

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Config file that was merged, if any
    pub config_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Base options for every prompter built from this config
    pub prompter: PrompterOptions,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    prompter: Option<PrompterOptions>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// `config_file` takes precedence over `PROMTER_CONFIG`; when neither is
    /// given, `.promter/config.yaml` is merged if it exists. An explicitly
    /// named file that does not exist is an error.
    ///
    /// Environment variables:
    /// - `PROMTER_CONFIG`: Path to config file
    /// - `PROMTER_NO_RETRIES`: Disable automatic retries (any value except `0`/`false`)
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use promter_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None).expect("Failed to load config");
    /// println!("Retries: {}", config.prompter.handle_retries());
    /// ```
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let explicit = config_file
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("PROMTER_CONFIG").ok().map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                Self::default().merge_yaml(&path)?
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::default().merge_yaml(&path)?
                } else {
                    Self::default()
                }
            }
        };

        // Environment variables override YAML config
        if let Ok(value) = std::env::var("PROMTER_NO_RETRIES") {
            if is_truthy(&value) {
                config.prompter = config.prompter.merge(PrompterOptions::no_retries());
            }
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    pub fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        // An empty file deserializes to null
        let config_file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
        };

        let mut result = self.clone();
        result.config_file = Some(path.to_path_buf());

        if let Some(prompter) = config_file.prompter {
            result.prompter = result.prompter.merge(prompter);
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        tracing::debug!("Merged config file {:?}", path);
        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Flags take precedence over the config file and environment variables.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
        no_retries: bool,
    ) -> Self {
        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        if no_retries {
            self.prompter = self.prompter.merge(PrompterOptions::no_retries());
        }

        self
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "" | "0" | "false" | "no")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.prompter.handle_retries());
        assert!(config.log_level.is_none());
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default().with_overrides(None, true, true, true);

        assert!(config.verbose);
        assert!(config.no_color);
        assert_eq!(config.log_level, Some("debug".to_string()));
        assert!(!config.prompter.handle_retries());
    }

    #[test]
    fn test_explicit_log_level_beats_verbose() {
        let config =
            AppConfig::default().with_overrides(Some("trace".to_string()), true, false, false);
        assert_eq!(config.log_level, Some("trace".to_string()));
        assert!(config.prompter.handle_retries());
    }

    #[test]
    fn test_merge_yaml() {
        let file = yaml_file(
            r#"
prompter:
  handleRetries: false
logging:
  level: debug
  color: false
"#,
        );

        let config = AppConfig::default().merge_yaml(file.path()).unwrap();
        assert!(!config.prompter.handle_retries());
        assert_eq!(config.log_level, Some("debug".to_string()));
        assert!(config.no_color);
        assert_eq!(config.config_file.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_merge_yaml_partial_keeps_other_fields() {
        let file = yaml_file("logging:\n  level: warn\n");

        let base = AppConfig::default().with_overrides(None, false, false, true);
        let config = base.merge_yaml(file.path()).unwrap();
        assert!(!config.prompter.handle_retries());
        assert_eq!(config.log_level, Some("warn".to_string()));
    }

    #[test]
    fn test_merge_empty_yaml() {
        let file = yaml_file("");
        let config = AppConfig::default().merge_yaml(file.path()).unwrap();
        assert!(config.prompter.handle_retries());
    }

    #[test]
    fn test_merge_malformed_yaml() {
        let file = yaml_file("prompter: [not, a, map");
        let result = AppConfig::default().merge_yaml(file.path());
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/promter.yaml")));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy("true"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("FALSE"));
        assert!(!is_truthy(""));
    }
}
