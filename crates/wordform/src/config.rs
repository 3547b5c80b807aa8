// crates/wordform/src/config.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;

/// Top-level configuration for wordform.
#[derive(Debug, Clone, Deserialize)]
pub struct WordformConfig {
  /// [dictionary] section
  pub dictionary: DictionaryConfig,
  /// [search] section
  #[serde(default)]
  pub search: SearchConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [dictionary] section configuration: where the Hunspell source pair
/// lives. The two files are read once at service init; nothing is written
/// back.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
  /// Path of the `.dic` word list (e.g. "dictionaries/en-GB/index.dic")
  pub dic_path: PathBuf,
  /// Path of the `.aff` affix rule file (e.g. "dictionaries/en-GB/index.aff")
  pub aff_path: PathBuf,
}

/// [search] section configuration.
///
/// These limits only bound the `search_top` display convenience; the
/// underlying search itself never truncates.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
  /// Default number of results handed to display callers
  #[serde(default = "default_search_limit")]
  pub default_limit: usize,
  /// Upper bound a caller-supplied limit is clamped to
  #[serde(default = "default_max_search_limit")]
  pub max_limit: usize,
}

/// Default display result count (the reference UI shows ten).
fn default_search_limit() -> usize {
  10
}

/// Default clamp for caller-supplied limits.
fn default_max_search_limit() -> usize {
  100
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      default_limit: default_search_limit(),
      max_limit: default_max_search_limit(),
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Returns the level as the lowercase name `tracing` filters use.
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

// ===== Accessor Methods =====

impl WordformConfig {
  /// Returns the configured `.dic` path.
  pub fn dic_path(&self) -> &Path {
    &self.dictionary.dic_path
  }

  /// Returns the configured `.aff` path.
  pub fn aff_path(&self) -> &Path {
    &self.dictionary.aff_path
  }

  /// Returns the default search result limit.
  pub fn default_search_limit(&self) -> usize {
    self.search.default_limit
  }

  /// Returns the maximum search result limit.
  pub fn max_search_limit(&self) -> usize {
    self.search.max_limit
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `search.default_limit` >= 1
  /// - `search.max_limit` >= `search.default_limit`
  /// - `dictionary.dic_path` / `dictionary.aff_path` point at files
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    // search.default_limit >= 1
    if self.search.default_limit < 1 {
      return Err(ConfigError::InvalidSearchDefaultLimit {
        actual: self.search.default_limit,
      });
    }

    // search.max_limit >= search.default_limit
    if self.search.max_limit < self.search.default_limit {
      return Err(ConfigError::InvalidSearchMaxLimit {
        default_limit: self.search.default_limit,
        max_limit: self.search.max_limit,
      });
    }

    // both dictionary source files exist
    for path in [&self.dictionary.dic_path, &self.dictionary.aff_path] {
      if !path.is_file() {
        return Err(ConfigError::DictionaryFileMissing { path: path.clone() });
      }
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  // ─── Test Helpers ─────────────────────────────────────────────────────

  /// Creates a base valid configuration backed by real (empty) files.
  fn create_valid_config(temp_dir: &TempDir) -> WordformConfig {
    let dic_path = temp_dir.path().join("index.dic");
    let aff_path = temp_dir.path().join("index.aff");
    fs::write(&dic_path, "0\n").unwrap();
    fs::write(&aff_path, "").unwrap();

    WordformConfig {
      dictionary: DictionaryConfig { dic_path, aff_path },
      search: SearchConfig {
        default_limit: 10,
        max_limit: 100,
      },
      logging: LoggingConfig {
        level: LogLevel::Info,
      },
    }
  }

  // ─── validate() Normal Cases ──────────────────────────────────────────

  #[test]
  fn validate_accepts_valid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_valid_config(&temp_dir);

    assert!(config.validate().is_ok(), "valid config should pass validation");
  }

  #[test]
  fn validate_accepts_default_limit_equals_max_limit() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.search.default_limit = 50;
    config.search.max_limit = 50; // equal is ok

    assert!(config.validate().is_ok());
  }

  // ─── validate() Abnormal Cases ────────────────────────────────────────

  #[test]
  fn validate_rejects_default_limit_zero() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.search.default_limit = 0;

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::InvalidSearchDefaultLimit { actual } => assert_eq!(actual, 0),
      _ => panic!("expected InvalidSearchDefaultLimit error"),
    }
  }

  #[test]
  fn validate_rejects_max_limit_less_than_default() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.search.default_limit = 50;
    config.search.max_limit = 10; // less than default

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::InvalidSearchMaxLimit {
        default_limit,
        max_limit,
      } => {
        assert_eq!(default_limit, 50);
        assert_eq!(max_limit, 10);
      }
      _ => panic!("expected InvalidSearchMaxLimit error"),
    }
  }

  #[test]
  fn validate_rejects_missing_dic_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.dictionary.dic_path = temp_dir.path().join("gone.dic");

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::DictionaryFileMissing { .. }));
  }

  #[test]
  fn validate_rejects_missing_aff_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.dictionary.aff_path = temp_dir.path().join("gone.aff");

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::DictionaryFileMissing { path } => {
        assert!(path.ends_with("gone.aff"));
      }
      _ => panic!("expected DictionaryFileMissing error"),
    }
  }

  #[test]
  fn validate_reports_limit_errors_before_path_errors() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.search.default_limit = 0; // first error
    config.dictionary.dic_path = temp_dir.path().join("gone.dic"); // second error candidate

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSearchDefaultLimit { .. }));
  }

  // ─── Accessor Method Tests ────────────────────────────────────────────

  #[test]
  fn accessors_return_configured_values() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_valid_config(&temp_dir);

    assert!(config.dic_path().ends_with("index.dic"));
    assert!(config.aff_path().ends_with("index.aff"));
    assert_eq!(config.default_search_limit(), 10);
    assert_eq!(config.max_search_limit(), 100);
    assert_eq!(config.log_level(), LogLevel::Info);
  }

  // ─── Deserialization Tests ────────────────────────────────────────────

  #[test]
  fn config_deserializes_with_all_sections() {
    let json = r#"{
      "dictionary": { "dic_path": "en-GB/index.dic", "aff_path": "en-GB/index.aff" },
      "search": { "default_limit": 5, "max_limit": 20 },
      "logging": { "level": "debug" }
    }"#;

    let config: WordformConfig = serde_json::from_str(json).expect("should deserialize");

    assert_eq!(config.default_search_limit(), 5);
    assert_eq!(config.max_search_limit(), 20);
    assert_eq!(config.log_level(), LogLevel::Debug);
  }

  #[test]
  fn config_deserializes_with_dictionary_section_only() {
    // [search] and [logging] are defaulted
    let json = r#"{
      "dictionary": { "dic_path": "index.dic", "aff_path": "index.aff" }
    }"#;

    let config: WordformConfig = serde_json::from_str(json).expect("should deserialize");

    assert_eq!(config.default_search_limit(), 10);
    assert_eq!(config.max_search_limit(), 100);
    assert_eq!(config.log_level(), LogLevel::Info);
  }

  #[test]
  fn log_level_as_str_matches_filter_names() {
    assert_eq!(LogLevel::Trace.as_str(), "trace");
    assert_eq!(LogLevel::Debug.as_str(), "debug");
    assert_eq!(LogLevel::Info.as_str(), "info");
    assert_eq!(LogLevel::Warn.as_str(), "warn");
    assert_eq!(LogLevel::Error.as_str(), "error");
  }
}
