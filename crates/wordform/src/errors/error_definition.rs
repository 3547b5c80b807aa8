//! Error definitions.
//!
//! Only total-load failures surface as errors: an unreadable dictionary file
//! or an invalid configuration. Malformed lines inside a `.aff`/`.dic` file
//! are never fatal — the parsers degrade per line (missing fields filled
//! empty, blank words skipped) and report through `tracing::warn!`, so one
//! bad line cannot abort the rest of the load.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Configuration (`WordformConfig`) validation errors.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// search.default_limit < 1
  #[error("search.default_limit must be at least 1: actual={actual}")]
  InvalidSearchDefaultLimit {
    /// The value that was supplied
    actual: usize,
  },

  /// search.max_limit < search.default_limit
  #[error(
    "search.max_limit must be at least search.default_limit: \
     default_limit={default_limit}, max_limit={max_limit}"
  )]
  InvalidSearchMaxLimit {
    /// search.default_limit
    default_limit: usize,
    /// search.max_limit
    max_limit: usize,
  },

  /// dictionary.dic_path / dictionary.aff_path does not point at a file
  #[error("dictionary source file not found: path={path:?}")]
  DictionaryFileMissing {
    /// The missing path
    path: PathBuf,
  },
}

/// Dictionary loading errors.
///
/// Loading from already-materialized text cannot fail (an empty pair of
/// texts is a valid, empty dictionary), so the only failure mode is reading
/// the source files off disk.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// Reading a `.dic`/`.aff` file failed
  #[error("failed to read dictionary source file: path={path:?}, error={source}")]
  FileRead {
    /// The path that could not be read
    path: PathBuf,
    /// The underlying IO error
    #[source]
    source: Arc<io::Error>,
  },
}

/// Unified error.
/// Every public API of this crate that can fail returns this error;
/// use it as `WordformResult<T>` = `Result<T, WordformError>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum WordformError {
  /// Dictionary loading error
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard Result alias of the wordform crate.
pub type WordformResult<T> = Result<T, WordformError>;

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
