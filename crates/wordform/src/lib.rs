//! wordform - Hunspell dictionary search and affix expansion library
//!
//! Parses a Hunspell-style `.dic`/`.aff` pair into immutable in-memory
//! structures and answers two queries: ranked substring search over base
//! words, and the set of derived forms an entry's affix rules produce.

/// Configuration module - defines WordformConfig and its section structs
pub mod config;

/// Error module - defines WordformError, WordformResult and section errors
pub mod errors;

/// Expander module - derives inflected forms by walking the affix index
pub mod expander;

/// Index module - rule-key lookup and affix rule application
pub mod indexer;

/// Data model module - DictionaryEntry, AffixRule, DerivedForm etc.
pub mod models;

/// Parser module - line parsers for the `.aff` and `.dic` formats
pub mod parser;

/// Search module - ranked substring search over dictionary entries
pub mod searcher;

/// Service module - WordformService, the top-level facade
pub mod service;

/// Re-exports
pub use config::{LogLevel, WordformConfig};
pub use errors::{WordformError, WordformResult};
pub use service::WordformService;
