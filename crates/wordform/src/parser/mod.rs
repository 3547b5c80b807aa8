//! parser module
//!
//! Line parsers for the two Hunspell source formats. Both are total:
//! malformed input degrades per line and never aborts the load.

pub mod affix_parser;
pub mod dictionary_parser;

/// Re-export major parser entry points
pub use affix_parser::parse_affix_file;
pub use dictionary_parser::{DictionaryFile, parse_dictionary_file};
