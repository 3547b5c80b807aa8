//! indexer module
//!
//! Builds the affix rule lookup once at load time and exposes rule
//! application over it.

pub mod affix_index;

/// Re-export the index type
pub use affix_index::AffixIndex;
