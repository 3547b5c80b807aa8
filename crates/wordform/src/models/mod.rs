//! models module
pub mod model_definition;

/// Re-export major data types
pub use model_definition::{AffixKind, AffixRule, CombinedForm, DerivedForm, DictionaryEntry};
