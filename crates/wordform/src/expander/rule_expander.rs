//! Derived-form expansion.
//!
//! Walks the affix index for a base word's rule keys and collects every
//! successful application, each tagged with the rule that produced it so a
//! consumer can point back at the `.aff` line. Unknown keys and rules whose
//! conditions fail simply contribute nothing — a word with no derivable
//! forms is an empty answer, never an error.

use tracing::debug;

use crate::indexer::AffixIndex;
use crate::models::{AffixKind, AffixRule, CombinedForm, DerivedForm};

/// Expands base words into their derived forms against one affix index.
#[derive(Debug, Clone, Copy)]
pub struct RuleExpander<'a> {
  index: &'a AffixIndex,
}

impl<'a> RuleExpander<'a> {
  /// Creates an expander over `index`.
  pub fn new(index: &'a AffixIndex) -> Self {
    Self { index }
  }

  /// Single-rule applications: for each key, every rule in its group is
  /// tried against `word` and the successes are collected in rule order.
  pub fn expand(&self, word: &str, rule_keys: &[char]) -> Vec<DerivedForm<'a>> {
    let mut forms = Vec::new();

    for key in rule_keys {
      let group = self.index.rules_for_key(&key.to_string());
      for rule in group {
        if let Some(form) = self.index.apply(rule, word) {
          forms.push(form);
        }
      }
    }

    debug!(word = %word, keys = rule_keys.len(), forms = forms.len(), "expanded word");
    forms
  }

  /// Cross-type composition: a combineable suffix rule applied to the base
  /// word, then a combineable prefix rule applied to the suffixed result.
  ///
  /// Both rules must come from the word's own key set and each step must
  /// validate on its own — the suffix against the base word, the prefix
  /// against the already-suffixed word. Suffix-first order follows the
  /// Hunspell cross-product convention (the prefix attaches to the suffixed
  /// stem).
  pub fn expand_combined(&self, word: &str, rule_keys: &[char]) -> Vec<CombinedForm<'a>> {
    let rules: Vec<&AffixRule> = rule_keys
      .iter()
      .flat_map(|key| self.index.rules_for_key(&key.to_string()))
      .collect();

    let suffixes = rules.iter().filter(|r| r.combineable && r.kind == AffixKind::Suffix);

    let mut combined = Vec::new();
    for suffix_rule in suffixes {
      let Some(suffix_step) = self.index.apply(suffix_rule, word) else {
        continue;
      };

      let prefixes = rules.iter().filter(|r| r.combineable && r.kind == AffixKind::Prefix);
      for prefix_rule in prefixes {
        if let Some(prefix_step) = self.index.apply(prefix_rule, &suffix_step.new_word) {
          combined.push(CombinedForm {
            suffix_step: suffix_step.clone(),
            prefix_step,
          });
        }
      }
    }

    debug!(word = %word, forms = combined.len(), "expanded cross-type combinations");
    combined
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
