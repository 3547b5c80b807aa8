//! Affix rule index.
//!
//! Built once from the parsed rule sequence and immutable afterwards. Two
//! responsibilities: group lookup (`rule key -> rules`) and rule
//! application (`rule + word -> derived form`), including the condition
//! matching that gates it.
//!
//! Conditions are the regex-like patterns of the `.aff` format
//! (`[^aeiou]y`, `.`, ...). A suffix condition constrains the end of the
//! word and a prefix condition its start, so patterns are compiled anchored
//! accordingly. Compilation happens once per distinct (kind, pattern) pair
//! at build time; a pattern that does not compile makes its rules
//! inapplicable instead of failing the load.

use std::collections::HashMap;

use regex::Regex;
use tracing::{debug, warn};

use crate::models::{AffixKind, AffixRule, DerivedForm};

/// Compiled form of a rule condition.
#[derive(Debug)]
enum CompiledCondition {
  /// No condition column: every word qualifies
  Always,
  /// Anchored pattern to match against the word
  Pattern(Regex),
  /// The pattern failed to compile: no word qualifies
  Never,
}

impl CompiledCondition {
  fn matches(&self, word: &str) -> bool {
    match self {
      CompiledCondition::Always => true,
      CompiledCondition::Pattern(pattern) => pattern.is_match(word),
      CompiledCondition::Never => false,
    }
  }
}

/// Lookup and application structure over the parsed affix rules.
pub struct AffixIndex {
  /// All rules, in file order
  rules: Vec<AffixRule>,

  /// Rule-group lookup: key -> indices into `rules`
  by_key: HashMap<String, Vec<usize>>,

  /// Condition cache, per kind (anchoring differs) and verbatim pattern
  conditions: HashMap<AffixKind, HashMap<String, CompiledCondition>>,
}

impl AffixIndex {
  /// Builds the index from the parsed rule sequence. Distinct condition
  /// patterns are compiled here, once; unparsable ones are reported through
  /// `warn!` and their rules never apply.
  pub fn new(rules: Vec<AffixRule>) -> Self {
    let mut by_key: HashMap<String, Vec<usize>> = HashMap::new();
    let mut conditions: HashMap<AffixKind, HashMap<String, CompiledCondition>> = HashMap::new();

    for (index, rule) in rules.iter().enumerate() {
      by_key.entry(rule.key.clone()).or_default().push(index);

      conditions
        .entry(rule.kind)
        .or_default()
        .entry(rule.condition.clone())
        .or_insert_with(|| compile_condition(rule));
    }

    debug!(rules = rules.len(), groups = by_key.len(), "affix index built");

    Self {
      rules,
      by_key,
      conditions,
    }
  }

  /// All rules of the group identified by `key`, in file order. Empty for
  /// keys no group declares.
  pub fn rules_for_key(&self, key: &str) -> Vec<&AffixRule> {
    self
      .by_key
      .get(key)
      .map(|indices| indices.iter().map(|&index| &self.rules[index]).collect())
      .unwrap_or_default()
  }

  /// Applies `rule` to `word`.
  ///
  /// `None` when the word fails the rule's condition, or when the rule
  /// strips characters the word does not have at the relevant end. On
  /// success the derived form carries the producing rule and the decoded
  /// add/remove/condition columns.
  pub fn apply<'r>(&self, rule: &'r AffixRule, word: &str) -> Option<DerivedForm<'r>> {
    if !self.condition_matches(rule, word) {
      return None;
    }

    let new_word = match rule.kind {
      AffixKind::Suffix => match rule.strip_chars() {
        Some(strip) => {
          if !word.ends_with(strip) {
            return None;
          }
          let mut stem = word[..word.len() - strip.len()].to_string();
          stem.push_str(rule.affix_text());
          stem
        }
        None => format!("{}{}", word, rule.affix_text()),
      },
      AffixKind::Prefix => match rule.strip_chars() {
        Some(strip) => {
          if !word.starts_with(strip) {
            return None;
          }
          format!("{}{}", rule.affix_text(), &word[strip.len()..])
        }
        None => format!("{}{}", rule.affix_text(), word),
      },
    };

    Some(DerivedForm {
      new_word,
      rule,
      add: rule.affix_text().to_string(),
      remove: rule.strip_chars().unwrap_or_default().to_string(),
      matched_condition: rule.anchored_condition(),
    })
  }

  /// All indexed rules, in file order.
  pub fn rules(&self) -> &[AffixRule] {
    &self.rules
  }

  /// Number of indexed rules.
  pub fn len(&self) -> usize {
    self.rules.len()
  }

  /// True when the index holds no rules (e.g. an empty `.aff` file).
  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }

  /// Checks `word` against the rule's compiled condition. Rules that were
  /// not part of this index (caller-constructed) fall back to a one-off
  /// compilation.
  fn condition_matches(&self, rule: &AffixRule, word: &str) -> bool {
    match self.conditions.get(&rule.kind).and_then(|m| m.get(rule.condition.as_str())) {
      Some(compiled) => compiled.matches(word),
      None => compile_condition(rule).matches(word),
    }
  }
}

impl std::fmt::Debug for AffixIndex {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AffixIndex")
      .field("rules", &self.rules.len())
      .field("groups", &self.by_key.len())
      .finish_non_exhaustive()
  }
}

/// Compiles a rule's condition column, anchored per kind: suffix patterns
/// must match at the end of the word, prefix patterns at the start.
fn compile_condition(rule: &AffixRule) -> CompiledCondition {
  if !rule.has_condition() {
    return CompiledCondition::Always;
  }

  let anchored = match rule.kind {
    AffixKind::Suffix => format!("(?:{})$", rule.condition),
    AffixKind::Prefix => format!("^(?:{})", rule.condition),
  };

  match Regex::new(&anchored) {
    Ok(pattern) => CompiledCondition::Pattern(pattern),
    Err(error) => {
      warn!(
        line = rule.source_line,
        condition = %rule.condition,
        %error,
        "unparsable affix condition, rule will never apply"
      );
      CompiledCondition::Never
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
