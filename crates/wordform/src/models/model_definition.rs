//! Data Model Definition

use serde::{Deserialize, Serialize};

/// Sentinel the `.aff` format uses for "nothing here" in the strip and
/// affix columns (e.g. `SFX D 0 s .` strips nothing and appends `s`).
const ZERO_FIELD: &str = "0";

/// Whether an affix rule attaches at the front or the back of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffixKind {
  /// Prepended to the word (`PFX` lines)
  Prefix,
  /// Appended to the word (`SFX` lines)
  Suffix,
}

impl AffixKind {
  /// Returns the `.aff` line tag for this kind.
  pub fn tag(&self) -> &'static str {
    match self {
      AffixKind::Prefix => "PFX",
      AffixKind::Suffix => "SFX",
    }
  }

  /// True for prefix rules.
  pub fn is_prefix(&self) -> bool {
    matches!(self, AffixKind::Prefix)
  }
}

impl std::fmt::Display for AffixKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.tag())
  }
}

/// One rule line parsed from a `.aff` file.
///
/// A `key` is NOT unique: every line of a rule group repeats the group key,
/// so several `AffixRule` values share a key and are distinguished by their
/// strip/affix/condition columns. Dictionary entries reference keys, never
/// individual rules.
///
/// The `strip`, `affix` and `condition` columns are stored verbatim as they
/// appeared in the file; [`strip_chars`](Self::strip_chars) and
/// [`affix_text`](Self::affix_text) decode the `"0"`-means-none convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixRule {
  /// Prefix or suffix, from the line tag column
  pub kind: AffixKind,

  /// Rule group key (usually a single character, e.g. `D`)
  pub key: String,

  /// Characters removed before attaching the affix, verbatim (`"0"` = none)
  pub strip: String,

  /// Characters attached to the word, verbatim (`"0"` = none)
  pub affix: String,

  /// Regex-like pattern constraining applicable words, verbatim ("" = any)
  pub condition: String,

  /// Whether this rule may compose with a rule of the opposite kind,
  /// carried from the most recent group header line
  pub combineable: bool,

  /// 1-based line number in the original `.aff` file
  pub source_line: usize,
}

impl AffixRule {
  /// The characters this rule strips, or `None` when the column is empty or
  /// the `"0"` sentinel.
  pub fn strip_chars(&self) -> Option<&str> {
    if self.strip.is_empty() || self.strip == ZERO_FIELD {
      None
    } else {
      Some(&self.strip)
    }
  }

  /// The text this rule attaches, with the `"0"` sentinel decoded to empty.
  pub fn affix_text(&self) -> &str {
    if self.affix == ZERO_FIELD { "" } else { &self.affix }
  }

  /// True when the rule has a condition column constraining it.
  pub fn has_condition(&self) -> bool {
    !self.condition.is_empty()
  }

  /// The condition as it is actually matched: anchored at the end of the
  /// word for suffix rules, at the start for prefix rules.
  ///
  /// Empty for unconditional rules.
  pub fn anchored_condition(&self) -> String {
    if self.condition.is_empty() {
      return String::new();
    }
    match self.kind {
      AffixKind::Suffix => format!("{}$", self.condition),
      AffixKind::Prefix => format!("^{}", self.condition),
    }
  }
}

/// One base word parsed from a `.dic` file.
///
/// `rule_keys` holds the single-character codes listed after the `/`
/// separator (`cat/SD` → `['S', 'D']`); the codes reference rule groups in
/// the affix index, they carry no ownership. Entries are created once at
/// load time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
  /// The base word (never empty)
  pub word: String,

  /// Affix rule-group keys attached to the word (may be empty)
  #[serde(default)]
  pub rule_keys: Vec<char>,

  /// 1-based line number in the original `.dic` file (the count header
  /// occupies line 1, so entries start at 2)
  pub source_line: usize,
}

impl DictionaryEntry {
  /// Constructor for DictionaryEntry
  pub fn new(word: impl Into<String>, rule_keys: Vec<char>, source_line: usize) -> Self {
    Self {
      word: word.into(),
      rule_keys,
      source_line,
    }
  }

  /// True when the entry references at least one rule group.
  pub fn has_rule_keys(&self) -> bool {
    !self.rule_keys.is_empty()
  }
}

/// A word derived by applying one affix rule to a base word.
///
/// Computed on demand by the expander and borrowed from the affix index;
/// never persisted. `add`/`remove`/`matched_condition` duplicate the decoded
/// rule columns so a consumer can render the derivation (`+ies`, `-y`,
/// `[^aeiou]y$`) without re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedForm<'a> {
  /// The derived word
  pub new_word: String,

  /// The rule that produced this form
  pub rule: &'a AffixRule,

  /// Text the rule attached (decoded, may be empty)
  pub add: String,

  /// Text the rule stripped (decoded, may be empty)
  pub remove: String,

  /// The anchored pattern the base word was matched against
  pub matched_condition: String,
}

/// A word derived by composing a suffix rule and a prefix rule.
///
/// Produced only by the expander's combined-application path: the suffix
/// applies to the base word, the prefix to the already-suffixed result.
/// Both steps keep their own provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedForm<'a> {
  /// First step: the suffix rule applied to the base word
  pub suffix_step: DerivedForm<'a>,

  /// Second step: the prefix rule applied to `suffix_step.new_word`
  pub prefix_step: DerivedForm<'a>,
}

impl CombinedForm<'_> {
  /// The fully composed word.
  pub fn new_word(&self) -> &str {
    &self.prefix_step.new_word
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
