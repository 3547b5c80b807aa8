// crates/wordform/src/service.rs

//! WordformService: the integration facade of the wordform crate.
//!
//! - Source parsing (parser module) - once, at construction
//! - Affix rule lookup/application (AffixIndex)
//! - Ranked substring search (SearchEngine)
//! - Derived-form expansion (RuleExpander)
//!
//! A UI or host service only needs to deal with this struct.
//!
//! # Atomicity
//!
//! The loaded state is immutable and a service value is fully built before
//! it can be observed, so all queries are pure reads over complete data: a
//! consumer can never see a partially-built index. A host that parses in a
//! background task publishes the finished `WordformService` value itself.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::config::{SearchConfig, WordformConfig};
use crate::errors::error_definition::{DictionaryError, WordformResult};
use crate::expander::RuleExpander;
use crate::indexer::AffixIndex;
use crate::models::{AffixRule, CombinedForm, DerivedForm, DictionaryEntry};
use crate::parser::{parse_affix_file, parse_dictionary_file};
use crate::searcher::SearchEngine;

/// The loaded dictionary and its query surface.
#[derive(Debug)]
pub struct WordformService {
  /// The `.dic` count header, verbatim (display only, never validated)
  declared_entry_count: String,

  /// Entries in file order; owned exclusively by this service
  entries: Vec<DictionaryEntry>,

  /// word -> entry indices (a stem may appear on several lines with
  /// different rule keys)
  word_index: HashMap<String, Vec<usize>>,

  /// Affix rule lookup/application, built once from the `.aff` rules
  affix_index: AffixIndex,

  /// Substring search engine
  search_engine: SearchEngine,

  /// Result count handed to display callers by `search_top`
  default_search_limit: usize,

  /// Clamp for caller-supplied limits in `search_top`
  max_search_limit: usize,
}

impl WordformService {
  /// Initialization: validate config, read both source files, parse and
  /// build the immutable query state.
  ///
  /// # Process Flow
  /// 1. Validate the configuration
  /// 2. Read the `.dic` and `.aff` files
  /// 3. Delegate to [`from_texts`](Self::from_texts)
  ///
  /// # Errors
  /// - Invalid configuration (limits, missing files)
  /// - A source file that cannot be read
  pub fn init(config: &WordformConfig) -> WordformResult<Self> {
    // Config validity (ConfigError converts via #[from])
    config.validate()?;

    let dic_text = read_source(config.dic_path())?;
    let aff_text = read_source(config.aff_path())?;

    let mut service = Self::from_texts(&dic_text, &aff_text);
    service.default_search_limit = config.default_search_limit();
    service.max_search_limit = config.max_search_limit();

    info!(
      entries = service.entries.len(),
      declared = %service.declared_entry_count,
      affix_rules = service.affix_index.len(),
      "dictionary loaded"
    );

    Ok(service)
  }

  /// Builds the service from already-materialized source texts.
  ///
  /// Cannot fail: malformed lines degrade inside the parsers, and an empty
  /// pair of texts is a valid, empty dictionary. Search limits take the
  /// `[search]` defaults; use [`init`](Self::init) to configure them.
  pub fn from_texts(dic_text: &str, aff_text: &str) -> Self {
    let dictionary = parse_dictionary_file(dic_text);
    let affix_index = AffixIndex::new(parse_affix_file(aff_text));

    let mut word_index: HashMap<String, Vec<usize>> = HashMap::new();
    for (index, entry) in dictionary.entries.iter().enumerate() {
      word_index.entry(entry.word.clone()).or_default().push(index);
    }

    let search_defaults = SearchConfig::default();

    Self {
      declared_entry_count: dictionary.declared_entry_count,
      entries: dictionary.entries,
      word_index,
      affix_index,
      search_engine: SearchEngine::new(),
      default_search_limit: search_defaults.default_limit,
      max_search_limit: search_defaults.max_limit,
    }
  }

  /// Ranked substring search over all entries. Never truncates; see
  /// [`search_top`](Self::search_top) for the display-bounded variant.
  pub fn search(&self, query: &str) -> Vec<&DictionaryEntry> {
    self.search_engine.search(query, &self.entries)
  }

  /// Ranked search bounded for display: `limit` defaults to the configured
  /// `search.default_limit` and is clamped to `search.max_limit`.
  pub fn search_top(&self, query: &str, limit: Option<usize>) -> Vec<&DictionaryEntry> {
    let limit = limit.unwrap_or(self.default_search_limit).min(self.max_search_limit);

    let mut hits = self.search(query);
    hits.truncate(limit);
    hits
  }

  /// All derived forms of `word`, across every rule key of every entry
  /// sharing that word (homonym lines carry independent key sets).
  ///
  /// Empty when the word is unknown, has no rule keys, or none of its
  /// rules validate — never an error.
  pub fn expand(&self, word: &str) -> Vec<DerivedForm<'_>> {
    let rule_keys = self.rule_keys_for_word(word);
    RuleExpander::new(&self.affix_index).expand(word, &rule_keys)
  }

  /// Cross-type compositions of `word` (combineable suffix, then
  /// combineable prefix on the suffixed result). See
  /// [`RuleExpander::expand_combined`].
  pub fn expand_combined(&self, word: &str) -> Vec<CombinedForm<'_>> {
    let rule_keys = self.rule_keys_for_word(word);
    RuleExpander::new(&self.affix_index).expand_combined(word, &rule_keys)
  }

  /// Derived forms for one concrete entry (its own key set only).
  pub fn expand_entry(&self, entry: &DictionaryEntry) -> Vec<DerivedForm<'_>> {
    RuleExpander::new(&self.affix_index).expand(&entry.word, &entry.rule_keys)
  }

  /// All rules of the group identified by `key`; empty for unknown keys.
  pub fn rules_for_key(&self, key: &str) -> Vec<&AffixRule> {
    self.affix_index.rules_for_key(key)
  }

  // ===== Accessors =====

  /// All entries, in file order.
  pub fn entries(&self) -> &[DictionaryEntry] {
    &self.entries
  }

  /// Number of parsed entries.
  pub fn entry_count(&self) -> usize {
    self.entries.len()
  }

  /// The `.dic` count header, verbatim (for display; real files disagree
  /// with their own counts, so this is never validated).
  pub fn declared_entry_count(&self) -> &str {
    &self.declared_entry_count
  }

  /// All affix rules, in `.aff` file order.
  pub fn affix_rules(&self) -> &[AffixRule] {
    self.affix_index.rules()
  }

  /// Number of parsed affix rules.
  pub fn affix_rule_count(&self) -> usize {
    self.affix_index.len()
  }

  /// True when `word` appears as a base word.
  pub fn contains_word(&self, word: &str) -> bool {
    self.word_index.contains_key(word)
  }

  /// The configured default display limit.
  pub fn default_search_limit(&self) -> usize {
    self.default_search_limit
  }

  /// The configured maximum display limit.
  pub fn max_search_limit(&self) -> usize {
    self.max_search_limit
  }

  /// Merged rule keys of every entry sharing `word`, first-seen order,
  /// duplicates dropped.
  fn rule_keys_for_word(&self, word: &str) -> Vec<char> {
    let mut rule_keys = Vec::new();

    if let Some(indices) = self.word_index.get(word) {
      for &index in indices {
        for &key in &self.entries[index].rule_keys {
          if !rule_keys.contains(&key) {
            rule_keys.push(key);
          }
        }
      }
    }

    rule_keys
  }
}

/// Reads one source file, wrapping IO failure in the crate error type.
fn read_source(path: &Path) -> Result<String, DictionaryError> {
  fs::read_to_string(path).map_err(|error| DictionaryError::FileRead {
    path: path.to_path_buf(),
    source: Arc::new(error),
  })
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
