//! Ranked substring search over dictionary entries.
//!
//! Filtering is plain case-sensitive substring containment. Ranking is a
//! stable three-key sort with explicit tie-break fields; stability is
//! load-bearing, since entries not distinguished by any key must keep
//! their file order.

use tracing::debug;

use crate::models::DictionaryEntry;

/// Queries with fewer characters than this bypass the substring filter and
/// return the full entry set: a single keystroke would otherwise scan and
/// match nearly everything to no benefit, while sorting still surfaces
/// short exact hits first.
pub const SUBSTRING_FILTER_MIN_CHARS: usize = 2;

/// Substring search engine.
///
/// Stateless: the entry list is owned by the loaded-dictionary state and
/// passed in per query. Results are borrowed entries in rank order; the
/// engine never truncates — display callers take the bounded prefix they
/// need.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine;

impl SearchEngine {
  /// Creates the engine.
  pub fn new() -> Self {
    Self
  }

  /// Filters and ranks `entries` for `query`.
  ///
  /// Rank order: exact word match first; then words sharing the query's
  /// first character; then shorter words; remaining ties keep their
  /// relative entry order (the sort is stable).
  pub fn search<'a>(&self, query: &str, entries: &'a [DictionaryEntry]) -> Vec<&'a DictionaryEntry> {
    let mut hits: Vec<&DictionaryEntry> = if query.chars().count() < SUBSTRING_FILTER_MIN_CHARS {
      entries.iter().collect()
    } else {
      entries.iter().filter(|entry| entry.word.contains(query)).collect()
    };

    debug!(query = %query, hits = hits.len(), total = entries.len(), "substring filter done");

    let first_query_char = query.chars().next();
    hits.sort_by_key(|entry| rank_key(entry, query, first_query_char));
    hits
  }
}

/// Sort key for one entry. Lower sorts first; booleans are negated so that
/// `true` criteria hoist.
fn rank_key(entry: &DictionaryEntry, query: &str, first_query_char: Option<char>) -> (bool, bool, usize) {
  let exact = entry.word == query;
  let shares_first_char = first_query_char.is_some_and(|c| entry.word.starts_with(c));
  (!exact, !shares_first_char, entry.word.chars().count())
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
