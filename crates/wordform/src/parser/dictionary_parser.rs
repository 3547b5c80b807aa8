//! `.dic` file parser.
//!
//! The first line of a dictionary file is a decimal entry count. It is
//! informational only: real-world files disagree with their own counts, so
//! it is captured verbatim for display and never validated. Every following
//! line is `word` or `word/ruleKeys`, where the rule keys are a contiguous
//! run of single-character codes (`cat/SD` references groups `S` and `D`).

use tracing::debug;

use crate::models::DictionaryEntry;

/// Line number offset of the first entry: the count header occupies line 1,
/// so the entry at remainder index 0 sits on line 2 of the file.
const FIRST_ENTRY_LINE: usize = 2;

/// Parsed contents of a `.dic` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryFile {
  /// The count header line, verbatim (not validated against `entries`)
  pub declared_entry_count: String,

  /// Entries in file order; lines with an empty word are dropped
  pub entries: Vec<DictionaryEntry>,
}

/// Parses the full text of a `.dic` file. Never fails: blank lines and
/// lines whose word part is empty are skipped, and an empty input yields an
/// empty (but valid) `DictionaryFile`.
pub fn parse_dictionary_file(text: &str) -> DictionaryFile {
  let mut lines = text.lines();
  let declared_entry_count = lines.next().unwrap_or_default().to_string();

  let entries: Vec<DictionaryEntry> = lines
    .enumerate()
    .filter_map(|(index, line)| parse_entry_line(line, index + FIRST_ENTRY_LINE))
    .collect();

  debug!(
    declared = %declared_entry_count,
    parsed = entries.len(),
    "dictionary file parsed"
  );

  DictionaryFile {
    declared_entry_count,
    entries,
  }
}

/// Parses one entry line, or `None` for lines with no word (blank lines,
/// trailing-newline artifacts, a stray leading `/`).
fn parse_entry_line(line: &str, source_line: usize) -> Option<DictionaryEntry> {
  let (word, keys) = match line.split_once('/') {
    Some((word, keys)) => (word, keys),
    None => (line, ""),
  };

  if word.is_empty() {
    return None;
  }

  Some(DictionaryEntry {
    word: word.to_string(),
    rule_keys: keys.chars().collect(),
    source_line,
  })
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
