//! crates/wordform/tests/integration_test.rs
//!
//! End-to-end integration test.
//! Verifies the entire flow: write source files -> init from config ->
//! ranked search -> derived-form expansion -> provenance checks.

use std::fs;

use tempfile::TempDir;

use wordform::WordformService;
use wordform::config::{DictionaryConfig, LogLevel, LoggingConfig, SearchConfig, WordformConfig};
use wordform::models::AffixKind;

/// An en-GB-style affix file: one combineable prefix group, two suffix
/// groups (`S` conditioned on a consonant+y ending, `D` unconditional).
const SAMPLE_AFF: &str = "\
SET UTF-8
TRY esianrtolcdugmphbyfvkwzESIANRTOLCDUGMPHBYFVKWZ'

PFX U Y
PFX U 0 un .

SFX S Y
SFX S y ies [^aeiou]y

SFX D Y
SFX D 0 s .
";

/// Matching dictionary: count header, then entries with and without keys.
const SAMPLE_DIC: &str = "\
7
cat/SD
pony/S
tidy/SDU
poly
polygon/D
polyp
unpolyish
";

/// Writes the sample pair into `temp_dir` and builds a config for it.
fn sample_config(temp_dir: &TempDir) -> WordformConfig {
  let dic_path = temp_dir.path().join("index.dic");
  let aff_path = temp_dir.path().join("index.aff");
  fs::write(&dic_path, SAMPLE_DIC).expect("write .dic");
  fs::write(&aff_path, SAMPLE_AFF).expect("write .aff");

  WordformConfig {
    dictionary: DictionaryConfig { dic_path, aff_path },
    search: SearchConfig {
      default_limit: 10,
      max_limit: 100,
    },
    logging: LoggingConfig {
      level: LogLevel::Info,
    },
  }
}

/// Integration test for the full load-search-expand flow.
#[test]
fn end_to_end_search_and_expand_flow() {
  let temp_dir = TempDir::new().expect("Failed to create temporary directory");
  let config = sample_config(&temp_dir);

  let service = WordformService::init(&config).expect("Failed to load dictionary");

  // ── Load: counts and header ──
  assert_eq!(service.entry_count(), 7);
  assert_eq!(service.declared_entry_count(), "7");
  assert_eq!(service.affix_rule_count(), 3);

  // ── Search: ranked substring query ──
  let hits = service.search("poly");
  let words: Vec<&str> = hits.iter().map(|e| e.word.as_str()).collect();

  // Exact match first, then same-first-char by ascending length,
  // then the entry not starting with 'p'
  assert_eq!(words, vec!["poly", "polyp", "polygon", "unpolyish"]);

  // ── Search: display-bounded variant ──
  let top = service.search_top("poly", Some(2));
  assert_eq!(top.len(), 2);
  assert_eq!(top[0].word, "poly");

  // ── Expand: `cat/SD`, one failing and one applying rule ──
  let forms = service.expand("cat");
  assert_eq!(forms.len(), 1, "`S` must fail on 'cat', `D` must apply");
  assert_eq!(forms[0].new_word, "cats");
  assert_eq!(forms[0].rule.key, "D");

  // ── Expand: consonant+y word takes the `S` rule ──
  let forms = service.expand("pony");
  assert_eq!(forms.len(), 1);
  assert_eq!(forms[0].new_word, "ponies");
  assert_eq!(forms[0].remove, "y");
  assert_eq!(forms[0].add, "ies");

  // ── Expand: no keys -> empty, unknown word -> empty ──
  assert!(service.expand("poly").is_empty());
  assert!(service.expand("zebra").is_empty());
}

/// Cross-type composition over the loaded dictionary.
#[test]
fn combined_expansion_flow() {
  let temp_dir = TempDir::new().expect("Failed to create temporary directory");
  let config = sample_config(&temp_dir);
  let service = WordformService::init(&config).expect("Failed to load dictionary");

  let combined = service.expand_combined("tidy");
  let words: Vec<&str> = combined.iter().map(|c| c.new_word()).collect();

  // `S` (tidies) and `D` (tidys) each compose with the `U` prefix
  assert_eq!(words, vec!["untidies", "untidys"]);

  for form in &combined {
    assert_eq!(form.suffix_step.rule.kind, AffixKind::Suffix);
    assert_eq!(form.prefix_step.rule.kind, AffixKind::Prefix);
    assert!(form.suffix_step.rule.combineable);
    assert!(form.prefix_step.rule.combineable);
  }
}

/// Every parsed rule's source line must re-slice the original affix text
/// to the exact line it came from.
#[test]
fn affix_source_lines_round_trip() {
  let service = WordformService::from_texts(SAMPLE_DIC, SAMPLE_AFF);
  let lines: Vec<&str> = SAMPLE_AFF.lines().collect();

  assert!(service.affix_rule_count() > 0);
  for rule in service.affix_rules() {
    let original = lines[rule.source_line - 1];

    let tokens: Vec<&str> = original.split_whitespace().collect();
    assert_eq!(tokens[0], rule.kind.tag());
    assert_eq!(tokens[1], rule.key);
    assert_eq!(tokens[2], rule.strip);
    assert_eq!(tokens[3], rule.affix);
  }
}

/// Dictionary entry invariants over the loaded set.
#[test]
fn entry_invariants_hold() {
  let service = WordformService::from_texts(SAMPLE_DIC, SAMPLE_AFF);

  for entry in service.entries() {
    assert!(!entry.word.is_empty());
    assert!(entry.source_line >= 2);
  }
}

/// Short queries bypass filtering but keep the ranking order.
#[test]
fn short_queries_return_the_full_set() {
  let service = WordformService::from_texts(SAMPLE_DIC, SAMPLE_AFF);

  assert_eq!(service.search("").len(), service.entry_count());
  assert_eq!(service.search("p").len(), service.entry_count());

  // "p" hoists p-words; ties resolve by length, then entry order
  let hits = service.search("p");
  assert_eq!(hits[0].word, "pony");
}

/// An empty affix file loads fine next to a populated dictionary.
#[test]
fn empty_affix_file_is_a_valid_load() {
  let temp_dir = TempDir::new().expect("Failed to create temporary directory");
  let dic_path = temp_dir.path().join("index.dic");
  let aff_path = temp_dir.path().join("index.aff");
  fs::write(&dic_path, SAMPLE_DIC).expect("write .dic");
  fs::write(&aff_path, "").expect("write empty .aff");

  let config = WordformConfig {
    dictionary: DictionaryConfig { dic_path, aff_path },
    search: SearchConfig::default(),
    logging: LoggingConfig::default(),
  };

  let service = WordformService::init(&config).expect("empty .aff must load");

  assert_eq!(service.entry_count(), 7);
  assert_eq!(service.affix_rule_count(), 0);
  for key in ["S", "D", "U", "?"] {
    assert!(service.rules_for_key(key).is_empty());
  }
  assert!(service.expand("cat").is_empty());
}

/// Derived forms never violate their own rule's condition.
#[test]
fn expanded_forms_satisfy_their_conditions() {
  let service = WordformService::from_texts(SAMPLE_DIC, SAMPLE_AFF);

  for entry in service.entries() {
    for form in service.expand_entry(entry) {
      if form.rule.has_condition() {
        let pattern =
          regex::Regex::new(&form.matched_condition).expect("conditions in the sample compile");
        assert!(
          pattern.is_match(&entry.word),
          "rule L{} produced {} from {} without its condition holding",
          form.rule.source_line,
          form.new_word,
          entry.word
        );
      }
    }
  }
}
