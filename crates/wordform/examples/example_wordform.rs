//! wordform crate example
//!
//! Loads a small bundled dictionary pair, runs ranked searches and expands
//! a few entries, printing the derived forms as JSON the way a UI consumer
//! would receive them.

use tracing_subscriber::EnvFilter;
use wordform::WordformService;
use wordform::models::DictionaryEntry;

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// A miniature `.aff` in the en-GB layout: two combineable suffix groups,
/// one combineable prefix group.
const SAMPLE_AFF: &str = "\
SET UTF-8

PFX U Y
PFX U 0 un .

SFX S Y
SFX S y ies [^aeiou]y
SFX S 0 s [aeiou]y

SFX D Y
SFX D 0 s .
";

/// A miniature `.dic`: count header first, then `word/ruleKeys` lines.
const SAMPLE_DIC: &str = "\
8
cat/SD
pony/S
tidy/SU
day/S
poly
polygon/D
polyp
unpolyish
";

/// Prints one ranked result list.
fn print_results(query: &str, results: &[&DictionaryEntry]) {
  println!("\nSearch results (Query: \"{query}\"):");
  for entry in results {
    let keys: String = entry.rule_keys.iter().collect();
    println!("  L{:<3} {} {}", entry.source_line, entry.word, keys);
  }
}

/// Prints every derived form of `word`, single and combined, as JSON.
fn print_expansion(service: &WordformService, word: &str) -> AppResult<()> {
  println!("\nDerived forms of \"{word}\":");

  for form in service.expand(word) {
    println!("  {}", serde_json::to_string(&form)?);
  }
  for combined in service.expand_combined(word) {
    println!("  combined: {}", serde_json::to_string(&combined)?);
  }

  Ok(())
}

fn main() -> AppResult<()> {
  // Initialize tracing_subscriber
  // Use RUST_LOG environment variable if set
  // Default: info for global, debug for wordform
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,wordform=debug"));
  tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).with_level(true).init();

  // 1. Load the bundled pair (a host app would use WordformService::init
  //    with a WordformConfig pointing at real files)
  let service = WordformService::from_texts(SAMPLE_DIC, SAMPLE_AFF);
  println!(
    "{} entries declared, {} parsed, {} affix rules",
    service.declared_entry_count(),
    service.entry_count(),
    service.affix_rule_count()
  );

  // 2. Ranked searches
  let query = "poly";
  let results = service.search_top(query, None);
  print_results(query, &results);

  let query = "y";
  let results = service.search_top(query, Some(5));
  print_results(query, &results);

  // 3. Expansions
  print_expansion(&service, "cat")?;
  print_expansion(&service, "pony")?;
  print_expansion(&service, "tidy")?;

  // 4. Rule group listing, as the "All affixes" panel of a UI would show
  println!("\nRules in group S:");
  for rule in service.rules_for_key("S") {
    println!(
      "  L{:<3} {} {} strip={} affix={} cond={}",
      rule.source_line, rule.kind, rule.key, rule.strip, rule.affix, rule.condition
    );
  }

  Ok(())
}
