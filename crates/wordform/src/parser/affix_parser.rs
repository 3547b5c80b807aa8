//! `.aff` file parser.
//!
//! The affix format is line oriented and positional. Only two shapes matter
//! here, both recognized by fixed character columns:
//!
//! ```text
//! SFX S Y            <- group header: key `S`, combineable flag `Y`
//! SFX S y ies [^aeiou]y   <- rule entry: key, strip, affix, condition
//! ```
//!
//! A header carries the combineable flag for every rule entry that follows
//! it, until the next header. That carried state is threaded through the
//! line walk as an explicit fold accumulator ([`ParseState`]), never as
//! shared mutable state.
//!
//! Every other line kind (`SET`, `TRY`, `REP`, comments, blanks) is skipped.

use tracing::{debug, warn};

use crate::models::{AffixKind, AffixRule};

/// Column window (start, length in chars) that must contain [`AFFIX_TAG_MARKER`]
/// for a line to be affix-related at all: `PFX`/`SFX` both carry `FX` here.
const AFFIX_TAG_START: usize = 1;
/// Length of the tag window.
const AFFIX_TAG_LEN: usize = 3;
/// Marker shared by `PFX` and `SFX` within the tag window.
const AFFIX_TAG_MARKER: &str = "FX";

/// Start of the combineable column window.
///
/// A line is a group header exactly when this window reads `"Y"` or `"N"`
/// and nothing else. A header whose window catches trailing text falls
/// through to rule-entry parsing — that quirk matches the accepted-input
/// set of the source format and is covered by tests.
const COMBINEABLE_START: usize = 6;
/// Length of the combineable column window.
const COMBINEABLE_LEN: usize = 7;
/// Header flag: rules in this group may cross-combine.
const COMBINEABLE_YES: &str = "Y";
/// Header flag: rules in this group may not cross-combine.
const COMBINEABLE_NO: &str = "N";

/// Minimum token count of a well-formed rule entry (tag, key, strip, affix).
/// The fifth token, the condition, is legitimately absent on unconditional
/// rules; fewer than four tokens is a malformed line and degrades.
const RULE_CORE_FIELDS: usize = 4;

/// Accumulator threaded through the line fold.
#[derive(Debug, Default)]
struct ParseState {
  /// Combineable flag declared by the most recent group header
  combineable: bool,
  /// Rules emitted so far, in file order
  rules: Vec<AffixRule>,
}

/// Parses the full text of an `.aff` file into its rule records, in file
/// order. Never fails: malformed lines degrade (missing trailing fields are
/// filled empty) and everything that is not an affix line is skipped.
pub fn parse_affix_file(text: &str) -> Vec<AffixRule> {
  let state = text
    .lines()
    .enumerate()
    .fold(ParseState::default(), |state, (index, line)| parse_line(state, line, index + 1));

  debug!(rules = state.rules.len(), "affix file parsed");
  state.rules
}

/// One fold step: classify `line` and either update the carried combineable
/// flag (header), emit a rule (entry), or pass the state through (other).
fn parse_line(mut state: ParseState, line: &str, line_no: usize) -> ParseState {
  if !char_window(line, AFFIX_TAG_START, AFFIX_TAG_LEN).contains(AFFIX_TAG_MARKER) {
    return state;
  }

  let combineable_window = char_window(line, COMBINEABLE_START, COMBINEABLE_LEN);
  if combineable_window == COMBINEABLE_YES || combineable_window == COMBINEABLE_NO {
    // Group header: carries the flag forward, emits no rule.
    state.combineable = combineable_window == COMBINEABLE_YES;
    return state;
  }

  state.rules.push(parse_rule_entry(line, line_no, state.combineable));
  state
}

/// Splits a rule entry on whitespace and maps the first five tokens
/// positionally onto the rule columns. Missing trailing tokens become empty
/// fields rather than failing the parse.
fn parse_rule_entry(line: &str, line_no: usize, combineable: bool) -> AffixRule {
  let mut tokens = line.split_whitespace();

  let tag = tokens.next().unwrap_or_default();
  let key = tokens.next().unwrap_or_default();
  let strip = tokens.next().unwrap_or_default();
  let affix = tokens.next().unwrap_or_default();
  let condition = tokens.next().unwrap_or_default();

  let field_count = [tag, key, strip, affix].iter().filter(|t| !t.is_empty()).count();
  if field_count < RULE_CORE_FIELDS {
    warn!(line = line_no, fields = field_count, "short affix rule line, missing fields left empty");
  }

  let kind = match tag {
    t if t == AffixKind::Prefix.tag() => AffixKind::Prefix,
    t if t == AffixKind::Suffix.tag() => AffixKind::Suffix,
    other => {
      warn!(line = line_no, tag = other, "unrecognized affix tag, assuming suffix");
      AffixKind::Suffix
    }
  };

  AffixRule {
    kind,
    key: key.to_string(),
    strip: strip.to_string(),
    affix: affix.to_string(),
    condition: condition.to_string(),
    combineable,
    source_line: line_no,
  }
}

/// Character-offset substring (start, length), clamped to the line end.
///
/// Columns are counted in characters, not bytes, so lines with non-ASCII
/// content elsewhere cannot split a code point.
fn char_window(line: &str, start: usize, len: usize) -> String {
  line.chars().skip(start).take(len).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
