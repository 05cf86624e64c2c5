//! Decoders for the composite cell formats.
//!
//! None of these fail: malformed content falls back to a safe default (an
//! empty detail, the legacy URL split, or "no numeric value").

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ─── Main / detail values ────────────────────────────────────────────────────

/// Delimiters in priority order. Padded forms win over a bare newline so a
/// multi-line detail written in a padded era is not split twice.
const PADDED_DELIMITERS: &[&str] = &[" \n ", " | "];

/// A value cell split into its headline and supporting text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitValue {
  pub main:   String,
  pub detail: String,
}

/// Split `main[<delimiter>detail…]`.
///
/// Line endings are normalised to `\n` first. The delimiter is sniffed: a
/// padded newline, then a padded pipe, then a bare newline. Empty segments
/// are dropped; the first remaining segment is `main`, the rest are joined
/// with a single space into `detail`.
pub fn split_value(raw: &str) -> SplitValue {
  let text = raw.replace("\r\n", "\n").replace('\r', "\n");
  let text = text.trim();

  let delimiter = PADDED_DELIMITERS
    .iter()
    .copied()
    .find(|d| text.contains(d))
    .unwrap_or("\n");

  let mut parts = text.split(delimiter).map(str::trim).filter(|s| !s.is_empty());
  let main = parts.next().unwrap_or_default().to_string();
  let detail = parts.collect::<Vec<_>>().join(" ");
  SplitValue { main, detail }
}

// ─── Source URLs ─────────────────────────────────────────────────────────────

/// Parse a source-URL cell: a JSON array literal, or a `;`/newline-delimited
/// legacy list. Returns an empty list for blank input.
pub fn parse_source_urls(raw: &str) -> Vec<String> {
  let raw = raw.trim();
  if raw.is_empty() {
    return Vec::new();
  }

  if raw.starts_with('[')
    && let Ok(items) = serde_json::from_str::<Vec<serde_json::Value>>(raw)
  {
    return items
      .into_iter()
      .map(|v| match v {
        serde_json::Value::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
      })
      .filter(|s| !s.is_empty())
      .collect();
  }

  raw
    .split([';', '\n', '\r'])
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect()
}

// ─── Numbers ─────────────────────────────────────────────────────────────────

/// Coerce a metric cell to a number.
///
/// Thousands separators, percent signs and whitespace are stripped. `N/A`
/// (any case, optionally followed by more text), an em-dash, blank input and
/// anything unparseable mean "no value", never zero.
pub fn coerce_number(raw: &str) -> Option<f64> {
  let s = raw.trim();
  if s.is_empty() || s == "—" || s.to_ascii_uppercase().starts_with("N/A") {
    return None;
  }
  let cleaned: String = s
    .chars()
    .filter(|c| !matches!(c, ',' | '%') && !c.is_whitespace())
    .collect();
  cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

static RANK: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)rank\s*#?\s*(\d+)").expect("rank pattern is valid")
});

/// Extract `N` from an ordinal such as `Rank 3 / 193`.
pub fn coerce_rank(raw: &str) -> Option<u32> {
  RANK
    .captures(raw)
    .and_then(|c| c.get(1))
    .and_then(|m| m.as_str().parse().ok())
}

/// A coerced benchmark value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
  pub value:   f64,
  /// `true` when the cell was an ordinal rank rather than a score.
  pub is_rank: bool,
}

/// Coerce a benchmark cell: an ordinal rank first, then a plain number.
pub fn coerce_metric(raw: &str) -> Option<Metric> {
  if let Some(rank) = coerce_rank(raw) {
    return Some(Metric {
      value:   f64::from(rank),
      is_rank: true,
    });
  }
  coerce_number(raw).map(|value| Metric {
    value,
    is_rank: false,
  })
}

/// Interpret a boolean-ish cell; `None` when blank or unrecognised.
pub fn parse_flag(raw: &str) -> Option<bool> {
  match raw.trim().to_ascii_lowercase().as_str() {
    "true" | "1" | "yes" | "y" => Some(true),
    "false" | "0" | "no" | "n" => Some(false),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sv(main: &str, detail: &str) -> SplitValue {
    SplitValue {
      main:   main.into(),
      detail: detail.into(),
    }
  }

  // ── split_value ─────────────────────────────────────────────────────────

  #[test]
  fn split_padded_newline() {
    assert_eq!(split_value("A \n B"), sv("A", "B"));
  }

  #[test]
  fn split_bare_newlines_join_detail() {
    assert_eq!(split_value("A\nB\nC"), sv("A", "B C"));
  }

  #[test]
  fn split_pipe_and_crlf() {
    assert_eq!(split_value("Local | Some detail"), sv("Local", "Some detail"));
    assert_eq!(split_value("Yes\r\nfirst\r\n\r\nsecond"), sv("Yes", "first second"));
  }

  #[test]
  fn padded_newline_wins_over_bare_newline() {
    assert_eq!(
      split_value("Partial \n line one\nstill one \n two"),
      sv("Partial", "line one\nstill one two")
    );
  }

  #[test]
  fn split_empty() {
    assert_eq!(split_value(""), sv("", ""));
    assert_eq!(split_value("   \n  "), sv("", ""));
  }

  // ── parse_source_urls ───────────────────────────────────────────────────

  #[test]
  fn urls_json_and_legacy_agree() {
    let expected = vec!["http://a".to_string(), "http://b".to_string()];
    assert_eq!(parse_source_urls(r#"["http://a","http://b"]"#), expected);
    assert_eq!(parse_source_urls("http://a;http://b"), expected);
    assert_eq!(parse_source_urls("http://a\r\n;http://b;"), expected);
  }

  #[test]
  fn urls_empty_and_bad_json() {
    assert!(parse_source_urls("").is_empty());
    assert!(parse_source_urls(r#"[" ", ""]"#).is_empty());
    assert_eq!(parse_source_urls("[http://a;http://b"), vec![
      "[http://a".to_string(),
      "http://b".to_string()
    ]);
  }

  // ── numbers ─────────────────────────────────────────────────────────────

  #[test]
  fn numbers_strip_separators() {
    assert_eq!(coerce_number("125,700,000"), Some(125_700_000.0));
    assert_eq!(coerce_number(" 92.5 % "), Some(92.5));
    assert_eq!(coerce_number("-3"), Some(-3.0));
  }

  #[test]
  fn numbers_missing_markers_are_none() {
    assert_eq!(coerce_number("N/A"), None);
    assert_eq!(coerce_number("n/a (not surveyed)"), None);
    assert_eq!(coerce_number("—"), None);
    assert_eq!(coerce_number(""), None);
    assert_eq!(coerce_number("about ten"), None);
    assert_eq!(coerce_number("inf"), None);
  }

  #[test]
  fn ranks() {
    assert_eq!(coerce_rank("Rank 3 / 193"), Some(3));
    assert_eq!(coerce_rank("rank #12"), Some(12));
    assert_eq!(coerce_rank("0.87"), None);
    assert_eq!(
      coerce_metric("Rank 7 / 20"),
      Some(Metric {
        value:   7.0,
        is_rank: true,
      })
    );
    assert_eq!(coerce_metric("0.9").map(|m| m.is_rank), Some(false));
    assert_eq!(coerce_metric("N/A"), None);
  }

  #[test]
  fn flags() {
    assert_eq!(parse_flag("TRUE"), Some(true));
    assert_eq!(parse_flag("no"), Some(false));
    assert_eq!(parse_flag(""), None);
  }
}
