//! Permissive CSV scanner.
//!
//! Pipeline:
//!   raw &str
//!     └─ strip BOM
//!          └─ scan_rows()     → Vec<Vec<String>>
//!               └─ header row + keep_row() filter
//!                    └─ zip with header → Vec<Record>
//!
//! The scanner never fails. An unterminated quote keeps the scanner in quoted
//! mode until end of input, so everything after the opening quote (commas and
//! newlines included) lands in that one field, which is flushed with its row.

use crate::record::Record;

const BOM: char = '\u{FEFF}';

/// Split `text` into raw rows of untrimmed cells.
fn scan_rows(text: &str) -> Vec<Vec<String>> {
  let mut rows: Vec<Vec<String>> = Vec::new();
  let mut row: Vec<String> = Vec::new();
  let mut field = String::new();
  let mut in_quotes = false;
  let mut chars = text.chars().peekable();

  while let Some(c) = chars.next() {
    if in_quotes {
      match c {
        '"' if chars.peek() == Some(&'"') => {
          field.push('"');
          chars.next();
        }
        '"' => in_quotes = false,
        other => field.push(other),
      }
      continue;
    }
    match c {
      '"' => in_quotes = true,
      ',' => row.push(std::mem::take(&mut field)),
      '\n' => {
        row.push(std::mem::take(&mut field));
        rows.push(std::mem::take(&mut row));
      }
      '\r' => {}
      other => field.push(other),
    }
  }

  // Flush the final field/row even without a trailing newline.
  row.push(field);
  rows.push(row);
  rows
}

/// Rows with fewer than two cells, or whose cells are all blank, are noise
/// (typically trailing blank lines).
fn keep_row(row: &[String]) -> bool {
  row.len() > 1 && row.iter().any(|c| !c.trim().is_empty())
}

/// Parse CSV `text` into header-keyed records.
///
/// The first row is the header. Every kept row yields one entry per header
/// column, trimmed; missing trailing cells become `""` and surplus cells are
/// dropped.
pub fn parse(text: &str) -> Vec<Record> {
  let text = text.strip_prefix(BOM).unwrap_or(text);
  let mut rows = scan_rows(text).into_iter();

  let header: Vec<String> = match rows.next() {
    Some(h) => h.into_iter().map(|h| h.trim().to_string()).collect(),
    None => return Vec::new(),
  };

  rows
    .filter(|r| keep_row(r))
    .map(|r| {
      header
        .iter()
        .enumerate()
        .map(|(i, h)| {
          let v = r.get(i).map(|c| c.trim()).unwrap_or_default();
          (h.clone(), v.to_string())
        })
        .collect()
    })
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  /// Quote a field the way a spreadsheet export would.
  fn quote(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
      format!("\"{}\"", s.replace('"', "\"\""))
    } else {
      s.to_string()
    }
  }

  // ── Quoting ─────────────────────────────────────────────────────────────

  #[test]
  fn generated_csv_reproduces_original_fields() {
    let values = [
      "plain",
      "with, comma",
      "line one\nline two",
      "she said \"hi\"",
      "\"leading quote",
      "mixed, \"all\"\nthree",
    ];
    let mut text = String::from("id,value\n");
    for (i, v) in values.iter().enumerate() {
      text.push_str(&format!("r{i},{}\n", quote(v)));
    }

    let records = parse(&text);
    assert_eq!(records.len(), values.len());
    for (rec, expected) in records.iter().zip(values) {
      assert_eq!(rec.get("value"), expected);
    }
  }

  #[test]
  fn doubled_quote_is_literal() {
    let r = parse("a,b\n\"x\"\"y\",z\n");
    assert_eq!(r[0].get("a"), "x\"y");
  }

  // ── Line endings & BOM ──────────────────────────────────────────────────

  #[test]
  fn bom_is_stripped_from_first_header() {
    let r = parse("\u{FEFF}country_id,name\nJPN,Japan\n");
    assert_eq!(r[0].get("country_id"), "JPN");
  }

  #[test]
  fn crlf_and_lf_are_equivalent() {
    let lf = parse("a,b\n1,2\n3,4\n");
    let crlf = parse("a,b\r\n1,2\r\n3,4\r\n");
    assert_eq!(lf, crlf);
  }

  #[test]
  fn final_row_flushed_without_trailing_newline() {
    let r = parse("a,b\n1,2");
    assert_eq!(r.len(), 1);
    assert_eq!(r[0].get("b"), "2");
  }

  // ── Row filtering & shaping ─────────────────────────────────────────────

  #[test]
  fn blank_and_single_cell_rows_discarded() {
    let r = parse("a,b\n1,2\n\n , \nlonely\n3,4\n\n");
    let a: Vec<_> = r.iter().map(|x| x.get("a")).collect();
    assert_eq!(a, ["1", "3"]);
  }

  #[test]
  fn header_and_values_trimmed_missing_cells_empty() {
    let r = parse(" a , b ,c\n 1 ,2\n");
    assert_eq!(r[0].get("a"), "1");
    assert_eq!(r[0].get("b"), "2");
    assert_eq!(r[0].get("c"), "");
    assert_eq!(r[0].len(), 3);
  }

  #[test]
  fn empty_input_yields_no_records() {
    assert!(parse("").is_empty());
    assert!(parse("a,b\n").is_empty());
  }

  // ── Malformed input ─────────────────────────────────────────────────────

  #[test]
  fn unterminated_quote_swallows_rest_of_input() {
    let r = parse("a,b\n1,\"open\n2,3\n");
    assert_eq!(r.len(), 1);
    assert_eq!(r[0].get("a"), "1");
    assert_eq!(r[0].get("b"), "open\n2,3");
  }
}
