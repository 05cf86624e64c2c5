//! Permissive CSV codec for the digital-ID comparison data.
//!
//! Turns raw CSV text into header-keyed [`Record`]s, decodes records into the
//! entity types of [`idcmp_core`]-style structs, and interprets the composite
//! cell formats (main/detail values, source-URL lists, numeric metrics).
//! Pure synchronous; no I/O.
//!
//! # Quick start
//!
//! ```
//! let rows = idcmp_csv::parse("country_id,value\nJPN,\"Yes \n detail\"\n");
//! assert_eq!(rows.len(), 1);
//! let v = idcmp_csv::split_value(rows[0].get("value"));
//! assert_eq!(v.main, "Yes");
//! assert_eq!(v.detail, "detail");
//! ```

pub mod decode;
pub mod error;
mod parse;
mod record;

pub use decode::{
  Metric, SplitValue, coerce_metric, coerce_number, coerce_rank, parse_flag,
  parse_source_urls, split_value,
};
pub use error::{Error, Result};
pub use parse::parse;
pub use record::Record;

use serde::de::DeserializeOwned;

/// Parse `text` and decode every row into `T`.
pub fn parse_as<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
  decode_all(&parse(text))
}

/// Decode a batch of records, reporting the first failing row.
pub fn decode_all<T: DeserializeOwned>(records: &[Record]) -> Result<Vec<T>> {
  records
    .iter()
    .enumerate()
    .map(|(i, r)| {
      r.decode()
        .map_err(|source| Error::Decode { row: i + 1, source })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use serde::Deserialize;

  use super::*;

  #[derive(Debug, Default, Deserialize)]
  #[serde(default)]
  struct Row {
    country_id: String,
    name_en:    String,
    missing:    String,
  }

  #[test]
  fn parse_as_tolerates_missing_and_extra_columns() {
    let rows: Vec<Row> =
      parse_as("country_id,name_en,extra\nJPN,Japan,x\nEST,Estonia,y\n")
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].country_id, "EST");
    assert_eq!(rows[1].name_en, "Estonia");
    assert_eq!(rows[0].missing, "");
  }
}
