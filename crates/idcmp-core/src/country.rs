//! Countries, flag-image derivation and map-pin placement.

use serde::{Deserialize, Serialize};

use crate::normalize_country_id;

/// Base URL of the flag-image CDN, keyed by lowercase ISO-3166 alpha-2.
pub const FLAG_CDN: &str = "https://flagcdn.com";

/// Known codes used when a country row carries neither `iso2` nor an emoji.
const ISO2_FALLBACK: &[(&str, &str)] = &[
  ("JPN", "jp"),
  ("KOR", "kr"),
  ("EST", "ee"),
  ("FRA", "fr"),
  ("DEU", "de"),
  ("GBR", "gb"),
  ("USA", "us"),
  ("CAN", "ca"),
  ("AUS", "au"),
  ("NZL", "nz"),
  ("SWE", "se"),
  ("DNK", "dk"),
  ("SGP", "sg"),
  ("IND", "in"),
];

/// Pins are kept inside the map frame.
const PIN_MIN: f64 = 1.0;
const PIN_MAX: f64 = 99.0;

// ─── Country ─────────────────────────────────────────────────────────────────

/// One row of `countries.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
  pub country_id: String,
  pub name_en:    String,
  pub name_ja:    String,
  pub iso2:       String,
  /// Emoji flag, e.g. 🇯🇵.
  pub flag:       String,
  /// Horizontal UI position in percent (not a longitude).
  pub map_lon:    String,
  /// Vertical UI position in percent (not a latitude).
  pub map_lat:    String,
  pub map_dx:     String,
  pub map_dy:     String,
}

impl Country {
  /// A placeholder for a code that has no row in `countries.csv`.
  pub fn unknown(country_id: &str) -> Self {
    Self {
      country_id: normalize_country_id(country_id),
      ..Default::default()
    }
  }

  pub fn normalize(&mut self) { self.country_id = normalize_country_id(&self.country_id); }

  /// Japanese name, then English name, then the code.
  pub fn display_name(&self) -> &str {
    [&self.name_ja, &self.name_en, &self.country_id]
      .into_iter()
      .map(|s| s.trim())
      .find(|s| !s.is_empty())
      .unwrap_or_default()
  }

  /// Lowercase ISO-3166 alpha-2 code, if one can be derived.
  ///
  /// Priority: explicit `iso2` column, then the emoji flag, then the built-in
  /// fallback table.
  pub fn iso2(&self) -> Option<String> {
    let explicit = self.iso2.trim().to_ascii_lowercase();
    if !explicit.is_empty() {
      return Some(explicit);
    }
    if let Some(code) = iso2_from_flag_emoji(&self.flag) {
      return Some(code);
    }
    let id = normalize_country_id(&self.country_id);
    ISO2_FALLBACK
      .iter()
      .find(|(k, _)| *k == id)
      .map(|(_, v)| (*v).to_string())
  }

  /// Flag image descriptor for `size`, or `None` when no code resolves.
  pub fn flag_image(&self, size: FlagSize) -> Option<FlagImage> {
    let iso2 = self.iso2()?;
    let FlagSize { width: w, height: h } = size;
    Some(FlagImage {
      src:    format!("{FLAG_CDN}/{w}x{h}/{iso2}.png"),
      srcset: format!(
        "{FLAG_CDN}/{}x{}/{iso2}.png 2x, {FLAG_CDN}/{}x{}/{iso2}.png 3x",
        w * 2,
        h * 2,
        w * 3,
        h * 3
      ),
      alt:    format!("{} flag", self.display_name()),
      width:  w,
      height: h,
    })
  }

  /// Pin position in percent, nudged by `map_dx`/`map_dy` and clamped to
  /// `[1, 99]`. `None` when either base coordinate is not a number.
  pub fn map_position(&self) -> Option<(f64, f64)> {
    let mut x = parse_finite(&self.map_lon)?;
    let mut y = parse_finite(&self.map_lat)?;
    if let Some(dx) = parse_finite(&self.map_dx) {
      x += dx;
    }
    if let Some(dy) = parse_finite(&self.map_dy) {
      y += dy;
    }
    Some((x.clamp(PIN_MIN, PIN_MAX), y.clamp(PIN_MIN, PIN_MAX)))
  }
}

fn parse_finite(s: &str) -> Option<f64> {
  s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Decode a pair of regional-indicator symbols (U+1F1E6..U+1F1FF) to a
/// lowercase alpha-2 code.
pub fn iso2_from_flag_emoji(flag: &str) -> Option<String> {
  let letters: String = flag
    .trim()
    .chars()
    .filter_map(|c| {
      let cp = c as u32;
      (0x1F1E6..=0x1F1FF)
        .contains(&cp)
        .then(|| char::from(b'a' + (cp - 0x1F1E6) as u8))
    })
    .take(2)
    .collect();
  (letters.len() == 2).then_some(letters)
}

/// Relative link to a country's detail page.
pub fn country_link(country_id: &str) -> String {
  format!("./country.html?id={}", normalize_country_id(country_id))
}

// ─── Flag images ─────────────────────────────────────────────────────────────

/// Pixel size of a flag image, e.g. `20x15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSize {
  pub width:  u32,
  pub height: u32,
}

impl FlagSize {
  pub const SMALL: Self = Self {
    width:  20,
    height: 15,
  };
}

impl Default for FlagSize {
  fn default() -> Self { Self::SMALL }
}

/// A fully-resolved `<img>` description for a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagImage {
  pub src:    String,
  pub srcset: String,
  pub alt:    String,
  pub width:  u32,
  pub height: u32,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn iso2_priority_explicit_then_emoji_then_table() {
    let explicit = Country {
      country_id: "JPN".into(),
      iso2: "JP".into(),
      flag: "🇪🇪".into(),
      ..Default::default()
    };
    assert_eq!(explicit.iso2().as_deref(), Some("jp"));

    let emoji = Country {
      country_id: "XXX".into(),
      flag: "🇪🇪".into(),
      ..Default::default()
    };
    assert_eq!(emoji.iso2().as_deref(), Some("ee"));

    assert_eq!(Country::unknown("dnk").iso2().as_deref(), Some("dk"));
    assert_eq!(Country::unknown("ZZZ").iso2(), None);
    assert!(Country::unknown("ZZZ").flag_image(FlagSize::SMALL).is_none());
  }

  #[test]
  fn flag_image_urls() {
    let img = Country::unknown("EST").flag_image(FlagSize::SMALL).unwrap();
    assert_eq!(img.src, "https://flagcdn.com/20x15/ee.png");
    assert!(img.srcset.contains("40x30/ee.png 2x"));
    assert!(img.srcset.contains("60x45/ee.png 3x"));
    assert_eq!(img.alt, "EST flag");
  }

  #[test]
  fn map_position_nudges_and_clamps() {
    let c = Country {
      map_lon: "98.5".into(),
      map_lat: "40".into(),
      map_dx: "2".into(),
      map_dy: "x".into(),
      ..Default::default()
    };
    assert_eq!(c.map_position(), Some((99.0, 40.0)));
    assert_eq!(Country::default().map_position(), None);
  }

  #[test]
  fn display_name_priority() {
    let c = Country {
      country_id: "EST".into(),
      name_en: "Estonia".into(),
      ..Default::default()
    };
    assert_eq!(c.display_name(), "Estonia");
    assert_eq!(country_link(" est"), "./country.html?id=EST");
  }
}
