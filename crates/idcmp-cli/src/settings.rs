//! Layered configuration: defaults, an optional TOML file, then `IDCMP_*`
//! environment variables. Command-line flags are applied on top by `main`.

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// A data directory, or an `http(s)://` base URL.
  pub data:              String,
  pub baseline:          String,
  pub default_countries: Vec<String>,
  pub default_status:    String,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      data:              "./data".to_string(),
      baseline:          idcmp_view::BASELINE_COUNTRY.to_string(),
      default_countries: idcmp_view::DEFAULT_COUNTRIES
        .iter()
        .map(|c| c.to_string())
        .collect(),
      default_status:    "published".to_string(),
    }
  }
}

impl Settings {
  pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
      builder = builder.add_source(config::File::from(path).required(true));
    }
    Self::from_builder(builder, environment(None))
  }

  fn from_builder(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env: config::Environment,
  ) -> anyhow::Result<Self> {
    builder
      .add_source(env)
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}

/// `IDCMP_*` variables; `vars` replaces the process environment when given.
fn environment(vars: Option<config::Map<String, String>>) -> config::Environment {
  config::Environment::with_prefix("IDCMP")
    .try_parsing(true)
    .list_separator(",")
    .with_list_parse_key("default_countries")
    .source(vars)
}

#[cfg(test)]
mod tests {
  use config::{File, FileFormat};

  use super::*;

  #[test]
  fn file_values_override_defaults() {
    let builder = config::Config::builder().add_source(File::from_str(
      "data = \"https://example.org/data\"\ndefault_countries = [\"EST\"]\n",
      FileFormat::Toml,
    ));
    let settings =
      Settings::from_builder(builder, environment(Some(Default::default()))).unwrap();
    assert_eq!(settings.data, "https://example.org/data");
    assert_eq!(settings.default_countries, ["EST"]);
    assert_eq!(settings.baseline, "JPN");
    assert_eq!(settings.default_status, "published");
  }

  #[test]
  fn environment_overrides_file_and_splits_lists() {
    let builder = config::Config::builder().add_source(File::from_str(
      "default_countries = [\"EST\"]\ndefault_status = \"draft\"\n",
      FileFormat::Toml,
    ));
    let vars = [
      ("IDCMP_DEFAULT_COUNTRIES", "KOR,DNK"),
      ("IDCMP_DATA", "https://example.org/data"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let settings = Settings::from_builder(builder, environment(Some(vars))).unwrap();
    assert_eq!(settings.default_countries, ["KOR", "DNK"]);
    assert_eq!(settings.data, "https://example.org/data");
    assert_eq!(settings.default_status, "draft");
  }
}
