//! Fixed Japanese UI strings.

pub const NO_DATA_MAIN: &str = "—";
pub const NO_DATA_DETAIL: &str = "データなし";
pub const NO_SOURCE: &str = "出典なし";
pub const EVENT_SOURCE: &str = "出典";
pub const NOT_AVAILABLE: &str = "N/A";

pub const INDICATOR_HEADING: &str = "制度項目";
pub const ITEM_HEADING: &str = "項目";

pub const BASIC_SUMMARY_TITLE: &str = "基本情報（抜粋）";
pub const BENCHMARK_TITLE: &str = "国際ベンチマーク";
pub const IT_TITLE: &str = "IT基盤";

pub const BASICS_UNAVAILABLE: &str =
  "基本情報データ（country_basic.csv）がありません。";
pub const BENCHMARKS_UNAVAILABLE: &str =
  "ベンチマークデータ（digital_gov_benchmarks.csv）がありません。";
pub const IT_UNAVAILABLE: &str = "IT基盤データ（country_it.csv）がありません。";
pub const TIMELINE_UNAVAILABLE: &str = "年表データがありません。";
pub const TRANSLATIONS_UNAVAILABLE: &str =
  "注意：translations_ja.csv が読み込めないため、detailは原文表示になります。";

pub const HIGHER_BETTER: &str = "値が高いほど良い";
pub const LOWER_BETTER: &str = "値が低いほど良い（順位）";

/// `出典N` in tables, `公式出典N` on the country page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStyle {
  Table,
  Official,
}

impl SourceStyle {
  pub fn label(self, n: usize) -> String {
    match self {
      Self::Table => format!("出典{n}"),
      Self::Official => format!("公式出典{n}"),
    }
  }
}

/// `年：2023`, or `年：N/A` when blank.
pub fn year_label(year: &str) -> String {
  let year = year.trim();
  if year.is_empty() || year == NOT_AVAILABLE {
    format!("年：{NOT_AVAILABLE}")
  } else {
    format!("年：{year}")
  }
}

pub fn unit_note(unit: &str) -> String { format!("単位：{}", unit.trim()) }

pub fn score_range_note(min: &str, max: &str) -> String {
  format!("スコア範囲：{}〜{}", min.trim(), max.trim())
}

pub fn source_name_note(name: &str) -> String { format!("出典元：{}", name.trim()) }

pub fn comparison_meta(version: &str, status: &str, countries: &[String]) -> String {
  format!(
    "表示：version={version} / status={status} / countries={}",
    countries.join(", ")
  )
}

pub fn country_subtitle(version: &str, status: &str) -> String {
  format!("version={version} / status={status}")
}

pub fn country_meta(country_id: &str, rows: usize) -> String {
  format!("国: {country_id} / 行数: {rows}")
}
