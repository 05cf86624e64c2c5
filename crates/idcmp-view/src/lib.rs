//! Version resolution, classification and declarative rendering for the
//! digital-ID comparison views.
//!
//! Nothing here touches a terminal or a DOM. Renderers take the loaded
//! [`DataStore`] and a [`ViewState`] and return plain `Serialize` trees.
//!
//! [`DataStore`]: idcmp_store::DataStore

pub mod classify;
pub mod labels;
pub mod render;
pub mod state;
pub mod version;

pub use render::{
  Cell, ComparisonPage, CountryPage, Panel, Row, Table, render_basic_summary,
  render_benchmarks, render_chips, render_comparison, render_comparison_page,
  render_country_page, render_it_infra, render_map, subject_from_query,
};
pub use state::{BASELINE_COUNTRY, DEFAULT_COUNTRIES, RowKind, ViewState};
pub use version::{Versions, resolve_versions};

#[cfg(test)]
mod tests;
