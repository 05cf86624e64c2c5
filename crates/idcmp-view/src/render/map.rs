//! World-map pins. Coordinates are UI percentages, not a projection.

use idcmp_core::country::{FlagImage, FlagSize, country_link};
use idcmp_store::DataStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
  pub id:         String,
  pub name:       String,
  /// Percent from the left edge.
  pub x:          f64,
  /// Percent from the top edge.
  pub y:          f64,
  pub href:       String,
  pub aria_label: String,
  pub flag:       Option<FlagImage>,
}

/// One pin per country with indicator data and a numeric position.
pub fn render_map(store: &DataStore) -> Vec<MapPin> {
  let pins: Vec<MapPin> = store
    .indicator_country_ids()
    .into_iter()
    .filter_map(|id| {
      let country = store.country_or_placeholder(&id);
      let (x, y) = country.map_position()?;
      let name = country.display_name().to_string();
      Some(MapPin {
        aria_label: format!("{name} ({id})"),
        href: country_link(&id),
        flag: country.flag_image(FlagSize::SMALL),
        id,
        name,
        x,
        y,
      })
    })
    .collect();
  tracing::debug!(pins = pins.len(), "rendered map");
  pins
}

#[cfg(test)]
mod tests {
  use idcmp_core::{country::Country, record::IndicatorValue};
  use idcmp_store::Collections;

  use super::*;

  #[test]
  fn pins_need_coordinates_and_data() {
    let store = DataStore::new(Collections {
      countries: vec![
        Country {
          country_id: "EST".into(),
          name_en: "Estonia".into(),
          map_lon: "55".into(),
          map_lat: "0.5".into(),
          map_dx: "50".into(),
          ..Default::default()
        },
        Country {
          country_id: "JPN".into(),
          map_lon: "x".into(),
          map_lat: "40".into(),
          ..Default::default()
        },
        Country {
          country_id: "DNK".into(),
          map_lon: "50".into(),
          map_lat: "20".into(),
          ..Default::default()
        },
      ],
      indicator_values: ["EST", "JPN"]
        .map(|c| IndicatorValue {
          country_id: c.into(),
          indicator_id: "I01".into(),
          ..Default::default()
        })
        .into(),
      ..Default::default()
    });

    let pins = render_map(&store);
    assert_eq!(pins.len(), 1);
    assert_eq!(pins[0].id, "EST");
    assert_eq!((pins[0].x, pins[0].y), (99.0, 1.0));
    assert_eq!(pins[0].aria_label, "Estonia (EST)");
    assert_eq!(pins[0].href, "./country.html?id=EST");
  }
}
