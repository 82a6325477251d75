//! The user's (country, disaster type, year) selection and what a search
//! over it produces.
//!
//! The valid years depend on the other two fields, so changing the country
//! or the disaster type always clears the year.

use crate::filter;
use crate::geo::{self, MapView};
use crate::record::{DisasterRecord, DisasterType};
use geojson::FeatureCollection;

/// Notice shown when a complete selection matches no record.
pub const NO_DATA_MESSAGE: &str = "No data found for selected criteria";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    country: Option<String>,
    disaster_type: Option<DisasterType>,
    year: Option<i32>,
}

/// A complete selection, borrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criteria<'a> {
    pub country: &'a str,
    pub disaster_type: DisasterType,
    pub year: i32,
}

/// Records, boundary and map view for a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub records: Vec<DisasterRecord>,
    pub boundary: FeatureCollection,
    pub view: MapView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(SearchResult),
    NoData,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn disaster_type(&self) -> Option<DisasterType> {
        self.disaster_type
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Set or clear the country; the year is cleared either way.
    pub fn set_country(&mut self, country: Option<String>) {
        self.country = country;
        self.year = None;
    }

    /// Set or clear the disaster type; the year is cleared either way.
    pub fn set_disaster_type(&mut self, disaster_type: Option<DisasterType>) {
        self.disaster_type = disaster_type;
        self.year = None;
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    /// Both year prerequisites are set.
    pub fn can_pick_year(&self) -> bool {
        self.country.is_some() && self.disaster_type.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.criteria().is_some()
    }

    pub fn criteria(&self) -> Option<Criteria<'_>> {
        Some(Criteria {
            country: self.country.as_deref()?,
            disaster_type: self.disaster_type?,
            year: self.year?,
        })
    }

    pub fn available_years(&self, records: &[DisasterRecord]) -> Vec<i32> {
        filter::available_years(
            records,
            self.country(),
            self.disaster_type.map(|t| t.label()),
        )
    }

    /// Records matching a complete selection; empty otherwise.
    pub fn filter(&self, records: &[DisasterRecord]) -> Vec<DisasterRecord> {
        match self.criteria() {
            Some(c) => filter::filter_records(records, c.country, c.disaster_type.label(), c.year),
            None => Vec::new(),
        }
    }

    /// Run the search for a complete selection; `None` when incomplete.
    ///
    /// Without loaded boundaries the result carries an empty collection and
    /// the fallback view.
    pub fn search(
        &self,
        records: &[DisasterRecord],
        boundaries: Option<&FeatureCollection>,
        fallback: MapView,
    ) -> Option<SearchOutcome> {
        let criteria = self.criteria()?;
        let found = self.filter(records);
        if found.is_empty() {
            log::info!(
                "search: no records for {} / {} / {}",
                criteria.country,
                criteria.disaster_type,
                criteria.year
            );
            return Some(SearchOutcome::NoData);
        }

        let boundary = match boundaries {
            Some(fc) => geo::boundary_for(fc, criteria.country),
            None => FeatureCollection {
                bbox: None,
                features: Vec::new(),
                foreign_members: None,
            },
        };
        let view = geo::map_view(&boundary, fallback);
        log::info!(
            "search: {} records, {} boundary features for {}",
            found.len(),
            boundary.features.len(),
            criteria.country
        );
        Some(SearchOutcome::Found(SearchResult {
            records: found,
            boundary,
            view,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_dataset_csv;

    fn complete() -> Selection {
        let mut s = Selection::new();
        s.set_country(Some("USA".to_string()));
        s.set_disaster_type(Some(DisasterType::Flood));
        s.set_year(Some(2021));
        s
    }

    #[test]
    fn test_changing_country_resets_year() {
        let mut s = complete();
        s.set_country(Some("JPN".to_string()));
        assert_eq!(s.year(), None);
        assert_eq!(s.disaster_type(), Some(DisasterType::Flood));

        let mut s = complete();
        s.set_country(None);
        assert_eq!(s.year(), None);
        assert!(!s.can_pick_year());
    }

    #[test]
    fn test_changing_disaster_type_resets_year() {
        let mut s = complete();
        s.set_disaster_type(Some(DisasterType::Storm));
        assert_eq!(s.year(), None);
        assert_eq!(s.country(), Some("USA"));

        let mut s = complete();
        s.set_disaster_type(Some(DisasterType::Flood));
        assert_eq!(s.year(), None);
    }

    #[test]
    fn test_setting_year_keeps_other_fields() {
        let mut s = complete();
        s.set_year(Some(2020));
        assert_eq!(s.country(), Some("USA"));
        assert_eq!(s.disaster_type(), Some(DisasterType::Flood));
        assert_eq!(s.year(), Some(2020));
    }

    #[test]
    fn test_incomplete_selection_does_not_search() {
        let records = parse_dataset_csv(include_str!("../../fixtures/data.csv")).unwrap();
        let mut s = Selection::new();
        s.set_country(Some("USA".to_string()));
        s.set_disaster_type(Some(DisasterType::Flood));
        assert!(s.criteria().is_none());
        assert!(s.search(&records, None, MapView::default()).is_none());
        assert_eq!(s.available_years(&records), vec![2020, 2021]);
    }

    #[test]
    fn test_filter_needs_a_complete_selection() {
        let records = parse_dataset_csv(include_str!("../../fixtures/data.csv")).unwrap();
        let s = complete();
        let found = s.filter(&records);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| r.matches("USA", "Flood", 2021)));

        let mut partial = complete();
        partial.set_country(Some("USA".to_string()));
        assert!(partial.filter(&records).is_empty());
    }

    #[test]
    fn test_search_returns_records_boundary_and_view() {
        let records = parse_dataset_csv(include_str!("../../fixtures/data.csv")).unwrap();
        let boundaries =
            geo::parse_boundaries(include_str!("../../fixtures/countries.geo.json")).unwrap();
        let outcome = complete()
            .search(&records, Some(&boundaries), MapView::default())
            .unwrap();
        let SearchOutcome::Found(result) = outcome else {
            panic!("expected records");
        };
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.boundary.features.len(), 1);
        assert_ne!(result.view, MapView::default());
    }

    #[test]
    fn test_search_without_matches_is_no_data() {
        let records = parse_dataset_csv(include_str!("../../fixtures/data.csv")).unwrap();
        let mut s = complete();
        s.set_year(Some(1900));
        assert_eq!(
            s.search(&records, None, MapView::default()),
            Some(SearchOutcome::NoData)
        );
    }

    #[test]
    fn test_search_without_boundaries_uses_fallback_view() {
        let records = parse_dataset_csv(include_str!("../../fixtures/data.csv")).unwrap();
        let fallback = MapView {
            center: [1.0, 2.0],
            zoom: 5,
        };
        match complete().search(&records, None, fallback) {
            Some(SearchOutcome::Found(result)) => {
                assert!(result.boundary.features.is_empty());
                assert_eq!(result.view, fallback);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
