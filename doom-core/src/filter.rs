//! Record filter over the in-memory disaster dataset.
//!
//! All comparisons are exact: case-sensitive string equality on country and
//! disaster type, integer equality on year. Results keep input order.

use crate::record::DisasterRecord;
use std::collections::BTreeSet;

/// Records of one (country, disaster type) pair across every year.
pub fn records_of<'a>(
    records: &'a [DisasterRecord],
    country: &'a str,
    disaster_type: &'a str,
) -> impl Iterator<Item = &'a DisasterRecord> + 'a {
    records.iter().filter(move |r| r.is_of(country, disaster_type))
}

/// Borrowing form of [`filter_records`].
pub fn matching<'a>(
    records: &'a [DisasterRecord],
    country: &'a str,
    disaster_type: &'a str,
    year: i32,
) -> impl Iterator<Item = &'a DisasterRecord> + 'a {
    records
        .iter()
        .filter(move |r| r.matches(country, disaster_type, year))
}

/// Distinct years with at least one record for the pair, ascending.
///
/// Empty when either selector is unset or nothing matches.
pub fn available_years(
    records: &[DisasterRecord],
    country: Option<&str>,
    disaster_type: Option<&str>,
) -> Vec<i32> {
    let (Some(country), Some(disaster_type)) = (country, disaster_type) else {
        return Vec::new();
    };
    records_of(records, country, disaster_type)
        .map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every record equal on all three fields, in input order. Duplicates are kept.
pub fn filter_records(
    records: &[DisasterRecord],
    country: &str,
    disaster_type: &str,
    year: i32,
) -> Vec<DisasterRecord> {
    matching(records, country, disaster_type, year)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, year: i32, disaster_type: &str, total_deaths: u64) -> DisasterRecord {
        DisasterRecord {
            country: country.to_string(),
            year,
            disaster_type: disaster_type.to_string(),
            total_deaths,
            affected_population: 0,
            economic_loss: 0.0,
        }
    }

    fn us_floods() -> Vec<DisasterRecord> {
        vec![record("US", 2020, "Flood", 5), record("US", 2021, "Flood", 3)]
    }

    #[test]
    fn test_two_year_scenario() {
        let records = us_floods();
        assert_eq!(
            available_years(&records, Some("US"), Some("Flood")),
            vec![2020, 2021]
        );
        assert_eq!(
            filter_records(&records, "US", "Flood", 2020),
            vec![records[0].clone()]
        );
    }

    #[test]
    fn test_available_years_are_distinct_and_ascending() {
        let records = vec![
            record("US", 2021, "Flood", 1),
            record("US", 1999, "Flood", 1),
            record("US", 2021, "Flood", 2),
            record("US", 2005, "Storm", 1),
            record("CA", 2003, "Flood", 1),
            record("US", 2010, "Flood", 1),
        ];
        assert_eq!(
            available_years(&records, Some("US"), Some("Flood")),
            vec![1999, 2010, 2021]
        );
    }

    #[test]
    fn test_available_years_need_both_selectors() {
        let records = us_floods();
        assert!(available_years(&records, None, Some("Flood")).is_empty());
        assert!(available_years(&records, Some("US"), None).is_empty());
        assert!(available_years(&records, None, None).is_empty());
    }

    #[test]
    fn test_available_years_empty_when_nothing_matches() {
        let records = us_floods();
        assert!(available_years(&records, Some("US"), Some("Storm")).is_empty());
        assert!(available_years(&records, Some("us"), Some("Flood")).is_empty());
        assert!(available_years(&[], Some("US"), Some("Flood")).is_empty());
    }

    #[test]
    fn test_filter_is_exact_and_case_sensitive() {
        let records = us_floods();
        assert!(filter_records(&records, "us", "Flood", 2020).is_empty());
        assert!(filter_records(&records, "US", "flood", 2020).is_empty());
        assert!(filter_records(&records, "US", "Flood", 2019).is_empty());
    }

    #[test]
    fn test_filter_keeps_duplicates_in_input_order() {
        let records = vec![
            record("US", 2020, "Flood", 9),
            record("US", 2020, "Storm", 1),
            record("US", 2020, "Flood", 4),
            record("US", 2020, "Flood", 9),
        ];
        let found = filter_records(&records, "US", "Flood", 2020);
        let deaths: Vec<u64> = found.iter().map(|r| r.total_deaths).collect();
        assert_eq!(deaths, vec![9, 4, 9]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = crate::record::parse_dataset_csv(include_str!("../../fixtures/data.csv")).unwrap();
        let once = filter_records(&records, "USA", "Flood", 2021);
        let twice = filter_records(&once, "USA", "Flood", 2021);
        assert_eq!(once.len(), 2);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_every_filtered_record_matches_and_none_is_missed() {
        let records = crate::record::parse_dataset_csv(include_str!("../../fixtures/data.csv")).unwrap();
        for year in available_years(&records, Some("BGD"), Some("Storm")) {
            let found = filter_records(&records, "BGD", "Storm", year);
            let expected = records
                .iter()
                .filter(|r| r.country == "BGD" && r.disaster_type == "Storm" && r.year == year)
                .count();
            assert_eq!(found.len(), expected);
            assert!(found.iter().all(|r| r.matches("BGD", "Storm", year)));
        }
    }
}
