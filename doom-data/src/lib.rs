//! Derived views over disaster records.
//!
//! This crate turns filtered records into forms suitable for the stats
//! panel and the historical trends chart.

/// Totals for the stats panel.
pub mod summary {
    use doom_core::record::DisasterRecord;
    use serde::Serialize;

    /// Shown in place of the panel when there is nothing to summarize.
    pub const NO_DATA: &str = "No data available";

    /// Impact totals over a set of records.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ImpactSummary {
        /// Number of records summed.
        pub events: usize,
        pub total_deaths: u64,
        pub affected_population: u64,
        /// Thousands of US$.
        pub economic_loss: f64,
    }

    impl ImpactSummary {
        /// Sum every record; `None` for an empty slice.
        pub fn from_records(records: &[DisasterRecord]) -> Option<Self> {
            if records.is_empty() {
                return None;
            }
            let summary = records.iter().fold(
                ImpactSummary {
                    events: 0,
                    total_deaths: 0,
                    affected_population: 0,
                    economic_loss: 0.0,
                },
                |mut acc, r| {
                    acc.events += 1;
                    acc.total_deaths = acc.total_deaths.saturating_add(r.total_deaths);
                    acc.affected_population =
                        acc.affected_population.saturating_add(r.affected_population);
                    acc.economic_loss += r.economic_loss;
                    acc
                },
            );
            Some(summary)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn record(deaths: u64, affected: u64, loss: f64) -> DisasterRecord {
            DisasterRecord {
                country: "USA".to_string(),
                year: 2021,
                disaster_type: "Flood".to_string(),
                total_deaths: deaths,
                affected_population: affected,
                economic_loss: loss,
            }
        }

        #[test]
        fn test_summary_sums_duplicates() {
            let records = vec![record(3, 800, 0.0), record(2, 0, 1500.0), record(3, 800, 0.0)];
            let summary = ImpactSummary::from_records(&records).unwrap();
            assert_eq!(summary.events, 3);
            assert_eq!(summary.total_deaths, 8);
            assert_eq!(summary.affected_population, 1600);
            assert_eq!(summary.economic_loss, 1500.0);
        }

        #[test]
        fn test_summary_empty() {
            assert!(ImpactSummary::from_records(&[]).is_none());
        }
    }
}

/// Year-by-year series for the historical trends chart.
pub mod trends {
    use doom_core::filter;
    use doom_core::record::DisasterRecord;
    use serde::Serialize;
    use std::collections::BTreeMap;

    /// One chart point: per-year sums for a (country, disaster type) pair.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct TrendPoint {
        pub year: i32,
        pub deaths: u64,
        pub affected: u64,
        pub events: usize,
    }

    /// Per-year totals across every year the pair has records for, ascending.
    pub fn trend_series(
        records: &[DisasterRecord],
        country: &str,
        disaster_type: &str,
    ) -> Vec<TrendPoint> {
        let mut by_year: BTreeMap<i32, TrendPoint> = BTreeMap::new();
        for r in filter::records_of(records, country, disaster_type) {
            let point = by_year.entry(r.year).or_insert(TrendPoint {
                year: r.year,
                deaths: 0,
                affected: 0,
                events: 0,
            });
            point.deaths = point.deaths.saturating_add(r.total_deaths);
            point.affected = point.affected.saturating_add(r.affected_population);
            point.events += 1;
        }
        log::info!(
            "trends: {} years for {} / {}",
            by_year.len(),
            country,
            disaster_type
        );
        by_year.into_values().collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use doom_core::record::parse_dataset_csv;

        #[test]
        fn test_trend_series_groups_by_year() {
            let records = parse_dataset_csv(include_str!("../../fixtures/data.csv")).unwrap();
            let series = trend_series(&records, "USA", "Flood");
            assert_eq!(
                series,
                vec![
                    TrendPoint { year: 2020, deaths: 5, affected: 1200, events: 1 },
                    TrendPoint { year: 2021, deaths: 5, affected: 800, events: 2 },
                ]
            );
        }

        #[test]
        fn test_trend_series_years_match_available_years() {
            let records = parse_dataset_csv(include_str!("../../fixtures/data.csv")).unwrap();
            let years: Vec<i32> = trend_series(&records, "BGD", "Storm")
                .iter()
                .map(|p| p.year)
                .collect();
            assert_eq!(
                years,
                filter::available_years(&records, Some("BGD"), Some("Storm"))
            );
        }

        #[test]
        fn test_trend_series_empty() {
            assert!(trend_series(&[], "USA", "Flood").is_empty());
        }
    }
}

/// Number formatting for display.
pub mod format {
    /// Group digits in threes: `1234567` -> `"1,234,567"`.
    pub fn format_count(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    /// Economic loss given in thousands of US$, as whole dollars: `1.5` -> `"$1,500"`.
    pub fn format_loss(thousands_usd: f64) -> String {
        let dollars = if thousands_usd.is_finite() && thousands_usd > 0.0 {
            (thousands_usd * 1000.0).round() as u64
        } else {
            0
        };
        format!("${}", format_count(dollars))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_count() {
            assert_eq!(format_count(0), "0");
            assert_eq!(format_count(999), "999");
            assert_eq!(format_count(1000), "1,000");
            assert_eq!(format_count(368820), "368,820");
            assert_eq!(format_count(10000000), "10,000,000");
        }

        #[test]
        fn test_format_loss() {
            assert_eq!(format_loss(0.0), "$0");
            assert_eq!(format_loss(1.5), "$1,500");
            assert_eq!(format_loss(35000.0), "$35,000,000");
            assert_eq!(format_loss(f64::NAN), "$0");
        }
    }
}
