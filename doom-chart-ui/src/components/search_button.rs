//! Search button and the search it triggers.

use crate::config::DashboardConfig;
use crate::state::AppState;
use dioxus::prelude::*;
use doom_core::geo::MapView;
use doom_core::selection::{SearchOutcome, SearchResult, NO_DATA_MESSAGE};

/// Publish a search outcome. Without matches the previous result is
/// cleared and the "no data" notice takes its place.
pub fn apply_outcome(
    outcome: SearchOutcome,
    result: &mut Option<SearchResult>,
    notice: &mut Option<String>,
) {
    match outcome {
        SearchOutcome::Found(found) => {
            *result = Some(found);
            *notice = None;
        }
        SearchOutcome::NoData => {
            *result = None;
            *notice = Some(NO_DATA_MESSAGE.to_string());
        }
    }
}

/// Filter the dataset by the current selection and publish the outcome.
///
/// A selection without matches clears the previous result and shows the
/// "no data" notice. Incomplete selections do nothing.
pub fn run_search(mut state: AppState, fallback: MapView) {
    let selection = state.selection.read().clone();
    if !selection.is_complete() {
        return;
    }

    state.searching.set(true);
    state.error_msg.set(None);

    let records = state.records.read().clone();
    let boundaries = state.boundaries.read().clone();
    if let Some(outcome) = selection.search(&records, boundaries.as_deref(), fallback) {
        apply_outcome(
            outcome,
            &mut state.result.write(),
            &mut state.error_msg.write(),
        );
    }

    state.searching.set(false);
}

/// Disabled until the selection is complete, and while a search runs.
#[component]
pub fn SearchButton() -> Element {
    let state = use_context::<AppState>();
    let config = use_context::<DashboardConfig>();
    let complete = state.selection.read().is_complete();
    let searching = (state.searching)();
    let disabled = !complete || searching;
    let background = if disabled { "#8d99ae" } else { "#ef233c" };

    rsx! {
        button {
            style: "border: none; border-radius: 30px; background: {background}; color: #edf2f4; padding: 15px 30px; font-size: 15px; cursor: pointer;",
            disabled: disabled,
            onclick: move |_| run_search(state, config.map.fallback),
            if searching { "Searching..." } else { "Search" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doom_core::record::{parse_dataset_csv, DisasterType};
    use doom_core::selection::Selection;

    fn selection(year: i32) -> Selection {
        let mut s = Selection::new();
        s.set_country(Some("USA".to_string()));
        s.set_disaster_type(Some(DisasterType::Flood));
        s.set_year(Some(year));
        s
    }

    #[test]
    fn test_no_data_clears_previous_result() {
        let records = parse_dataset_csv(include_str!("../../../fixtures/data.csv")).unwrap();
        let mut result = None;
        let mut notice = None;

        let found = selection(2021).search(&records, None, MapView::default()).unwrap();
        apply_outcome(found, &mut result, &mut notice);
        assert_eq!(result.as_ref().map(|r| r.records.len()), Some(2));
        assert_eq!(notice, None);

        let empty = selection(1999).search(&records, None, MapView::default()).unwrap();
        apply_outcome(empty, &mut result, &mut notice);
        assert!(result.is_none());
        assert_eq!(notice.as_deref(), Some(NO_DATA_MESSAGE));
    }

    #[test]
    fn test_found_replaces_notice() {
        let records = parse_dataset_csv(include_str!("../../../fixtures/data.csv")).unwrap();
        let mut result = None;
        let mut notice = Some(NO_DATA_MESSAGE.to_string());
        let found = selection(2020).search(&records, None, MapView::default()).unwrap();
        apply_outcome(found, &mut result, &mut notice);
        assert!(result.is_some());
        assert_eq!(notice, None);
    }
}
