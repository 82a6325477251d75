//! Application state managed via Dioxus context.
//!
//! Each app bundles its reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context`.

use dioxus::core::Task;
use dioxus::prelude::*;
use doom_core::geo::CountryOption;
use doom_core::query::{DisasterDetail, NarrativeTab};
use doom_core::record::DisasterRecord;
use doom_core::results::{DisasterRef, SearchResults};
use doom_core::selection::{SearchResult, Selection};
use doom_core::supersede::{RequestSequence, Settled};
use doom_core::DoomError;
use geojson::FeatureCollection;
use std::rc::Rc;

/// Shared state of the selection dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The full dataset, read-only once loaded
    pub records: Signal<Rc<[DisasterRecord]>>,
    /// Boundary features of every country (None until loaded)
    pub boundaries: Signal<Option<Rc<FeatureCollection>>>,
    /// Options of the country selector
    pub countries: Signal<Vec<CountryOption>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Whether a search is running
    pub searching: Signal<bool>,
    /// Error or "no data" message
    pub error_msg: Signal<Option<String>>,
    pub selection: Signal<Selection>,
    /// Result of the last successful search
    pub result: Signal<Option<SearchResult>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            records: Signal::new(Rc::from(Vec::new())),
            boundaries: Signal::new(None),
            countries: Signal::new(Vec::new()),
            loading: Signal::new(true),
            searching: Signal::new(false),
            error_msg: Signal::new(None),
            selection: Signal::new(Selection::new()),
            result: Signal::new(None),
        }
    }
}

/// Shared state of the civic response assistant.
#[derive(Clone, Copy)]
pub struct AssistantState {
    pub search_term: Signal<String>,
    pub results: Signal<SearchResults>,
    /// Disaster picked from the results
    pub selected: Signal<Option<DisasterRef>>,
    pub detail: Signal<Option<DisasterDetail>>,
    pub active_tab: Signal<NarrativeTab>,
    pub question: Signal<String>,
    pub chat_response: Signal<Option<String>>,
    pub error_msg: Signal<Option<String>>,
    /// Ordering of search requests; only the newest response is applied
    pub searches: Signal<RequestSequence>,
    /// Ordering of detail requests
    pub details: Signal<RequestSequence>,
    /// Ordering of chat requests; a new question or pick stales older answers
    pub chats: Signal<RequestSequence>,
    /// In-flight search, cancelled when a newer one starts
    pub search_task: Signal<Option<Task>>,
}

impl AssistantState {
    pub fn new() -> Self {
        Self {
            search_term: Signal::new(String::new()),
            results: Signal::new(SearchResults::new()),
            selected: Signal::new(None),
            detail: Signal::new(None),
            active_tab: Signal::new(NarrativeTab::default()),
            question: Signal::new(String::new()),
            chat_response: Signal::new(None),
            error_msg: Signal::new(None),
            searches: Signal::new(RequestSequence::new()),
            details: Signal::new(RequestSequence::new()),
            chats: Signal::new(RequestSequence::new()),
            search_task: Signal::new(None),
        }
    }
}

/// Apply a settled chat call: an answer replaces the response and clears
/// the error, a failure sets the error, a superseded call changes nothing.
pub fn apply_chat(
    settled: Settled<String, DoomError>,
    response: &mut Option<String>,
    error_msg: &mut Option<String>,
) {
    match settled {
        Settled::Applied(answer) => {
            *response = Some(answer);
            *error_msg = None;
        }
        Settled::Failed(e) => *error_msg = Some(e.to_string()),
        Settled::Superseded => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_clears_previous_error() {
        let mut response = None;
        let mut error_msg = Some("Failed to fetch chat response: 502 Bad Gateway".to_string());
        apply_chat(Settled::Applied("Boil water".to_string()), &mut response, &mut error_msg);
        assert_eq!(response.as_deref(), Some("Boil water"));
        assert_eq!(error_msg, None);
    }

    #[test]
    fn test_older_answer_does_not_overwrite_newer() {
        let chats = RequestSequence::new();
        let first = chats.begin();
        let second = chats.begin();
        let mut response = None;
        let mut error_msg = None;

        apply_chat(second.settle(Ok("answer 2".to_string())), &mut response, &mut error_msg);
        apply_chat(first.settle(Ok("answer 1".to_string())), &mut response, &mut error_msg);
        assert_eq!(response.as_deref(), Some("answer 2"));

        // a failure after a new pick is dropped too
        let pending = chats.begin();
        chats.cancel_all();
        apply_chat(pending.settle(Err(DoomError::StaleReference)), &mut response, &mut error_msg);
        assert_eq!(error_msg, None);
        assert_eq!(response.as_deref(), Some("answer 2"));
    }
}
