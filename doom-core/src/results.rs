//! Search results and references into them.
//!
//! The query service identifies a disaster by its position in the most
//! recent search response. A [`DisasterRef`] remembers which result list it
//! was taken from, so a reference held across a new search resolves to
//! nothing instead of silently pointing at a different disaster.

use crate::error::{DoomError, Result};
use crate::query::SearchHit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisasterRef {
    generation: u64,
    index: usize,
}

impl DisasterRef {
    /// Position in the result list, as sent to the service.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    generation: u64,
    hits: Vec<SearchHit>,
}

impl SearchResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new result list, invalidating every earlier reference.
    pub fn replace(&mut self, hits: Vec<SearchHit>) {
        self.generation += 1;
        self.hits = hits;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn reference(&self, index: usize) -> Option<DisasterRef> {
        (index < self.hits.len()).then_some(DisasterRef {
            generation: self.generation,
            index,
        })
    }

    pub fn resolve(&self, r: DisasterRef) -> Option<&SearchHit> {
        if r.generation != self.generation {
            return None;
        }
        self.hits.get(r.index)
    }

    /// Service id for a reference, failing once the results have moved on.
    pub fn disaster_id(&self, r: DisasterRef) -> Result<usize> {
        self.resolve(r)
            .map(|_| r.index)
            .ok_or(DoomError::StaleReference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(country: &str) -> SearchHit {
        serde_json::from_value(serde_json::json!({
            "Year": 2020, "Country": country, "Disaster Type": "Flood"
        }))
        .unwrap()
    }

    #[test]
    fn test_references_resolve_within_their_generation() {
        let mut results = SearchResults::new();
        results.replace(vec![hit("Japan"), hit("Bangladesh")]);
        let r = results.reference(1).unwrap();
        assert_eq!(r.index(), 1);
        assert_eq!(results.resolve(r).map(|h| h.country.as_str()), Some("Bangladesh"));
        assert_eq!(results.disaster_id(r).unwrap(), 1);
        assert!(results.reference(2).is_none());
    }

    #[test]
    fn test_new_search_invalidates_old_references() {
        let mut results = SearchResults::new();
        results.replace(vec![hit("Japan"), hit("Bangladesh")]);
        let r = results.reference(0).unwrap();
        results.replace(vec![hit("Chile"), hit("Peru")]);
        assert!(results.resolve(r).is_none());
        assert!(matches!(results.disaster_id(r), Err(DoomError::StaleReference)));

        results.clear();
        assert!(results.is_empty());
    }
}
