//! Search state derived from, and written back to, the query string.

use serde::{Deserialize, Serialize};

use crate::query::QueryParams;

/// Page size used when `limit` is absent or unusable.
pub const DEFAULT_LIMIT: u32 = 20;

/// Term, page size and offset: everything a search request needs.
///
/// Replaced wholesale on every navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchState {
    pub term: String,
    pub limit: u32,
    pub offset: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            term: String::new(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl SearchState {
    /// Read `q`, `limit` and `offset` from the query string.
    ///
    /// Never fails: a missing or non-numeric `limit` (or zero) becomes
    /// [`DEFAULT_LIMIT`], a missing or non-numeric `offset` becomes 0.
    /// Offsets are not checked against `limit`.
    pub fn from_query(query: &QueryParams) -> Self {
        let term = query.get("q").unwrap_or_default().to_string();
        let limit = query
            .get("limit")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_LIMIT);
        let offset = query
            .get("offset")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(0);

        Self {
            term,
            limit,
            offset,
        }
    }

    /// Whether there is anything to search for.
    pub fn has_term(&self) -> bool {
        !self.term.trim().is_empty()
    }
}

/// Query parameters for a freshly submitted term.
///
/// Only `q` survives: the search restarts from the first page with the
/// default page size.
pub fn on_submit(term: &str) -> QueryParams {
    QueryParams::new().with("q", term)
}

/// Query parameters after a page change.
///
/// Merges `offset` into `current` and keeps every other parameter as is.
/// The offset is forwarded without range checks.
pub fn on_page_change(current: &QueryParams, offset: u64) -> QueryParams {
    current.clone().with("offset", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_query_is_empty() {
        let state = SearchState::from_query(&QueryParams::new());
        assert_eq!(state, SearchState::default());
        assert_eq!(state.limit, 20);
        assert_eq!(state.offset, 0);
        assert_eq!(state.term, "");
    }

    #[test]
    fn reads_all_three_parameters() {
        let state = SearchState::from_query(&QueryParams::parse("q=babel&limit=10&offset=30"));
        assert_eq!(
            state,
            SearchState {
                term: "babel".to_string(),
                limit: 10,
                offset: 30,
            }
        );
    }

    #[test]
    fn non_numeric_values_fall_back_to_defaults() {
        let state = SearchState::from_query(&QueryParams::parse("q=x&limit=ten&offset=abc"));
        assert_eq!(state.limit, DEFAULT_LIMIT);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn zero_limit_and_negative_offset_fall_back() {
        let state = SearchState::from_query(&QueryParams::parse("limit=0&offset=-20"));
        assert_eq!(state.limit, DEFAULT_LIMIT);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let state = SearchState::from_query(&QueryParams::parse("limit=+15+&offset=%2040"));
        assert_eq!(state.limit, 15);
        assert_eq!(state.offset, 40);
    }

    #[test]
    fn offset_not_aligned_to_limit_is_kept() {
        let state = SearchState::from_query(&QueryParams::parse("limit=20&offset=7"));
        assert_eq!(state.offset, 7);
    }

    #[test]
    fn submit_drops_previous_paging() {
        let next = on_submit("foo");
        assert_eq!(next.get("q"), Some("foo"));
        assert!(!next.contains("limit"));
        assert!(!next.contains("offset"));
        assert_eq!(next.to_string(), "q=foo");
    }

    #[test]
    fn page_change_preserves_term_and_limit() {
        let current = QueryParams::parse("q=x&limit=20&offset=0");
        let next = on_page_change(&current, 40);
        assert_eq!(
            SearchState::from_query(&next),
            SearchState {
                term: "x".to_string(),
                limit: 20,
                offset: 40,
            }
        );
        assert_eq!(next.to_string(), "q=x&limit=20&offset=40");
    }

    #[test]
    fn page_change_keeps_unrelated_parameters() {
        let current = QueryParams::parse("q=x&utm_source=newsletter");
        let next = on_page_change(&current, 20);
        assert_eq!(next.get("utm_source"), Some("newsletter"));
        assert_eq!(next.get("offset"), Some("20"));
    }

    #[test]
    fn page_change_forwards_out_of_range_offset() {
        let next = on_page_change(&QueryParams::parse("q=x"), 1_000_000);
        assert_eq!(SearchState::from_query(&next).offset, 1_000_000);
    }

    #[test]
    fn has_term_ignores_whitespace() {
        let state = SearchState::from_query(&QueryParams::parse("q=++"));
        assert!(!state.has_term());
    }
}
