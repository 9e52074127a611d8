//! What the search page shows for a given collaborator snapshot.

use super::pagination::PageWindow;
use super::state::DEFAULT_LIMIT;
use crate::query::QueryParams;
use crate::types::{Collective, SearchResult};

/// Latest state reported by the data collaborator, plus the term it was
/// asked about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSnapshot {
    pub term: String,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<SearchResult>,
}

impl SearchSnapshot {
    /// Snapshot for `term` given the latest request outcome, if any.
    pub fn from_outcome(
        term: &str,
        loading: bool,
        outcome: Option<&Result<SearchResult, String>>,
    ) -> Self {
        let (result, error) = match outcome {
            Some(Ok(result)) => (Some(result.clone()), None),
            Some(Err(message)) => (None, Some(message.clone())),
            None => (None, None),
        };
        Self {
            term: term.to_string(),
            loading,
            error,
            result,
        }
    }
}

/// The one thing the result area renders.
///
/// Recomputed on every render from a [`SearchSnapshot`]; nothing persists
/// between passes.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// The collaborator failed. Rendered as a full error page.
    Error { message: String },
    /// Waiting for the first result set.
    Loading,
    /// No term (or only whitespace): neither grid nor "no matches".
    EmptyQuery,
    /// A term but no result set and nothing in flight. Renders nothing.
    Idle,
    /// The term matched nothing.
    NoMatches { term: String },
    /// Results to show, with pagination when there is more than one page.
    HasMatches {
        term: String,
        collectives: Vec<Collective>,
        pagination: Option<PageWindow>,
    },
}

impl ResultView {
    /// Pick the view for `snapshot`.
    ///
    /// Checked in order: error, loading without a result, empty term,
    /// missing result, result cardinality. An error wins over loading.
    pub fn from_snapshot(snapshot: &SearchSnapshot) -> Self {
        if let Some(message) = &snapshot.error {
            return ResultView::Error {
                message: message.clone(),
            };
        }

        if snapshot.loading && snapshot.result.is_none() {
            return ResultView::Loading;
        }

        let term = snapshot.term.trim();
        if term.is_empty() {
            return ResultView::EmptyQuery;
        }

        let Some(result) = &snapshot.result else {
            return ResultView::Idle;
        };

        if result.collectives.is_empty() {
            return ResultView::NoMatches {
                term: snapshot.term.clone(),
            };
        }

        let limit = result.limit.unwrap_or(DEFAULT_LIMIT);
        let offset = result.offset.unwrap_or(0);
        let pagination = (result.total > u64::from(limit))
            .then(|| PageWindow::new(offset, result.total, limit));

        ResultView::HasMatches {
            term: snapshot.term.clone(),
            collectives: result.collectives.clone(),
            pagination,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultView::Error { .. })
    }

    /// Whether the collective grid is rendered.
    pub fn shows_grid(&self) -> bool {
        matches!(self, ResultView::HasMatches { .. })
    }

    /// Whether the "no collectives found" message is rendered.
    pub fn shows_no_matches(&self) -> bool {
        matches!(self, ResultView::NoMatches { .. })
    }

    pub fn shows_pagination(&self) -> bool {
        matches!(
            self,
            ResultView::HasMatches {
                pagination: Some(_),
                ..
            }
        )
    }

    /// Whether the "if you don't see the collective" call to action is
    /// rendered below the grid.
    pub fn shows_secondary_cta(&self) -> bool {
        self.shows_grid()
    }

    /// Term a pledge call to action should carry, if one is rendered.
    pub fn pledge_term(&self) -> Option<&str> {
        match self {
            ResultView::NoMatches { term } | ResultView::HasMatches { term, .. } => Some(term),
            _ => None,
        }
    }
}

/// Link to create a pledge for a collective that does not exist yet.
pub fn pledge_link(website_url: &str, term: &str) -> String {
    let query = QueryParams::new().with("name", term);
    format!("{}/pledges/new?{}", website_url.trim_end_matches('/'), query)
}
