//! The data collaborator behind every page.
//!
//! Pages hold an `Arc<dyn CollectivesApi>` from context; the desktop app
//! plugs in [`GraphqlClient`], tests plug in fakes.

mod graphql;

use async_trait::async_trait;

pub use graphql::{decode_data, memberships_request, search_request, GraphqlClient};

use crate::error::CollectivesResult;
use crate::search::SearchState;
use crate::types::{Membership, SearchResult};

/// Arguments of the memberships query used by the iframe page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipsRequest {
    pub member_collective_slug: String,
    pub role: Option<String>,
    pub order_by: String,
    pub order_direction: String,
    pub limit: u32,
}

/// Read-only access to collectives data.
#[async_trait]
pub trait CollectivesApi: Send + Sync {
    /// One page of collectives matching `state.term`.
    async fn search(&self, state: &SearchState) -> CollectivesResult<SearchResult>;

    /// Memberships of a member collective.
    async fn memberships(&self, request: &MembershipsRequest)
        -> CollectivesResult<Vec<Membership>>;
}

/// Run the search for `state`, skipping the request when there is no term.
///
/// Errors are flattened to their message so the outcome can live in UI
/// state and be compared between renders.
pub async fn fetch_search(
    api: &dyn CollectivesApi,
    state: &SearchState,
) -> Option<Result<SearchResult, String>> {
    if !state.has_term() {
        return None;
    }

    tracing::info!(
        term = %state.term,
        limit = state.limit,
        offset = state.offset,
        "Searching collectives"
    );
    Some(api.search(state).await.map_err(|e| {
        tracing::error!("Search failed: {}", e);
        e.to_string()
    }))
}
