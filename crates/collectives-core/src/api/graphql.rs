//! GraphQL over HTTP.
//!
//! Request bodies and response decoding are plain functions so they can be
//! checked without a server; [`GraphqlClient`] only adds the transport.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::{CollectivesApi, MembershipsRequest};
use crate::config::SiteConfig;
use crate::error::{CollectivesError, CollectivesResult};
use crate::search::SearchState;
use crate::types::{Membership, SearchResult};

const COLLECTIVE_FIELDS: &str = "
    id
    type
    slug
    name
    description
    imageUrl
    backgroundImage
    currency
    stats {
      balance
      yearlyBudget
      backers {
        all
      }
    }
";

/// Body of the search query for `state`.
pub fn search_request(state: &SearchState) -> Value {
    let query = format!(
        "query search($term: String!, $limit: Int, $offset: Int) {{
  search(term: $term, limit: $limit, offset: $offset) {{
    collectives {{{COLLECTIVE_FIELDS}}}
    limit
    offset
    total
  }}
}}"
    );
    json!({
        "query": query,
        "variables": {
            "term": state.term,
            "limit": state.limit,
            "offset": state.offset,
        },
    })
}

/// Body of the memberships query.
pub fn memberships_request(request: &MembershipsRequest) -> Value {
    let query = format!(
        "query allMembers($memberCollectiveSlug: String, $role: String, $orderBy: String, $orderDirection: String, $limit: Int) {{
  allMembers(memberCollectiveSlug: $memberCollectiveSlug, role: $role, orderBy: $orderBy, orderDirection: $orderDirection, limit: $limit) {{
    id
    role
    createdAt
    stats {{
      totalDonations
    }}
    collective {{{COLLECTIVE_FIELDS}}}
  }}
}}"
    );
    json!({
        "query": query,
        "variables": {
            "memberCollectiveSlug": request.member_collective_slug,
            "role": request.role,
            "orderBy": request.order_by,
            "orderDirection": request.order_direction,
            "limit": request.limit,
        },
    })
}

/// Pull `data.<field>` out of a GraphQL response.
///
/// A non-empty `errors` array wins over any partial data.
pub fn decode_data<T: DeserializeOwned>(
    response: Value,
    field: &'static str,
) -> CollectivesResult<T> {
    if let Some(errors) = response.get("errors").and_then(Value::as_array) {
        if !errors.is_empty() {
            let messages = errors
                .iter()
                .map(|e| {
                    e.get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown error")
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CollectivesError::GraphQl(messages));
        }
    }

    let data = response
        .get("data")
        .and_then(|data| data.get(field))
        .filter(|value| !value.is_null())
        .cloned()
        .ok_or(CollectivesError::MissingData(field))?;

    Ok(serde_json::from_value(data)?)
}

/// [`CollectivesApi`] backed by the platform's GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(config: &SiteConfig) -> CollectivesResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("collectives/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.graphql_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute(&self, body: Value) -> CollectivesResult<Value> {
        debug!("GraphQL request to {}: {}", self.endpoint, body["variables"]);

        let response = self
            .http
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("GraphQL endpoint returned {}: {}", status, body);
            return Err(CollectivesError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CollectivesApi for GraphqlClient {
    async fn search(&self, state: &SearchState) -> CollectivesResult<SearchResult> {
        let response = self.execute(search_request(state)).await?;
        decode_data(response, "search")
    }

    async fn memberships(
        &self,
        request: &MembershipsRequest,
    ) -> CollectivesResult<Vec<Membership>> {
        let response = self.execute(memberships_request(request)).await?;
        decode_data(response, "allMembers")
    }
}
