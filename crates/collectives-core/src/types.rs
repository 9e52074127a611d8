//! Shapes returned by the GraphQL collaborator.
//!
//! These are consumed read-only; views branch on their presence and shape
//! but never mutate them.

use serde::{Deserialize, Serialize};

/// A community or organization, identified by its slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collective {
    #[serde(default)]
    pub id: Option<u64>,
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub stats: Option<CollectiveStats>,
}

impl Collective {
    /// Name to display, falling back to the slug.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.slug,
        }
    }
}

/// Aggregate figures shown on a collective card. Amounts are in minor units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectiveStats {
    #[serde(default)]
    pub balance: Option<i64>,
    #[serde(default)]
    pub yearly_budget: Option<i64>,
    #[serde(default)]
    pub backers: Option<BackerStats>,
}

/// Backer counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackerStats {
    #[serde(default)]
    pub all: u64,
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub collectives: Vec<Collective>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u64>,
}

/// A member collective's membership in another collective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    #[serde(default)]
    pub id: Option<u64>,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub collective: Collective,
    #[serde(default)]
    pub stats: Option<MembershipStats>,
}

/// Per-membership contribution figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipStats {
    #[serde(default)]
    pub total_donations: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collective_decodes_graphql_shape() {
        let json = r#"{
            "id": 12,
            "slug": "webpack",
            "name": "webpack",
            "type": "COLLECTIVE",
            "imageUrl": "https://images/webpack.png",
            "stats": { "balance": 1000, "yearlyBudget": 5000, "backers": { "all": 42 } }
        }"#;
        let collective: Collective = serde_json::from_str(json).unwrap();
        assert_eq!(collective.kind.as_deref(), Some("COLLECTIVE"));
        assert_eq!(
            collective.image_url.as_deref(),
            Some("https://images/webpack.png")
        );
        let stats = collective.stats.unwrap();
        assert_eq!(stats.backers.unwrap().all, 42);
        assert_eq!(stats.yearly_budget, Some(5000));
    }

    #[test]
    fn display_name_falls_back_to_slug() {
        let collective: Collective = serde_json::from_str(r#"{"slug":"babel","name":" "}"#).unwrap();
        assert_eq!(collective.display_name(), "babel");
    }

    #[test]
    fn search_result_defaults_missing_fields() {
        let result: SearchResult = serde_json::from_str("{}").unwrap();
        assert!(result.collectives.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.limit, None);
    }
}
