//! Site configuration shared by every page.

/// Public website origin used to build redeem and pledge links.
pub const DEFAULT_WEBSITE_URL: &str = "https://opencollective.com";

/// API origin; GraphQL requests go to `{api_url}/graphql`.
pub const DEFAULT_API_URL: &str = "https://api.opencollective.com";

/// Origins the front end talks to and links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Public website origin (no trailing slash)
    pub website_url: String,
    /// API origin (no trailing slash)
    pub api_url: String,
}

impl SiteConfig {
    /// Build a config, normalizing away trailing slashes.
    pub fn new(website_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            website_url: trim_origin(website_url.into()),
            api_url: trim_origin(api_url.into()),
        }
    }

    /// GraphQL endpoint for this site.
    pub fn graphql_endpoint(&self) -> String {
        format!("{}/graphql", self.api_url)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WEBSITE_URL, DEFAULT_API_URL)
    }
}

fn trim_origin(mut origin: String) -> String {
    while origin.ends_with('/') {
        origin.pop();
    }
    origin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_site() {
        let config = SiteConfig::default();
        assert_eq!(config.website_url, "https://opencollective.com");
        assert_eq!(
            config.graphql_endpoint(),
            "https://api.opencollective.com/graphql"
        );
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = SiteConfig::new("http://localhost:3000/", "http://localhost:3060//");
        assert_eq!(config.website_url, "http://localhost:3000");
        assert_eq!(config.graphql_endpoint(), "http://localhost:3060/graphql");
    }
}
