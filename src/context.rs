//! Context providers for the collectives app.
//!
//! `App` provides the site config, the data collaborator and the gift card
//! batch (if one was loaded at startup) to every component.
//!
//! ## Usage
//!
//! ```ignore
//! let site = use_site_config();
//! let api = use_api();
//!
//! if let Some(api) = api {
//!     let result = api.search(&state).await?;
//! }
//! ```

use std::sync::Arc;

use collectives_core::{CollectivesApi, GiftCardBatch, SiteConfig};
use dioxus::prelude::*;

/// Shared data collaborator.
pub type SharedApi = Arc<dyn CollectivesApi>;

/// The collaborator, absent when the HTTP client could not be built.
#[derive(Clone)]
pub struct ApiContext(pub Option<SharedApi>);

/// Message shown when there is no collaborator to ask.
pub const API_UNAVAILABLE: &str = "The API client is unavailable";

/// Hook to access the site configuration.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access the data collaborator.
pub fn use_api() -> Option<SharedApi> {
    use_context::<ApiContext>().0
}

/// Hook to access the gift card batch loaded at startup.
pub fn use_gift_cards() -> Signal<Option<GiftCardBatch>> {
    use_context::<Signal<Option<GiftCardBatch>>>()
}
