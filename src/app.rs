use std::sync::Arc;

use collectives_core::{GraphqlClient, QueryParams};
use dioxus::prelude::*;

use crate::context::{ApiContext, SharedApi};
use crate::pages::{CollectivesIframe, GiftCardsCreated, Home, NotFound, Search};
use crate::startup;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Entry point, forwards to the start route or the search page
/// - `/search?q=&limit=&offset=` - Search with query-string state
/// - `/:slug/collectives/iframe?id=&role=&orderBy=&limit=` - Embeddable memberships
/// - `/:slug/gift-cards/created` - Confirmation after creating gift cards
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/search?:..query")]
    Search { query: QueryParams },
    #[route("/:collective_slug/collectives/iframe?:..query")]
    CollectivesIframe {
        collective_slug: String,
        query: QueryParams,
    },
    #[route("/:collective_slug/gift-cards/created")]
    GiftCardsCreated { collective_slug: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Search page with no term.
    pub fn search_home() -> Self {
        Route::Search {
            query: QueryParams::new(),
        }
    }
}

/// Root application component.
///
/// Provides global styles, site config, the API client and routing.
#[component]
pub fn App() -> Element {
    let startup = use_hook(startup);

    let api = use_hook(|| match GraphqlClient::new(&startup.site) {
        Ok(client) => {
            tracing::info!("GraphQL client ready for {}", client.endpoint());
            Some(Arc::new(client) as SharedApi)
        }
        Err(e) => {
            tracing::error!("Failed to create GraphQL client: {}", e);
            None
        }
    });

    use_context_provider(|| startup.site.clone());
    use_context_provider(|| ApiContext(api));
    use_context_provider(|| Signal::new(startup.gift_cards.clone()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
