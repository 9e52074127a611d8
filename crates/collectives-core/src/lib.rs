//! Collectives Core Library
//!
//! The logic behind the collectives front end, kept free of any UI
//! dependency so it can be exercised directly from tests.
//!
//! ## Overview
//!
//! Every page in the app is a view over a GraphQL backend. What little
//! state there is lives in the navigable location (the route and its query
//! string), so this crate models it as pure functions:
//!
//! - **Search**: [`SearchState::from_query`], [`on_submit`] and
//!   [`on_page_change`] turn query parameters into search requests and user
//!   intent back into query parameters. [`ResultView`] picks what the search
//!   page shows for the latest collaborator snapshot.
//! - **Gift cards**: redeem-link derivation and the success-screen messages.
//! - **Iframe**: membership listing parameters and height reporting to the
//!   embedding window.
//! - **Api**: the [`CollectivesApi`] collaborator and its GraphQL client.
//!
//! ## Quick Start
//!
//! ```ignore
//! use collectives_core::{on_page_change, QueryParams, SearchState};
//!
//! let query = QueryParams::parse("q=open+source&limit=20");
//! let state = SearchState::from_query(&query);
//! assert_eq!(state.offset, 0);
//!
//! let next = on_page_change(&query, 20);
//! assert_eq!(next.to_string(), "q=open%20source&limit=20&offset=20");
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod gift_cards;
pub mod iframe;
pub mod logging;
pub mod query;
pub mod search;
pub mod types;

// Re-exports
pub use api::{fetch_search, CollectivesApi, GraphqlClient, MembershipsRequest};
pub use config::SiteConfig;
pub use error::{CollectivesError, CollectivesResult};
pub use gift_cards::{
    copy_redeem_links, redeem_link, redeem_links_text, success_message, ClipboardCopy, CopyError,
    DeliverType, GiftCard, GiftCardBatch,
};
pub use iframe::{
    resolve_order_by, HeightChange, HeightReporter, IframeParams, NotifyError, ParentNotifier,
};
pub use query::QueryParams;
pub use search::{
    on_page_change, on_submit, pledge_link, PageWindow, ResultView, SearchSnapshot, SearchState,
    DEFAULT_LIMIT,
};
pub use types::*;
