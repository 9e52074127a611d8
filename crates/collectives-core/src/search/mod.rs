//! Search page logic.
//!
//! The navigable location is the single source of truth: the page derives a
//! [`SearchState`] from the query string, requests data for it, and answers
//! user intent with new query parameters instead of mutating anything.
//!
//! ```text
//!  query string ──from_query──▶ SearchState ──request──▶ SearchSnapshot
//!       ▲                                                     │
//!       │ on_submit / on_page_change                          ▼
//!   user intent ◀────────────── rendered view ◀──────── ResultView
//! ```

mod pagination;
mod state;
mod view;

pub use pagination::PageWindow;
pub use state::{on_page_change, on_submit, SearchState, DEFAULT_LIMIT};
pub use view::{pledge_link, ResultView, SearchSnapshot};
