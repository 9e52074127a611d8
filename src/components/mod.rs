//! UI Components for the collectives app.
//!
//! Components here know about collectives data; the data-agnostic
//! primitives live in `collectives-ui`.

mod collective_card;
mod create_virtual_cards_success;
mod error_page;
mod memberships;
mod page;
mod pagination;
mod search_results;

pub use collective_card::{format_amount, CollectiveCard};
pub use create_virtual_cards_success::{CreateVirtualCardsSuccess, REDEEM_LINKS_FIELD};
pub use error_page::ErrorPage;
pub use memberships::MembershipsList;
pub use page::Page;
pub use pagination::Pagination;
pub use search_results::SearchResults;
