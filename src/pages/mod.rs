//! Page components for the collectives app.

mod collectives_iframe;
mod gift_cards_created;
mod home;
mod not_found;
mod search;

pub use collectives_iframe::CollectivesIframe;
pub use gift_cards_created::GiftCardsCreated;
pub use home::Home;
pub use not_found::NotFound;
pub use search::Search;
