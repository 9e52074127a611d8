//! Gift cards created - confirmation for the batch loaded at startup.

use dioxus::prelude::*;

use crate::components::{CreateVirtualCardsSuccess, Page};
use crate::context::use_gift_cards;

/// Confirmation page for `collective_slug`.
///
/// Shows the batch only when it belongs to the collective in the route.
#[component]
pub fn GiftCardsCreated(collective_slug: String) -> Element {
    let gift_cards = use_gift_cards();
    let batch = gift_cards().filter(|batch| batch.collective_slug == collective_slug);

    let body = match batch {
        Some(batch) => rsx! {
            CreateVirtualCardsSuccess {
                cards: batch.cards,
                deliver_type: batch.deliver_type,
                collective_slug: batch.collective_slug,
            }
        },
        None => {
            tracing::warn!("No gift cards loaded for {}", collective_slug);
            rsx! {
                div { class: "error-page",
                    p { class: "error-message", "No gift cards were created for {collective_slug}." }
                }
            }
        }
    };

    rsx! {
        Page { title: "Gift cards created", {body} }
    }
}
