//! Loading placeholder shown while the first result set is in flight.

use dioxus::prelude::*;

/// Number of placeholder cards in a loading grid.
pub const LOADING_CARDS: usize = 4;

/// Pulsing placeholder cards
#[component]
pub fn LoadingGrid(#[props(default = LOADING_CARDS)] cards: usize) -> Element {
    rsx! {
        div {
            class: "loading-grid",
            role: "status",
            "aria-label": "Loading",
            for i in 0..cards {
                div { key: "{i}", class: "loading-card" }
            }
        }
    }
}
