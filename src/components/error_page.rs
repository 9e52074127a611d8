//! Full-page error shown when the data collaborator fails.

use dioxus::prelude::*;

use crate::app::Route;

/// Error page. Replaces the whole page; nothing else renders next to it.
#[component]
pub fn ErrorPage(message: String) -> Element {
    rsx! {
        document::Title { "Error - Collectives" }
        div { class: "error-page",
            h1 { class: "error-title", "Something went wrong" }
            p { class: "error-message", "{message}" }
            Link { to: Route::search_home(), class: "styled-link", "Back to search" }
        }
    }
}
