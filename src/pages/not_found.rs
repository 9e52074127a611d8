use dioxus::prelude::*;

use crate::app::Route;
use crate::components::Page;

/// Fallback for unknown routes.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Page { title: "Not found",
            div { class: "error-page",
                h1 { class: "error-title", "Page not found" }
                p { class: "error-message", "Nothing lives at {path}" }
                Link { to: Route::search_home(), class: "styled-link", "Search collectives" }
            }
        }
    }
}
