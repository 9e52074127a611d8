//! Pagination control for the search results.

use collectives_core::PageWindow;
use dioxus::prelude::*;

/// Previous / numbered / next page links.
///
/// Emits the offset of the chosen page; the page turns it into a
/// navigation.
#[component]
pub fn Pagination(window: PageWindow, on_change: EventHandler<u64>) -> Element {
    let current = window.current_page();
    let total_pages = window.total_pages();

    rsx! {
        nav { class: "pagination", "aria-label": "Pagination",
            button {
                class: "pagination__step",
                disabled: !window.has_previous(),
                onclick: move |_| on_change.call(window.offset_for(current.saturating_sub(1))),
                "\u{2039} Previous"
            }
            for page in window.pages() {
                button {
                    key: "{page}",
                    class: if page == current { "pagination__page active" } else { "pagination__page" },
                    "aria-current": if page == current { "page" } else { "false" },
                    onclick: move |_| on_change.call(window.offset_for(page)),
                    "{page}"
                }
            }
            button {
                class: "pagination__step",
                disabled: !window.has_next(),
                onclick: move |_| on_change.call(window.offset_for(current.saturating_add(1))),
                "Next \u{203A}"
            }
            span { class: "pagination__summary", "Page {current} of {total_pages}" }
        }
    }
}
