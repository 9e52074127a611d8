//! Result area of the search page.
//!
//! Renders exactly one [`ResultView`]. The error view is handled by the
//! page, which swaps itself out for an [`ErrorPage`](super::ErrorPage).

use collectives_core::{pledge_link, ResultView};
use collectives_ui::{LinkStyle, LoadingGrid, StyledLink};
use dioxus::prelude::*;

use super::{CollectiveCard, Pagination};
use crate::context::use_site_config;

#[component]
fn PledgeLink(term: String) -> Element {
    let site = use_site_config();
    let href = pledge_link(&site.website_url, &term);

    rsx! {
        StyledLink { href, style: LinkStyle::Primary, external: true, "Make a pledge" }
    }
}

/// Grid, empty state or loading placeholder for the current search
#[component]
pub fn SearchResults(view: ResultView, on_page_change: EventHandler<u64>) -> Element {
    match view {
        ResultView::Loading => rsx! {
            div { class: "results results--loading", LoadingGrid {} }
        },
        ResultView::Error { .. } | ResultView::EmptyQuery | ResultView::Idle => rsx! {},
        ResultView::NoMatches { term } => rsx! {
            div { class: "results results--empty",
                p {
                    em { "No collectives found matching your query: \"{term}\"" }
                }
                PledgeLink { term }
            }
        },
        ResultView::HasMatches {
            term,
            collectives,
            pagination,
        } => rsx! {
            div { class: "results",
                div { class: "results-grid",
                    for collective in collectives {
                        div { key: "{collective.slug}", class: "results-grid__item",
                            CollectiveCard { collective: collective.clone() }
                        }
                    }
                }
                if let Some(window) = pagination {
                    div { class: "results-pagination",
                        Pagination { window, on_change: on_page_change }
                    }
                }
                div { class: "results-footer",
                    p {
                        em { "If you don't see the collective you're searching for:" }
                    }
                    PledgeLink { term }
                }
            }
        },
    }
}
