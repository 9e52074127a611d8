//! Search page - collectives matching the `q` query parameter.
//!
//! The route's query string is the only state. Submitting the form or
//! picking a page pushes a new route; the page reads it back, re-keys the
//! search and renders whatever [`ResultView`] the latest snapshot maps to.

use collectives_core::{
    fetch_search, on_page_change, on_submit, QueryParams, ResultView, SearchSnapshot, SearchState,
};
use collectives_ui::SearchForm;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{ErrorPage, Page, SearchResults};
use crate::context::{use_api, API_UNAVAILABLE};

/// Heading above the search box.
const SEARCH_LABEL: &str = "Search Open Collective";

/// Search page component.
#[component]
pub fn Search(query: QueryParams) -> Element {
    let navigator = use_navigator();
    let api = use_api();
    let state = SearchState::from_query(&query);

    let outcome = use_resource(use_reactive((&state,), move |(state,)| {
        let api = api.clone();
        async move {
            match api {
                Some(api) => fetch_search(api.as_ref(), &state).await,
                None if state.has_term() => Some(Err(API_UNAVAILABLE.to_string())),
                None => None,
            }
        }
    }));

    let loading = state.has_term() && matches!(*outcome.state().read(), UseResourceState::Pending);
    let latest = (*outcome.read()).clone().flatten();
    let snapshot = SearchSnapshot::from_outcome(&state.term, loading, latest.as_ref());
    let view = ResultView::from_snapshot(&snapshot);

    if let ResultView::Error { message } = &view {
        return rsx! {
            ErrorPage { message: message.clone() }
        };
    }

    let submit = move |term: String| {
        let query = on_submit(&term);
        tracing::info!("Search submitted: {}", query);
        navigator.push(Route::Search { query });
    };

    let change_page = move |offset: u64| {
        let query = on_page_change(&query, offset);
        tracing::info!("Page change: {}", query);
        navigator.push(Route::Search { query });
    };

    rsx! {
        Page { title: "Search", show_search: false,
            SearchForm {
                key: "{state.term}",
                initial_term: state.term.clone(),
                label: SEARCH_LABEL.to_string(),
                onsubmit: submit,
            }
            SearchResults { view, on_page_change: change_page }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_names_the_platform() {
        assert_eq!(SEARCH_LABEL, "Search Open Collective");
    }
}
