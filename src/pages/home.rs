//! Entry page - forwards to the start route.
//!
//! The desktop app has no address bar, so `--start` (or a loaded gift card
//! batch) decides where the window opens. Without either, the search page.

use collectives_ui::LoadingGrid;
use dioxus::prelude::*;

use crate::app::Route;
use crate::startup;

/// Resolve the route to open first. Unparseable routes and `/` itself fall
/// back to the search page.
fn resolve_start(raw: Option<&str>) -> Route {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Route::search_home();
    };

    match raw.parse::<Route>() {
        Ok(Route::Home {}) => Route::search_home(),
        Ok(route) => route,
        Err(e) => {
            tracing::warn!("Ignoring start route {:?}: {}", raw, e);
            Route::search_home()
        }
    }
}

/// Entry page component.
///
/// Replaces itself with the start route on mount.
#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let target = use_hook(|| resolve_start(startup().start_route.as_deref()));

    use_effect(move || {
        tracing::info!("Opening {}", target);
        navigator.replace(target.clone());
    });

    rsx! {
        div { class: "page-content", LoadingGrid {} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_start_route_opens_search() {
        assert_eq!(resolve_start(None), Route::search_home());
        assert_eq!(resolve_start(Some("  ")), Route::search_home());
    }

    #[test]
    fn start_route_is_parsed() {
        assert_eq!(
            resolve_start(Some("/webpack/gift-cards/created")),
            Route::GiftCardsCreated {
                collective_slug: "webpack".to_string()
            }
        );
    }

    #[test]
    fn home_does_not_loop() {
        assert_eq!(resolve_start(Some("/")), Route::search_home());
    }
}
