//! Memberships iframe - the collectives a member collective belongs to,
//! meant to be embedded in third-party pages.
//!
//! Every content size change is forwarded to the embedding window as
//! `oc-{"id":..,"height":..}` so the host can resize the iframe.

use collectives_core::{HeightChange, HeightReporter, IframeParams, MembershipsRequest, QueryParams};
use dioxus::prelude::*;

use crate::components::MembershipsList;
use crate::context::{use_api, API_UNAVAILABLE};
use crate::platform::WebviewParent;
use crate::theme::IFRAME_STYLES;

const ORDER_DIRECTION: &str = "DESC";

fn memberships_request(collective_slug: &str, params: &IframeParams) -> MembershipsRequest {
    MembershipsRequest {
        member_collective_slug: collective_slug.to_string(),
        role: params.role.clone(),
        order_by: params.order_by().to_string(),
        order_direction: ORDER_DIRECTION.to_string(),
        limit: params.limit,
    }
}

/// Memberships iframe page component.
#[component]
pub fn CollectivesIframe(collective_slug: String, query: QueryParams) -> Element {
    let api = use_api();
    let params = IframeParams::from_query(&query);
    let request = memberships_request(&collective_slug, &params);

    let widget_id = params.id;
    let mut reporter = use_signal(move || HeightReporter::new(widget_id));

    let memberships = use_resource(use_reactive((&request,), move |(request,)| {
        let api = api.clone();
        async move {
            let Some(api) = api else {
                return Err(API_UNAVAILABLE.to_string());
            };
            tracing::info!(
                slug = %request.member_collective_slug,
                order_by = %request.order_by,
                limit = request.limit,
                "Loading memberships"
            );
            api.memberships(&request).await.map_err(|e| {
                tracing::error!("Memberships request failed: {}", e);
                e.to_string()
            })
        }
    }));

    let body = match &*memberships.read() {
        None => rsx! {
            p { class: "memberships-loading", "Loading..." }
        },
        Some(Ok(list)) => rsx! {
            MembershipsList { memberships: list.clone() }
        },
        Some(Err(message)) => rsx! {
            p { class: "error-message", "{message}" }
        },
    };

    rsx! {
        document::Title { "{collective_slug} collectives" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        style { {IFRAME_STYLES} }
        div {
            class: "iframe-container",
            onresize: move |e: Event<ResizeData>| {
                let change = e
                    .get_border_box_size()
                    .ok()
                    .map(|size| HeightChange { height: size.height });
                reporter.write().on_change(change, &WebviewParent);
            },
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_resolved_ordering() {
        let params = IframeParams::from_query(&QueryParams::parse("id=7&role=HOST&limit=5"));
        let request = memberships_request("babel", &params);

        assert_eq!(request.member_collective_slug, "babel");
        assert_eq!(request.role.as_deref(), Some("HOST"));
        assert_eq!(request.order_by, "balance");
        assert_eq!(request.order_direction, "DESC");
        assert_eq!(request.limit, 5);
    }

    #[test]
    fn backers_are_ordered_by_donations() {
        let params = IframeParams::from_query(&QueryParams::parse("role=BACKER"));
        let request = memberships_request("babel", &params);

        assert_eq!(request.order_by, "totalDonations");
        assert_eq!(request.limit, 20);
    }
}
