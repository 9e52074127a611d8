//! Memberships listing rendered inside the embeddable iframe.

use collectives_core::Membership;
use dioxus::prelude::*;

use super::format_amount;
use crate::context::use_site_config;

/// Collectives a member collective belongs to, one row each
#[component]
pub fn MembershipsList(memberships: Vec<Membership>) -> Element {
    let site = use_site_config();

    if memberships.is_empty() {
        return rsx! {
            p { class: "memberships-empty", "No collectives yet." }
        };
    }

    rsx! {
        ul { class: "memberships",
            for membership in memberships {
                {
                    let collective = &membership.collective;
                    let href = format!("{}/{}", site.website_url, collective.slug);
                    let name = collective.display_name().to_string();
                    let donated = membership
                        .stats
                        .as_ref()
                        .and_then(|stats| stats.total_donations)
                        .filter(|amount| *amount > 0)
                        .map(|amount| format_amount(amount, collective.currency.as_deref()));
                    let key = membership.id.map(|id| id.to_string()).unwrap_or_else(|| collective.slug.clone());
                    let role = membership.role.to_lowercase();
                    rsx! {
                        li { key: "{key}", class: "membership",
                            a { class: "membership__link", href: "{href}", target: "_blank",
                                if let Some(image) = &collective.image_url {
                                    img { class: "membership__logo", src: "{image}", alt: "{name}" }
                                }
                                span { class: "membership__name", "{name}" }
                            }
                            span { class: "membership__role", "{role}" }
                            if let Some(donated) = donated {
                                span { class: "membership__donated", "{donated}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
