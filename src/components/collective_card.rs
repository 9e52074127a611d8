//! Collective Card Component
//!
//! One search result: avatar, name, description and headline figures,
//! linking to the collective's page on the website.

use collectives_core::Collective;
use dioxus::prelude::*;

use crate::context::use_site_config;

/// Format an amount in minor units as whole currency units with thousands
/// separators, e.g. `USD 12,345`.
pub fn format_amount(minor: i64, currency: Option<&str>) -> String {
    let units = (minor as f64 / 100.0).round() as i64;
    let digits = units.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if units < 0 { "-" } else { "" };
    match currency {
        Some(code) => format!("{} {}{}", code, sign, grouped),
        None => format!("{}{}", sign, grouped),
    }
}

/// Search result card
#[component]
pub fn CollectiveCard(collective: Collective) -> Element {
    let site = use_site_config();
    let href = format!("{}/{}", site.website_url, collective.slug);
    let name = collective.display_name().to_string();
    let initial = name.chars().next().unwrap_or('?').to_uppercase().to_string();

    let currency = collective.currency.clone();
    let stats = collective.stats.clone().unwrap_or_default();
    let backers = stats.backers.as_ref().map(|b| b.all).unwrap_or(0);
    let budget = stats
        .yearly_budget
        .map(|amount| format_amount(amount, currency.as_deref()));

    rsx! {
        a { class: "collective-card", href: "{href}", target: "_blank",
            div { class: "collective-card__banner",
                if let Some(image) = &collective.image_url {
                    img { class: "collective-card__avatar", src: "{image}", alt: "{name}" }
                } else {
                    span { class: "collective-card__avatar collective-card__avatar--initial", "{initial}" }
                }
            }
            div { class: "collective-card__body",
                h3 { class: "collective-card__name", "{name}" }
                if let Some(description) = &collective.description {
                    p { class: "collective-card__description", "{description}" }
                }
            }
            div { class: "collective-card__stats",
                div { class: "collective-card__stat",
                    span { class: "stat-value", "{backers}" }
                    span { class: "stat-label", if backers == 1 { "backer" } else { "backers" } }
                }
                if let Some(budget) = budget {
                    div { class: "collective-card__stat",
                        span { class: "stat-value", "{budget}" }
                        span { class: "stat-label", "annual budget" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_grouped() {
        assert_eq!(format_amount(1_234_500, Some("USD")), "USD 12,345");
        assert_eq!(format_amount(99_900, None), "999");
        assert_eq!(format_amount(100_000_000, Some("EUR")), "EUR 1,000,000");
    }

    #[test]
    fn small_and_negative_amounts() {
        assert_eq!(format_amount(0, Some("USD")), "USD 0");
        assert_eq!(format_amount(-250_000, Some("USD")), "USD -2,500");
        assert_eq!(format_amount(49, None), "0");
    }
}
