//! Gift Card Creation Success
//!
//! Confirms freshly created gift cards. Emailed cards only get a
//! confirmation line; manual cards also get their redeem links and a button
//! copying all of them at once.

use collectives_core::{
    copy_redeem_links, redeem_links_text, success_message, DeliverType, GiftCard,
};
use collectives_ui::{Button, ButtonSize, ButtonVariant, ReadOnlyTextArea};
use dioxus::prelude::*;

use crate::context::use_site_config;
use crate::platform::TextFieldClipboard;

/// Element id of the text area holding the redeem links.
pub const REDEEM_LINKS_FIELD: &str = "result-redeem-links";

#[derive(Props, Clone, PartialEq)]
pub struct CreateVirtualCardsSuccessProps {
    pub cards: Vec<GiftCard>,
    pub deliver_type: DeliverType,
    pub collective_slug: String,
}

/// Success screen after creating gift cards
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CreateVirtualCardsSuccess {
///         cards: batch.cards.clone(),
///         deliver_type: DeliverType::Manual,
///         collective_slug: batch.collective_slug.clone(),
///     }
/// }
/// ```
#[component]
pub fn CreateVirtualCardsSuccess(props: CreateVirtualCardsSuccessProps) -> Element {
    let site = use_site_config();
    let collective_href = format!("{}/{}", site.website_url, props.collective_slug);

    let body = match props.deliver_type {
        DeliverType::Email => {
            let message = success_message(DeliverType::Email, props.cards.len());
            rsx! {
                p { class: "gift-cards-success__message", "{message}" }
            }
        }
        DeliverType::Manual => rsx! {
            ManualSuccess { cards: props.cards.clone() }
        },
    };

    rsx! {
        div { class: "gift-cards-success",
            p { class: "gift-cards-success__icon", "\u{2714}" }
            {body}
            a { class: "styled-link", href: "{collective_href}", target: "_blank",
                "Back to {props.collective_slug}"
            }
        }
    }
}

#[component]
fn ManualSuccess(cards: Vec<GiftCard>) -> Element {
    let site = use_site_config();
    let links = redeem_links_text(&site.website_url, &cards);
    let links_to_copy = links.clone();
    let message = success_message(DeliverType::Manual, cards.len());

    let copy_links = move |_: ()| {
        let clipboard = TextFieldClipboard::new(REDEEM_LINKS_FIELD);
        copy_redeem_links(&clipboard, &links_to_copy);
    };

    rsx! {
        p { class: "gift-cards-success__message", "{message}" }
        div { class: "gift-cards-success__actions",
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Large,
                onclick: copy_links,
                "\u{1F4CB} Copy the links"
            }
            Button {
                size: ButtonSize::Large,
                disabled: true,
                "\u{1F5A8} Download cards"
            }
        }
        ReadOnlyTextArea {
            id: REDEEM_LINKS_FIELD.to_string(),
            class: "result-redeem-links".to_string(),
            value: links,
        }
    }
}
