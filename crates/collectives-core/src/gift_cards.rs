//! Gift cards shown on the creation success screen.
//!
//! Cards are either delivered by email (the screen only confirms) or handed
//! over manually, in which case the screen lists one redeem link per card and
//! offers to copy them all at once.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{CollectivesError, CollectivesResult};

/// A freshly created virtual gift card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCard {
    pub uuid: String,
    pub currency: String,
    /// Amount in minor units (cents)
    pub amount: i64,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

impl GiftCard {
    /// Redeem link for this card on `website_url`.
    pub fn redeem_link(&self, website_url: &str) -> String {
        redeem_link(website_url, &self.uuid)
    }
}

/// How the created cards reach their recipients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliverType {
    /// Links are shown so the creator can hand them out
    Manual,
    /// Cards were emailed to recipients
    Email,
}

impl DeliverType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverType::Manual => "manual",
            DeliverType::Email => "email",
        }
    }
}

impl fmt::Display for DeliverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only `manual` and `email` are accepted; anything else is rejected here
/// rather than rendered as one of the two.
impl FromStr for DeliverType {
    type Err = CollectivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(DeliverType::Manual),
            "email" => Ok(DeliverType::Email),
            other => Err(CollectivesError::UnknownDeliverType(other.to_string())),
        }
    }
}

/// The cards created in one go, as handed to the success screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardBatch {
    pub deliver_type: DeliverType,
    pub collective_slug: String,
    pub cards: Vec<GiftCard>,
}

/// Batch as it appears on disk, before `deliverType` is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGiftCardBatch {
    deliver_type: String,
    collective_slug: String,
    cards: Vec<GiftCard>,
}

impl TryFrom<RawGiftCardBatch> for GiftCardBatch {
    type Error = CollectivesError;

    fn try_from(raw: RawGiftCardBatch) -> Result<Self, Self::Error> {
        Ok(Self {
            deliver_type: raw.deliver_type.parse()?,
            collective_slug: raw.collective_slug,
            cards: raw.cards,
        })
    }
}

impl GiftCardBatch {
    /// Reject a batch with no cards.
    pub fn validate(self) -> CollectivesResult<Self> {
        if self.cards.is_empty() {
            return Err(CollectivesError::EmptyGiftCardBatch);
        }
        Ok(self)
    }

    /// Decode and validate a batch from JSON. A `deliverType` other than
    /// `manual` or `email` is [`CollectivesError::UnknownDeliverType`].
    pub fn from_json(json: &str) -> CollectivesResult<Self> {
        let raw: RawGiftCardBatch = serde_json::from_str(json)?;
        Self::try_from(raw)?.validate()
    }

    /// Read a batch from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CollectivesResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Confirmation line for this batch.
    pub fn success_message(&self) -> String {
        success_message(self.deliver_type, self.cards.len())
    }
}

/// `{website_url}/redeem/{uuid up to the first hyphen}`.
///
/// A uuid without a hyphen is used whole.
pub fn redeem_link(website_url: &str, uuid: &str) -> String {
    let code = uuid.split('-').next().unwrap_or(uuid);
    format!("{}/redeem/{}", website_url.trim_end_matches('/'), code)
}

/// All redeem links, one per line, in card order.
pub fn redeem_links_text(website_url: &str, cards: &[GiftCard]) -> String {
    cards
        .iter()
        .map(|card| card.redeem_link(website_url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Confirmation line, pluralized on the number of cards.
pub fn success_message(deliver_type: DeliverType, count: usize) -> String {
    let subject = if count == 1 {
        "Your gift card has".to_string()
    } else {
        format!("Your {} gift cards have", count)
    };
    match deliver_type {
        DeliverType::Manual => format!("{} been created.", subject),
        DeliverType::Email => format!("{} been sent!", subject),
    }
}

/// Why the platform could not copy the links.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// The platform refused access to the clipboard
    #[error("clipboard permission denied")]
    PermissionDenied,
    /// No clipboard on this platform
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Select the backing text and copy it to the clipboard.
pub trait ClipboardCopy {
    fn select_and_copy(&self, text: &str) -> Result<(), CopyError>;
}

/// Copy the redeem links once. Failures are logged and swallowed: the user
/// gets no feedback and nothing is retried.
pub fn copy_redeem_links(clipboard: &dyn ClipboardCopy, text: &str) {
    match clipboard.select_and_copy(text) {
        Ok(()) => tracing::info!(bytes = text.len(), "Copied redeem links to clipboard"),
        Err(e) => tracing::error!("Cannot copy to clipboard: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Write;

    use super::*;

    const ORIGIN: &str = "https://opencollective.com";

    fn card(uuid: &str) -> GiftCard {
        GiftCard {
            uuid: uuid.to_string(),
            currency: "USD".to_string(),
            amount: 5000,
            expiry_date: None,
        }
    }

    struct FakeClipboard {
        result: Result<(), CopyError>,
        copied: RefCell<Vec<String>>,
    }

    impl FakeClipboard {
        fn new(result: Result<(), CopyError>) -> Self {
            Self {
                result,
                copied: RefCell::new(Vec::new()),
            }
        }
    }

    impl ClipboardCopy for FakeClipboard {
        fn select_and_copy(&self, text: &str) -> Result<(), CopyError> {
            self.copied.borrow_mut().push(text.to_string());
            self.result.clone()
        }
    }

    #[test]
    fn redeem_link_uses_first_uuid_segment() {
        assert_eq!(
            redeem_link(ORIGIN, "8a3f9c2e-1b2c-4d5e-8f90-123456789abc"),
            "https://opencollective.com/redeem/8a3f9c2e"
        );
    }

    #[test]
    fn redeem_link_is_stable() {
        let uuid = "deadbeef-0000-0000-0000-000000000000";
        assert_eq!(redeem_link(ORIGIN, uuid), redeem_link(ORIGIN, uuid));
    }

    #[test]
    fn redeem_link_without_hyphen_uses_whole_uuid() {
        assert_eq!(
            redeem_link("http://localhost:3000/", "abc"),
            "http://localhost:3000/redeem/abc"
        );
    }

    #[test]
    fn links_text_is_one_per_line() {
        let cards = vec![card("aaaa-1"), card("bbbb-2")];
        assert_eq!(
            redeem_links_text(ORIGIN, &cards),
            "https://opencollective.com/redeem/aaaa\nhttps://opencollective.com/redeem/bbbb"
        );
    }

    #[test]
    fn manual_messages() {
        assert_eq!(
            success_message(DeliverType::Manual, 1),
            "Your gift card has been created."
        );
        assert_eq!(
            success_message(DeliverType::Manual, 2),
            "Your 2 gift cards have been created."
        );
    }

    #[test]
    fn email_messages() {
        assert_eq!(
            success_message(DeliverType::Email, 1),
            "Your gift card has been sent!"
        );
        assert_eq!(
            success_message(DeliverType::Email, 12),
            "Your 12 gift cards have been sent!"
        );
    }

    #[test]
    fn deliver_type_parses_known_values_only() {
        assert_eq!("manual".parse::<DeliverType>().unwrap(), DeliverType::Manual);
        assert_eq!("email".parse::<DeliverType>().unwrap(), DeliverType::Email);
        let err = "pigeon".parse::<DeliverType>().unwrap_err();
        assert!(matches!(err, CollectivesError::UnknownDeliverType(ref v) if v == "pigeon"));
        assert!("Email".parse::<DeliverType>().is_err());
    }

    #[test]
    fn copy_calls_capability_once() {
        let clipboard = FakeClipboard::new(Ok(()));
        copy_redeem_links(&clipboard, "link-a\nlink-b");
        assert_eq!(*clipboard.copied.borrow(), vec!["link-a\nlink-b".to_string()]);
    }

    #[test]
    fn copy_failure_is_swallowed_without_retry() {
        let clipboard = FakeClipboard::new(Err(CopyError::PermissionDenied));
        copy_redeem_links(&clipboard, "link");
        assert_eq!(clipboard.copied.borrow().len(), 1);
    }

    #[test]
    fn repeated_clicks_copy_again() {
        let clipboard = FakeClipboard::new(Err(CopyError::Unavailable("no display".to_string())));
        copy_redeem_links(&clipboard, "link");
        copy_redeem_links(&clipboard, "link");
        assert_eq!(clipboard.copied.borrow().len(), 2);
    }

    #[test]
    fn batch_from_json() {
        let json = r#"{
            "deliverType": "manual",
            "collectiveSlug": "webpack",
            "cards": [
                { "uuid": "1111-a", "currency": "EUR", "amount": 1000, "expiryDate": "2027-01-01" },
                { "uuid": "2222-b", "currency": "EUR", "amount": 1000 }
            ]
        }"#;
        let batch = GiftCardBatch::from_json(json).unwrap();
        assert_eq!(batch.deliver_type, DeliverType::Manual);
        assert_eq!(batch.cards[0].expiry_date.as_deref(), Some("2027-01-01"));
        assert_eq!(batch.success_message(), "Your 2 gift cards have been created.");
    }

    #[test]
    fn batch_rejects_unknown_deliver_type_and_empty_cards() {
        let unknown = r#"{"deliverType":"fax","collectiveSlug":"x","cards":[]}"#;
        assert!(matches!(
            GiftCardBatch::from_json(unknown),
            Err(CollectivesError::UnknownDeliverType(ref v)) if v == "fax"
        ));

        let malformed = r#"{"deliverType":"email","collectiveSlug":"x"}"#;
        assert!(matches!(
            GiftCardBatch::from_json(malformed),
            Err(CollectivesError::Decode(_))
        ));

        let empty = r#"{"deliverType":"email","collectiveSlug":"x","cards":[]}"#;
        assert!(matches!(
            GiftCardBatch::from_json(empty),
            Err(CollectivesError::EmptyGiftCardBatch)
        ));
    }

    #[test]
    fn batch_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"deliverType":"email","collectiveSlug":"babel","cards":[{{"uuid":"abcd-1","currency":"USD","amount":2500}}]}}"#
        )
        .unwrap();
        let batch = GiftCardBatch::load(file.path()).unwrap();
        assert_eq!(batch.collective_slug, "babel");
        assert_eq!(batch.success_message(), "Your gift card has been sent!");
    }

    #[test]
    fn batch_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GiftCardBatch::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CollectivesError::Io(_)));
    }
}
