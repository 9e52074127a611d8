//! Embeddable memberships listing.
//!
//! The iframe page lists the collectives a member collective belongs to and
//! tells the embedding window how tall its content is, so the host page can
//! resize the frame. Messages look like:
//!
//! ```text
//! oc-{"id":42,"height":318}
//! ```

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::query::QueryParams;
use crate::search::DEFAULT_LIMIT;

/// Role value that switches the default ordering to balance.
pub const HOST_ROLE: &str = "HOST";

/// Prefix the host page's listener matches on.
pub const MESSAGE_PREFIX: &str = "oc-";

/// Query parameters of the iframe route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IframeParams {
    /// Widget id echoed back in height messages
    pub id: Option<u64>,
    pub role: Option<String>,
    pub order_by: Option<String>,
    pub limit: u32,
}

impl IframeParams {
    /// Read `id`, `role`, `orderBy` and `limit`. A missing, zero or
    /// non-numeric `limit` becomes [`DEFAULT_LIMIT`].
    pub fn from_query(query: &QueryParams) -> Self {
        let non_empty = |key: &str| {
            query
                .get(key)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            id: query.get("id").and_then(|raw| raw.trim().parse().ok()),
            role: non_empty("role"),
            order_by: non_empty("orderBy"),
            limit: query
                .get("limit")
                .and_then(|raw| raw.trim().parse::<u32>().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Ordering sent to the memberships query.
    pub fn order_by(&self) -> &'static str {
        resolve_order_by(self.order_by.as_deref(), self.role.as_deref())
    }
}

/// Ordering for the memberships listing.
///
/// Evaluates as `(order_by || role == HOST) ? "balance" : "totalDonations"`:
/// any explicit `order_by` selects `balance`, not the requested field.
pub fn resolve_order_by(order_by: Option<&str>, role: Option<&str>) -> &'static str {
    let explicit = order_by.is_some_and(|value| !value.is_empty());
    if explicit || role == Some(HOST_ROLE) {
        "balance"
    } else {
        "totalDonations"
    }
}

/// A content size change observed by the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightChange {
    pub height: f64,
}

/// Why a message could not reach the parent window.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The page is not embedded
    #[error("no parent window")]
    NoParent,
    /// The host bridge rejected the message
    #[error("parent notification failed: {0}")]
    Failed(String),
}

/// Posts a string to the embedding window, targeted at any origin.
pub trait ParentNotifier {
    fn notify_parent(&self, payload: &str) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct HeightMessage {
    id: Option<u64>,
    height: Value,
}

/// Whole heights render without a fraction (`318`, not `318.0`), the way a
/// browser serializes numbers.
fn height_value(height: f64) -> Value {
    if height.fract() == 0.0 && height <= u64::MAX as f64 {
        Value::from(height as u64)
    } else {
        Value::from(height)
    }
}

/// Forwards content height changes to the parent window, at most once per
/// distinct height.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeightReporter {
    id: Option<u64>,
    height: f64,
    last_posted: Option<f64>,
}

impl HeightReporter {
    pub fn new(id: Option<u64>) -> Self {
        Self {
            id,
            height: 0.0,
            last_posted: None,
        }
    }

    /// Height from the latest change, as measured.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Record a change and notify the parent when the height is non-zero and
    /// differs from the last one posted. Returns whether a message went out.
    pub fn on_change(
        &mut self,
        change: Option<HeightChange>,
        notifier: &dyn ParentNotifier,
    ) -> bool {
        let Some(change) = change else {
            return false;
        };
        self.height = if change.height.is_finite() && change.height > 0.0 {
            change.height
        } else {
            0.0
        };

        if self.height == 0.0 || self.last_posted == Some(self.height) {
            return false;
        }

        let payload = self.message();
        match notifier.notify_parent(&payload) {
            Ok(()) => {
                tracing::debug!(height = self.height, "Posted height to parent window");
                self.last_posted = Some(self.height);
                true
            }
            Err(e) => {
                tracing::warn!("Cannot notify parent window: {}", e);
                false
            }
        }
    }

    /// `oc-{"id":<id>,"height":<height>}`; `id` is `null` when absent.
    pub fn message(&self) -> String {
        let body = serde_json::to_string(&HeightMessage {
            id: self.id,
            height: height_value(self.height),
        })
        .unwrap_or_default();
        format!("{}{}", MESSAGE_PREFIX, body)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct FakeParent {
        fail: bool,
        messages: RefCell<Vec<String>>,
    }

    impl ParentNotifier for FakeParent {
        fn notify_parent(&self, payload: &str) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError::NoParent);
            }
            self.messages.borrow_mut().push(payload.to_string());
            Ok(())
        }
    }

    fn change(height: f64) -> Option<HeightChange> {
        Some(HeightChange { height })
    }

    #[test]
    fn order_by_truth_table() {
        assert_eq!(resolve_order_by(None, None), "totalDonations");
        assert_eq!(resolve_order_by(None, Some("BACKER")), "totalDonations");
        assert_eq!(resolve_order_by(None, Some("HOST")), "balance");
        assert_eq!(resolve_order_by(Some("totalDonations"), None), "balance");
        assert_eq!(resolve_order_by(Some("createdAt"), Some("BACKER")), "balance");
        assert_eq!(resolve_order_by(Some(""), Some("BACKER")), "totalDonations");
    }

    #[test]
    fn params_from_query() {
        let params =
            IframeParams::from_query(&QueryParams::parse("id=42&role=HOST&limit=5&orderBy="));
        assert_eq!(params.id, Some(42));
        assert_eq!(params.role.as_deref(), Some("HOST"));
        assert_eq!(params.order_by, None);
        assert_eq!(params.limit, 5);
        assert_eq!(params.order_by(), "balance");
    }

    #[test]
    fn params_default_limit() {
        let params = IframeParams::from_query(&QueryParams::parse("limit=NaN"));
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert_eq!(params.id, None);
        assert_eq!(params.order_by(), "totalDonations");
    }

    #[test]
    fn message_format() {
        let parent = FakeParent::default();
        let mut reporter = HeightReporter::new(Some(7));
        assert!(reporter.on_change(change(318.0), &parent));
        assert_eq!(
            *parent.messages.borrow(),
            vec![r#"oc-{"id":7,"height":318}"#.to_string()]
        );
    }

    #[test]
    fn missing_id_serializes_as_null() {
        let parent = FakeParent::default();
        let mut reporter = HeightReporter::new(None);
        reporter.on_change(change(100.0), &parent);
        assert_eq!(
            parent.messages.borrow()[0],
            r#"oc-{"id":null,"height":100}"#
        );
    }

    #[test]
    fn fractional_height_is_posted_as_measured() {
        let parent = FakeParent::default();
        let mut reporter = HeightReporter::new(Some(3));
        assert!(reporter.on_change(change(318.5), &parent));
        assert!(!reporter.on_change(change(318.5), &parent));
        assert!(reporter.on_change(change(319.0), &parent));
        assert_eq!(
            *parent.messages.borrow(),
            vec![
                r#"oc-{"id":3,"height":318.5}"#.to_string(),
                r#"oc-{"id":3,"height":319}"#.to_string(),
            ]
        );
        assert_eq!(reporter.height(), 319.0);
    }

    #[test]
    fn none_change_is_ignored() {
        let parent = FakeParent::default();
        let mut reporter = HeightReporter::new(Some(1));
        assert!(!reporter.on_change(None, &parent));
        assert!(parent.messages.borrow().is_empty());
    }

    #[test]
    fn zero_height_is_not_posted() {
        let parent = FakeParent::default();
        let mut reporter = HeightReporter::new(Some(1));
        assert!(!reporter.on_change(change(0.0), &parent));
        assert!(!reporter.on_change(change(f64::NAN), &parent));
        assert!(parent.messages.borrow().is_empty());
    }

    #[test]
    fn repeated_height_posts_once() {
        let parent = FakeParent::default();
        let mut reporter = HeightReporter::new(Some(1));
        reporter.on_change(change(200.0), &parent);
        reporter.on_change(change(200.0), &parent);
        reporter.on_change(change(250.0), &parent);
        reporter.on_change(change(200.0), &parent);
        assert_eq!(parent.messages.borrow().len(), 3);
    }

    #[test]
    fn failed_notification_is_retried_on_next_change() {
        let failing = FakeParent {
            fail: true,
            ..Default::default()
        };
        let mut reporter = HeightReporter::new(Some(1));
        assert!(!reporter.on_change(change(200.0), &failing));
        assert_eq!(reporter.height(), 200.0);

        let parent = FakeParent::default();
        assert!(reporter.on_change(change(200.0), &parent));
    }
}
