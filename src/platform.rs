//! Platform capabilities injected into the core logic.
//!
//! - [`TextFieldClipboard`]: selects a text field in the webview and copies
//!   its text with `arboard`
//! - [`WebviewParent`]: posts messages to the embedding window

use collectives_core::{ClipboardCopy, CopyError, NotifyError, ParentNotifier};
use dioxus::prelude::*;

/// Copies text on behalf of a text field rendered in the webview.
pub struct TextFieldClipboard {
    field_id: String,
}

impl TextFieldClipboard {
    pub fn new(field_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
        }
    }

    /// Select the field so the copied text is highlighted. A missing field
    /// does not stop the copy; it is only logged once the webview answers.
    fn select_field(&self) -> Result<(), CopyError> {
        let selection = document::eval(&select_field_script(&self.field_id)?);
        let field_id = self.field_id.clone();
        spawn(async move {
            match selection.await {
                Ok(selected) if field_selected(&selected) => {}
                Ok(_) => tracing::warn!("No text field #{} to select", field_id),
                Err(e) => tracing::warn!("Cannot select text field #{}: {}", field_id, e),
            }
        });
        Ok(())
    }
}

fn select_field_script(field_id: &str) -> Result<String, CopyError> {
    let id = serde_json::to_string(field_id).map_err(|e| CopyError::Unavailable(e.to_string()))?;
    Ok(format!(
        "const field = document.getElementById({id}); if (!field) {{ return false; }} field.select(); return true;"
    ))
}

fn field_selected(result: &serde_json::Value) -> bool {
    result.as_bool().unwrap_or(false)
}

impl ClipboardCopy for TextFieldClipboard {
    fn select_and_copy(&self, text: &str) -> Result<(), CopyError> {
        self.select_field()?;

        let mut clipboard = arboard::Clipboard::new().map_err(map_clipboard_error)?;
        clipboard.set_text(text).map_err(map_clipboard_error)
    }
}

fn map_clipboard_error(e: arboard::Error) -> CopyError {
    match e {
        arboard::Error::ClipboardOccupied => CopyError::PermissionDenied,
        other => CopyError::Unavailable(other.to_string()),
    }
}

/// Posts to `window.parent` in the webview, targeted at any origin.
pub struct WebviewParent;

impl ParentNotifier for WebviewParent {
    fn notify_parent(&self, payload: &str) -> Result<(), NotifyError> {
        let message =
            serde_json::to_string(payload).map_err(|e| NotifyError::Failed(e.to_string()))?;
        document::eval(&format!(
            "if (window.parent) {{ window.parent.postMessage({message}, '*'); }}"
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_script_reports_missing_field() {
        let script = select_field_script("result-redeem-links").unwrap();
        assert!(script.contains(r#"getElementById("result-redeem-links")"#));
        assert!(script.contains("return false;"));
        assert!(script.contains("return true;"));

        let quoted = select_field_script(r#"a"b"#).unwrap();
        assert!(quoted.contains(r#"getElementById("a\"b")"#));
    }

    #[test]
    fn only_a_true_answer_counts_as_selected() {
        assert!(field_selected(&serde_json::Value::Bool(true)));
        assert!(!field_selected(&serde_json::Value::Bool(false)));
        assert!(!field_selected(&serde_json::Value::Null));
    }

    #[test]
    fn occupied_clipboard_maps_to_permission_denied() {
        assert_eq!(
            map_clipboard_error(arboard::Error::ClipboardOccupied),
            CopyError::PermissionDenied
        );
        assert!(matches!(
            map_clipboard_error(arboard::Error::ClipboardNotSupported),
            CopyError::Unavailable(_)
        ));
    }
}
