//! Input Field Components
//!
//! The search form and the read-only text area that backs "copy the links".

use dioxus::prelude::*;

/// Properties for the SearchForm component
#[derive(Clone, PartialEq, Props)]
pub struct SearchFormProps {
    /// Term shown when the form first renders
    pub initial_term: String,
    /// Called with the entered term on submit
    pub onsubmit: EventHandler<String>,
    /// Heading above the input
    #[props(default = "Search".to_string())]
    pub label: String,
    #[props(default = "open source".to_string())]
    pub placeholder: String,
}

/// Search box with a submit button
///
/// Keeps its own draft of the term; the page only hears about it on submit,
/// after the default form action has been prevented. Key it by the current
/// term so a navigation resets the draft.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SearchForm {
///         key: "{state.term}",
///         initial_term: state.term.clone(),
///         onsubmit: move |term: String| submit(term),
///     }
/// }
/// ```
#[component]
pub fn SearchForm(props: SearchFormProps) -> Element {
    let initial = props.initial_term.clone();
    let mut draft = use_signal(move || initial);

    rsx! {
        form {
            class: "search-form",
            method: "GET",
            onsubmit: move |e| {
                e.prevent_default();
                props.onsubmit.call(draft());
            },
            label { class: "search-label h1", r#for: "search", "{props.label}" }
            div { class: "search-row",
                input {
                    id: "search",
                    class: "search-input",
                    r#type: "search",
                    name: "q",
                    placeholder: "{props.placeholder}",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                }
                button {
                    class: "btn btn-primary search-button",
                    r#type: "submit",
                    "aria-label": "Search",
                    "\u{1F50D}"
                }
            }
        }
    }
}

/// Properties for the ReadOnlyTextArea component
#[derive(Clone, PartialEq, Props)]
pub struct ReadOnlyTextAreaProps {
    pub value: String,
    /// Element id, used to select the text before copying
    pub id: String,
    #[props(default)]
    pub class: Option<String>,
    #[props(default = 8)]
    pub rows: u32,
}

/// Read-only multi-line text, selectable for copying
#[component]
pub fn ReadOnlyTextArea(props: ReadOnlyTextAreaProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("readonly-textarea {}", extra),
        _ => "readonly-textarea".to_string(),
    };

    rsx! {
        textarea {
            id: "{props.id}",
            class: "{class}",
            rows: "{props.rows}",
            readonly: true,
            value: "{props.value}",
        }
    }
}
