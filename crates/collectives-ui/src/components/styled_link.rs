//! Links rendered as buttons.

use dioxus::prelude::*;

/// Link style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LinkStyle {
    /// Plain inline link
    #[default]
    Inline,
    /// Block link styled like a primary button
    Primary,
}

impl LinkStyle {
    pub fn class(&self) -> &'static str {
        match self {
            LinkStyle::Inline => "styled-link",
            LinkStyle::Primary => "styled-link styled-link-primary",
        }
    }
}

/// Properties for the StyledLink component
#[derive(Clone, PartialEq, Props)]
pub struct StyledLinkProps {
    pub href: String,
    #[props(default)]
    pub style: LinkStyle,
    /// Open in a new browsing context
    #[props(default = false)]
    pub external: bool,
    pub children: Element,
}

/// Anchor with design-system styling
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StyledLink {
///         href: pledge_link(&config.website_url, &term),
///         style: LinkStyle::Primary,
///         external: true,
///         "Make a pledge"
///     }
/// }
/// ```
#[component]
pub fn StyledLink(props: StyledLinkProps) -> Element {
    rsx! {
        a {
            class: props.style.class(),
            href: "{props.href}",
            target: if props.external { "_blank" } else { "_self" },
            rel: if props.external { "noopener noreferrer" } else { "" },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_style_classes() {
        assert_eq!(LinkStyle::Inline.class(), "styled-link");
        assert_eq!(LinkStyle::Primary.class(), "styled-link styled-link-primary");
        assert_eq!(LinkStyle::default(), LinkStyle::Inline);
    }
}
