//! Page shell: header, content column and footer.

use collectives_core::SiteConfig;
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_site_config;

#[derive(Props, Clone, PartialEq)]
pub struct PageProps {
    /// Window title
    #[props(into)]
    pub title: String,
    /// Show the search link in the header
    #[props(default = true)]
    pub show_search: bool,
    pub children: Element,
}

/// Layout chrome around a page's content
#[component]
pub fn Page(props: PageProps) -> Element {
    let site: SiteConfig = use_site_config();

    rsx! {
        document::Title { "{props.title} - Collectives" }
        div { class: "page",
            header { class: "page-header",
                a { class: "brand", href: "{site.website_url}", target: "_blank", "Collectives" }
                if props.show_search {
                    nav { class: "page-nav",
                        Link { to: Route::search_home(), class: "nav-link", "Search" }
                    }
                }
            }
            main { class: "page-content", {props.children} }
            footer { class: "page-footer",
                span { class: "footer-text", "{site.website_url}" }
            }
        }
    }
}
