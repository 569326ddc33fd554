use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::Route;
use crate::components::site::{SiteFooter, SiteHeader};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    use_hook(|| warn!(path = %path, "no route matched"));

    rsx! {
        div { class: "landing",
            SiteHeader {}
            section { class: "explore-section",
                div { class: "container message-panel",
                    h2 { class: "section-title", "Page not found" }
                    p { "Nothing lives at {path}." }
                    Link { to: Route::LandingPage {}, class: "btn btn-primary", "Choose your skin type" }
                }
            }
            SiteFooter {}
        }
    }
}
