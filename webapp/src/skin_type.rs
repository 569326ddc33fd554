use dioxus::prelude::*;
use dioxus_router::prelude::*;

use catalog::SkinType;

use crate::Route;
use crate::components::site::{SiteFooter, SiteHeader};

// stand-in for the per-category product pages, which live outside this app
#[component]
pub fn SkinTypeDetail(skin_type: SkinType) -> Element {
    let entry = skin_type.entry();

    rsx! {
        div { class: "landing",
            SiteHeader {}
            section { class: "explore-section",
                div { class: "container",
                    div { class: "card skin-type-card message-panel",
                        div { class: "skin-type-emoji", "{entry.emoji}" }
                        h2 { class: "skin-type-name", "{entry.label()} skin" }
                        p { "{entry.description}" }
                        Link { to: Route::LandingPage {}, class: "btn btn-primary", "Back to all skin types" }
                    }
                }
            }
            SiteFooter {}
        }
    }
}
