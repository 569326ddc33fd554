use dioxus::prelude::*;
use dioxus_router::prelude::*;

use catalog::SITE;

use crate::Route;

#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container",
                h1 { class: "site-title",
                    Link { to: Route::LandingPage {},
                        "{SITE.brand}"
                        span { class: "brand-accent", "{SITE.brand_accent}" }
                    }
                }
                p { class: "site-tagline", "{SITE.tagline}" }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let copyright = SITE.copyright();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                p { "{copyright}" }
            }
        }
    }
}
