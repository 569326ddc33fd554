use dioxus::prelude::*;

use catalog::{LandingState, SkinType};

use crate::components::site::{SiteFooter, SiteHeader};

mod card;
use card::SkinTypeCard;

mod selector;
use selector::SkinTypeSelector;

#[component]
pub fn LandingPage() -> Element {
    let mut state = use_signal(LandingState::new);

    // nothing is drawn until the first effect has run, so the first paint is
    // always owned by the client runtime
    use_effect(move || {
        state.write().mount();
    });

    if !state.read().is_mounted() {
        return rsx! {};
    }

    rsx! {
        div { class: "landing",
            SiteHeader {}

            SkinTypeSelector { state }

            section { class: "explore-section",
                div { class: "container",
                    h2 { class: "section-title", "Explore Products by Skin Type" }
                    div { class: "skin-type-grid",
                        for skin_type in SkinType::ALL {
                            SkinTypeCard { key: "{skin_type}", skin_type }
                        }
                    }
                }
            }

            SiteFooter {}
        }
    }
}
