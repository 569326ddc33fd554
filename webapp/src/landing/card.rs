use dioxus::prelude::*;
use dioxus_router::prelude::*;

use catalog::SkinType;

use crate::Route;

#[derive(Clone, PartialEq, Props)]
pub struct SkinTypeCardProps {
    skin_type: SkinType,
}

// the whole card is the link, and it ignores whatever the selector holds
#[component]
pub fn SkinTypeCard(props: SkinTypeCardProps) -> Element {
    let skin_type = props.skin_type;
    let entry = skin_type.entry();

    rsx! {
        Link {
            to: Route::SkinTypeDetail { skin_type },
            class: "card skin-type-card",
            div { class: "skin-type-emoji", "{entry.emoji}" }
            h3 { class: "skin-type-name", "{entry.label()}" }
            p { class: "skin-type-description", "{entry.description}" }
        }
    }
}
