use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use catalog::{LandingState, Navigate, SKIN_TYPES, SkinType};

use crate::Route;

// adapts the router's navigator to the capability the landing state expects
#[derive(Clone, Copy)]
pub struct RouterNavigator(pub Navigator);

impl Navigate for RouterNavigator {
    fn navigate(&self, skin_type: SkinType) {
        self.0.push(Route::SkinTypeDetail { skin_type });
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SkinTypeSelectorProps {
    state: Signal<LandingState>,
}

#[component]
pub fn SkinTypeSelector(props: SkinTypeSelectorProps) -> Element {
    let mut state = props.state;
    let navigator = RouterNavigator(use_navigator());

    let selected = state.read().selected_value();
    let can_submit = state.read().can_find_products();

    rsx! {
        section { class: "selector-section",
            div { class: "container",
                div { class: "selector-panel",
                    h2 { "Select Your Skin Type" }
                    div { class: "selector-controls",
                        select {
                            class: "form-select",
                            value: "{selected}",
                            onchange: move |evt: FormEvent| {
                                let value = evt.value();
                                if let Err(err) = state.write().select(&value) {
                                    warn!(value = %value, "ignoring selector value: {err}");
                                }
                            },
                            option { value: "", disabled: true, selected: selected.is_empty(),
                                "Choose your skin type"
                            }
                            for entry in SKIN_TYPES.iter() {
                                option {
                                    key: "{entry.label()}",
                                    value: "{entry.label()}",
                                    selected: selected == entry.label(),
                                    "{entry.option_label()}"
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: !can_submit,
                            onclick: move |_| {
                                state.read().find_products(&navigator);
                            },
                            "Find Products"
                        }
                    }
                }
            }
        }
    }
}
