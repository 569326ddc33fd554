#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use catalog::{SITE, SkinType};
use tracing::Level;

mod common;

mod components;

mod landing;
use landing::LandingPage;

mod not_found;
use not_found::NotFound;

mod skin_type;
use skin_type::SkinTypeDetail;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    dioxus_logger::init(level).expect("failed to init logger");
    launch(App);
}

// unknown paths, including unknown skin types, fall through to NotFound
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    LandingPage {},
    #[route("/skin-type/:skin_type")]
    SkinTypeDetail { skin_type: SkinType },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let title = SITE.title();

    rsx! {
        document::Title { "{title}" }
        style { "{common::style::PAGE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
