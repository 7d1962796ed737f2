#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::{Level, error};

use common::{
    config::{GalleryConfig, parse_config},
    gallery::Gallery,
};

mod web;
use web::{
    backend::HttpBackend,
    preview::ObjectUrlPreviews,
    storage::try_local_storage,
};

mod components;
use components::navigation::NavBar;

mod gallery;
use gallery::{GalleryContext, GalleryPage};

const GALLERY_TOML: &str = include_str!("../gallery.toml");
const API_BASE_URL_KEY: &str = "api_base_url";

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        GalleryPage {},
}

// the embedded config file, with the api base url optionally overridden from local storage
fn load_config() -> GalleryConfig {
    let config = match parse_config(GALLERY_TOML) {
        Ok(config) => config,
        Err(err) => {
            error!("falling back to the default config: {err}");
            GalleryConfig::default()
        }
    };

    match try_local_storage::<String>(API_BASE_URL_KEY) {
        Some(url) if !url.trim().is_empty() => config.with_api_base_url(url),
        _ => config,
    }
}

#[component]
pub fn App() -> Element {
    let revision = use_signal(|| 0u64);

    use_context_provider(move || {
        let config = load_config();
        let backend = HttpBackend::new(&config);
        let gallery = Rc::new(Gallery::new(config, backend, ObjectUrlPreviews));

        // every state transition in the gallery bumps the revision, which re-renders
        // whichever components read it
        gallery.set_observer(move || {
            let mut revision = revision;
            *revision.write() += 1;
        });

        GalleryContext { gallery, revision }
    });

    rsx! {
        style { "{web::style::MODERN_STYLES}" }
        Router::<Route> {}
    }
}
