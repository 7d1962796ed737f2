use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    components::confirmation_modal::DeletePhotoConfirmation,
    web::{backend::HttpBackend, preview::ObjectUrlPreviews},
};
use common::gallery::Gallery;

pub mod carousel;
use carousel::CarouselModal;

pub mod grid;
use grid::PhotoGrid;

pub mod upload;
use upload::UploadModal;

pub type WebGallery = Gallery<HttpBackend, ObjectUrlPreviews>;

// shared by every component on the page
//
// the gallery does its own bookkeeping; revision is bumped on every state transition and
// exists only so that components reading it re-render
#[derive(Clone)]
pub struct GalleryContext {
    pub gallery: Rc<WebGallery>,
    pub revision: Signal<u64>,
}

pub fn use_gallery() -> GalleryContext {
    use_context::<GalleryContext>()
}

#[component]
pub fn GalleryPage() -> Element {
    let ctx = use_gallery();
    let _ = ctx.revision.read();
    let gallery = ctx.gallery.clone();

    // initial load; every later refresh is triggered by the gallery itself
    use_future({
        let gallery = gallery.clone();
        move || {
            let gallery = gallery.clone();
            async move { gallery.refresh().await }
        }
    });

    let title = gallery.config().title.clone();
    let upload_open = gallery.upload().is_open();
    let carousel_open = gallery.carousel().is_open();
    let confirming = {
        let deletion = gallery.deletion();
        deletion.confirming() || deletion.in_flight()
    };

    let status = match gallery.list_error() {
        Some(err) => format!("Could not load photos: {err}"),
        None => format!("{} photos", gallery.photos().len()),
    };

    let open_upload = {
        let gallery = gallery.clone();
        move |_: MouseEvent| gallery.open_upload()
    };

    rsx! {
        div { class: "container gallery-page",
            div { class: "gallery-toolbar",
                h1 { class: "gallery-title", "{title}" }
                span { class: "status-message", "{status}" }
                button { class: "btn btn-primary", onclick: open_upload, "New Photo" }
            }

            PhotoGrid {}

            if upload_open {
                UploadModal {}
            }
            if carousel_open {
                CarouselModal {}
            }
            if confirming {
                DeletePhotoConfirmation {}
            }
        }
    }
}
