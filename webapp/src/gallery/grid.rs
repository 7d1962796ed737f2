use dioxus::prelude::*;

use crate::gallery::use_gallery;
use api::photo::Photo;

#[derive(Clone, PartialEq, Props)]
struct PhotoTileProps {
    index: usize,
    photo: Photo,
    src: String,
}

#[component]
fn PhotoTile(props: PhotoTileProps) -> Element {
    let gallery = use_gallery().gallery;
    let index = props.index;

    rsx! {
        div {
            class: "photo-card",
            onclick: move |_| {
                gallery.open_carousel(index);
            },
            img { src: "{props.src}", alt: "{props.photo.description}", loading: "lazy" }
            p { "{props.photo.description}" }
        }
    }
}

#[component]
pub fn PhotoGrid() -> Element {
    let ctx = use_gallery();
    let _ = ctx.revision.read();

    // copy out of the gallery so that no borrow outlives this render
    let tiles: Vec<(Photo, String)> = ctx
        .gallery
        .photos()
        .iter()
        .map(|photo| (photo.clone(), ctx.gallery.display_url(photo)))
        .collect();
    let empty = tiles.is_empty();

    rsx! {
        div { class: "photo-grid",
            if empty {
                p { class: "empty-state", "No photos found." }
            }
            for (index, (photo, src)) in tiles.into_iter().enumerate() {
                PhotoTile { key: "{photo.id}", index, photo, src }
            }
        }
    }
}
