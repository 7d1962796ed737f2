use dioxus::prelude::*;

use crate::gallery::use_gallery;
use common::gallery::ModalRegion;

// full-size viewer for one photo at a time
//
// the arrow keys and the prev/next buttons wrap around the ends of the list.  only a click on
// the backdrop closes the viewer; the content is a sibling of the backdrop, so its clicks are
// reported as ModalRegion::Content and ignored
#[component]
pub fn CarouselModal() -> Element {
    let ctx = use_gallery();
    let _ = ctx.revision.read();
    let gallery = ctx.gallery.clone();

    let Some(photo) = gallery.active_photo() else {
        return rsx! {};
    };

    let src = gallery.display_url(&photo);
    let position = gallery.carousel().active().map_or(0, |index| index + 1);
    let total = gallery.photos().len();
    let (in_flight, status) = {
        let deletion = gallery.deletion();
        (
            deletion.in_flight(),
            deletion.last_error().map(|err| err.to_string()),
        )
    };

    let on_key = {
        let gallery = gallery.clone();
        move |evt: KeyboardEvent| match evt.key() {
            Key::ArrowLeft => gallery.prev(),
            Key::ArrowRight => gallery.next(),
            Key::Escape => gallery.close_carousel(),
            _ => {}
        }
    };

    let on_backdrop = {
        let gallery = gallery.clone();
        move |_: MouseEvent| {
            gallery.click(ModalRegion::Backdrop);
        }
    };

    let on_content = {
        let gallery = gallery.clone();
        move |_: MouseEvent| {
            gallery.click(ModalRegion::Content);
        }
    };

    let on_prev = {
        let gallery = gallery.clone();
        move |_: MouseEvent| gallery.prev()
    };

    let on_next = {
        let gallery = gallery.clone();
        move |_: MouseEvent| gallery.next()
    };

    let on_delete = {
        let gallery = gallery.clone();
        let photo_uuid = photo.id;
        move |_: MouseEvent| {
            gallery.request_delete(photo_uuid);
        }
    };

    let on_close = {
        let gallery = gallery.clone();
        move |_: MouseEvent| gallery.close_carousel()
    };

    rsx! {
        div {
            class: "carousel-overlay",
            tabindex: "0",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: on_key,

            div { class: "carousel-backdrop", onclick: on_backdrop }

            div { class: "carousel-content", onclick: on_content,
                img { src: "{src}", alt: "{photo.description}" }
                p { class: "carousel-caption", "{photo.description}" }

                div { class: "carousel-controls",
                    button { class: "btn btn-secondary", onclick: on_prev, "‹" }
                    span { class: "status-message", "{position} / {total}" }
                    button { class: "btn btn-secondary", onclick: on_next, "›" }
                    button {
                        class: "btn btn-danger",
                        disabled: in_flight,
                        onclick: on_delete,
                        "Delete"
                    }
                    button { class: "btn btn-secondary", onclick: on_close, "Close" }
                }

                if let Some(status) = status {
                    p { class: "carousel-status", "{status}" }
                }
            }
        }
    }
}
