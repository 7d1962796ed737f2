use dioxus::prelude::*;
use tracing::debug;

use crate::{
    components::modal::{ModalSize, ModernModal},
    gallery::use_gallery,
};

// Confirmation modal for deleting the photo shown in the carousel
//
// this is the consent gate: nothing is sent to the server until "Delete Photo" is clicked
#[component]
pub fn DeletePhotoConfirmation() -> Element {
    let ctx = use_gallery();
    let _ = ctx.revision.read();

    let gallery = ctx.gallery.clone();
    let photo = gallery.active_photo();
    let in_flight = gallery.deletion().in_flight();

    let cancel = {
        let gallery = gallery.clone();
        move || {
            gallery.cancel_delete();
        }
    };

    let confirm = {
        let gallery = gallery.clone();
        move |_: MouseEvent| {
            let gallery = gallery.clone();
            async move {
                if let Err(err) = gallery.confirm_delete().await {
                    debug!("photo not deleted: {err}");
                }
            }
        }
    };

    let on_cancel = {
        let cancel = cancel.clone();
        move |_: MouseEvent| cancel()
    };

    let footer = rsx! {
        div { class: "modal-buttons",
            button {
                class: "btn btn-secondary",
                disabled: in_flight,
                onclick: on_cancel,
                "Cancel"
            }
            button {
                class: "btn btn-danger",
                disabled: in_flight,
                onclick: confirm,
                if in_flight {
                    "Deleting..."
                } else {
                    "Delete Photo"
                }
            }
        }
    };

    rsx! {
        ModernModal {
            title: "Confirm Deletion",
            size: ModalSize::Small,
            disable_close: in_flight,
            on_dismiss: move |_: ()| cancel(),
            footer,

            div { class: "confirmation-content",
                p { class: "confirmation-message",
                    "Are you sure you want to delete this photo? This action cannot be undone."
                }
                if let Some(photo) = photo {
                    p { class: "status-message", "\"{photo.description}\"" }
                }
            }
        }
    }
}
