use dioxus::prelude::*;
use tracing::debug;

use crate::{
    components::modal::{ModalSize, ModernModal},
    gallery::use_gallery,
    web::backend::selected_file,
};

const FILE_INPUT_ID: &str = "photo-upload-file";

// the new photo form
//
// all of the form state lives in the gallery's upload workflow; this only mirrors it.  while
// the upload is in flight, every way of closing the modal is disabled
#[component]
pub fn UploadModal() -> Element {
    let ctx = use_gallery();
    let _ = ctx.revision.read();
    let gallery = ctx.gallery.clone();

    let (description, file_name, preview, error, submitting) = {
        let upload = gallery.upload();
        (
            upload.description().to_string(),
            upload.file_name(),
            upload.preview().map(String::from),
            upload.error().map(|err| err.to_string()),
            upload.submitting(),
        )
    };
    let accept = gallery.config().accept_attr();

    let on_description = {
        let gallery = gallery.clone();
        move |evt: FormEvent| {
            gallery.set_description(evt.value());
        }
    };

    let on_file = {
        let gallery = gallery.clone();
        move |_: FormEvent| {
            gallery.set_file(selected_file(FILE_INPUT_ID));
        }
    };

    let on_submit = {
        let gallery = gallery.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let gallery = gallery.clone();
            async move {
                if let Err(err) = gallery.submit_upload().await {
                    debug!("photo not uploaded: {err}");
                }
            }
        }
    };

    let on_dismiss = {
        let gallery = gallery.clone();
        move |_: ()| {
            gallery.close_upload();
        }
    };

    rsx! {
        ModernModal {
            title: "New Photo",
            size: ModalSize::Medium,
            disable_close: submitting,
            on_dismiss,

            form { onsubmit: on_submit,
                div { class: "form-group",
                    label { class: "form-label", r#for: "photo-upload-description", "Description" }
                    input {
                        class: "form-input",
                        id: "photo-upload-description",
                        r#type: "text",
                        required: true,
                        disabled: submitting,
                        value: "{description}",
                        oninput: on_description,
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", r#for: FILE_INPUT_ID, "Image" }
                    input {
                        class: "form-input",
                        id: FILE_INPUT_ID,
                        r#type: "file",
                        accept: "{accept}",
                        required: true,
                        disabled: submitting,
                        onchange: on_file,
                    }
                }

                if preview.is_some() || file_name.is_some() {
                    div { class: "upload-preview",
                        if let Some(preview) = preview {
                            img { src: "{preview}", alt: "preview" }
                        }
                        if let Some(file_name) = file_name {
                            span { class: "status-message", "{file_name}" }
                        }
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting {
                        "Uploading..."
                    } else {
                        "Save Photo"
                    }
                }

                if let Some(error) = error {
                    p { class: "form-error", "{error}" }
                }
            }
        }
    }
}
