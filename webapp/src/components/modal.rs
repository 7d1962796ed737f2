use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    title: String,
    #[props(default)]
    size: ModalSize,
    #[props(default)]
    disable_close: bool,
    on_dismiss: EventHandler<()>,
    children: Element,
    #[props(default)]
    footer: Option<Element>,
}

#[derive(Clone, PartialEq)]
pub enum ModalSize {
    Small,
    Medium,
}

impl Default for ModalSize {
    fn default() -> Self {
        ModalSize::Medium
    }
}

// ModernModal
//
// the backdrop and the content are sibling elements rather than parent and child, so clicks
// inside the content never reach the backdrop's dismiss handler and nothing has to stop
// propagation.  disable_close turns off both the backdrop and the close button, e.g. while a
// request the modal started is still in flight
#[component]
pub fn ModernModal(props: ModalProps) -> Element {
    let width = match props.size {
        ModalSize::Small => "max-width: 400px;",
        ModalSize::Medium => "max-width: 600px;",
    };

    let disable_close = props.disable_close;
    let on_dismiss = props.on_dismiss;

    rsx! {
        div { class: "modal-overlay",
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !disable_close {
                        on_dismiss.call(());
                    }
                },
            }
            div { class: "modal-content", style: "{width}",
                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    button {
                        class: "btn-close",
                        disabled: disable_close,
                        onclick: move |_| on_dismiss.call(()),
                        "×"
                    }
                }

                div { class: "modal-body", {props.children} }

                if let Some(footer) = &props.footer {
                    div { class: "modal-footer", {footer.clone()} }
                }
            }
        }
    }
}
