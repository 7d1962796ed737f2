use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, gallery::use_gallery};

#[component]
fn NavBarInner() -> Element {
    let title = use_gallery().gallery.config().title.clone();

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                Link { to: Route::GalleryPage {},
                    span { style: "font-weight: 600; font-size: 1.25rem;", "{title}" }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
