use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Page Not Found | InfluenceHub" }
        div { class: "min-h-screen flex items-center justify-center p-4",
            Page { class: "items-center text-center",
                p { class: "text-6xl font-bold text-primary",
                    "404"
                }
                p { class: "text-xl",
                    "Nothing lives at {path}"
                }
                Link {
                    to: Route::Landing {},
                    class: "btn btn-primary",
                    "Back to Home"
                }
            }
        }
    )
}
