//! Loading, empty and error states shared by every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaInbox, FaRotateRight, FaTriangleExclamation};
use dioxus_free_icons::Icon;

#[component]
pub fn Loading(#[props(default = 6)] cards: usize) -> Element {
    rsx!(
        div { class: "flex flex-col gap-6",
            div { class: "skeleton h-10 w-64" }
            div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                for index in 0..cards {
                    div {
                        key: "{index}",
                        class: "skeleton h-48 w-full"
                    }
                }
            }
        }
    )
}

#[component]
pub fn Empty(
    #[props(into)] title: String,
    #[props(into)] message: String,
    action_label: Option<String>,
    onaction: Option<EventHandler<()>>,
) -> Element {
    rsx!(
        div { class: "flex flex-col items-center justify-center text-center gap-4 py-12 px-6",
            div { class: "w-16 h-16 rounded-full bg-base-300 flex items-center justify-center",
                Icon { width: 28, height: 28, icon: FaInbox }
            }
            h3 { class: "text-xl font-semibold",
                "{title}"
            }
            p { class: "text-base-content/60 max-w-md",
                "{message}"
            }
            if let (Some(label), Some(handler)) = (action_label, onaction) {
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| handler.call(()),
                    "{label}"
                }
            }
        }
    )
}

/// Full page error with a retry button.
#[component]
pub fn ErrorPanel(#[props(into)] message: String, onretry: Option<EventHandler<()>>) -> Element {
    rsx!(
        div { class: "flex flex-col items-center justify-center text-center gap-4 py-12 px-6",
            div {
                class: "w-16 h-16 rounded-full bg-error text-error-content",
                class: "flex items-center justify-center",
                Icon { width: 28, height: 28, icon: FaTriangleExclamation }
            }
            h3 { class: "text-2xl font-bold",
                "Error"
            }
            p { class: "text-base-content/60 max-w-md",
                "{message}"
            }
            if let Some(handler) = onretry {
                button {
                    r#type: "button",
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| handler.call(()),
                    Icon { width: 16, height: 16, icon: FaRotateRight }
                    "Try Again"
                }
            }
        }
    )
}
