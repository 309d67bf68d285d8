use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaRightLeft};
use dioxus_free_icons::Icon;

use crate::client::store::session::SessionState;

#[component]
pub fn Header() -> Element {
    let mut session = use_context::<Store<SessionState>>();
    let role = session.read().role;
    let role_label = role.label();
    let other_role = role.toggled().label();

    rsx! {
        div {
            class: "navbar bg-base-200 border-b border-base-300 sticky top-0 z-30",
            div {
                class: "navbar-start gap-2",
                button {
                    r#type: "button",
                    class: "btn btn-ghost btn-square lg:hidden",
                    onclick: move |_| {
                        let open = session.read().sidebar_open;
                        session.write().sidebar_open = !open;
                    },
                    Icon { width: 18, height: 18, icon: FaBars }
                }
                p { class: "text-lg font-semibold lg:hidden",
                    "InfluenceHub"
                }
            }
            div {
                class: "navbar-end gap-3",
                span { class: "badge badge-outline hidden sm:inline-flex",
                    "{role_label}"
                }
                button {
                    r#type: "button",
                    class: "btn btn-outline btn-sm flex gap-2",
                    onclick: move |_| {
                        let next = session.read().role.toggled();
                        session.write().role = next;
                    },
                    Icon { width: 14, height: 14, icon: FaRightLeft }
                    "View as {other_role}"
                }
            }
        }
    }
}
