pub mod header;
pub mod sidebar;

use dioxus::prelude::*;

use crate::client::router::Route;

pub use header::Header;
pub use sidebar::Sidebar;

/// Shell of every `/app` page: sidebar navigation, header and the routed page.
#[component]
pub fn Layout() -> Element {
    rsx! {
        div { class: "flex min-h-screen bg-base-100",
            Sidebar {}
            div { class: "flex-1 flex flex-col min-w-0",
                Header {}
                main { class: "flex-1 p-4 lg:p-8",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
