use dioxus::prelude::*;

#[component]
pub fn Card(class: Option<&'static str>, title: Option<String>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "card bg-base-200 shadow-sm {class}",
            div {
                class: "card-body",
                if let Some(title) = title {
                    h2 {
                        class: "card-title",
                        "{title}"
                    }
                }
                {children}
            }
        }
    )
}
