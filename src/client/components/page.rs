use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "w-full max-w-[1440px] mx-auto flex flex-col gap-6 {class}",
            {children}
        }
    )
}

/// Title row of an app page with an optional slot for actions on the right.
#[component]
pub fn PageHeader(
    #[props(into)] title: String,
    subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx!(
        div { class: "flex flex-wrap items-center justify-between gap-4",
            div {
                h1 { class: "text-3xl font-bold",
                    "{title}"
                }
                if let Some(subtitle) = subtitle {
                    p { class: "text-base-content/60 mt-1",
                        "{subtitle}"
                    }
                }
            }
            div { class: "flex items-center gap-2",
                {children}
            }
        }
    )
}
