use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaXmark};
use dioxus_free_icons::Icon;

/// Search field with optional filter chips underneath.
///
/// `filters` are the chip labels and `active` the ones currently selected; toggling a chip
/// reports its label through `ontoggle`.
#[component]
pub fn SearchBar(
    #[props(into)] value: String,
    placeholder: Option<String>,
    oninput: EventHandler<String>,
    #[props(default)] filters: Vec<String>,
    #[props(default)] active: Vec<String>,
    ontoggle: Option<EventHandler<String>>,
) -> Element {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());
    let has_value = !value.is_empty();

    rsx!(
        div { class: "flex flex-col gap-3",
            label { class: "input w-full",
                Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                input {
                    r#type: "search",
                    class: "grow",
                    placeholder: placeholder,
                    value: value,
                    oninput: move |evt| oninput.call(evt.value()),
                }
                if has_value {
                    button {
                        r#type: "button",
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| oninput.call(String::new()),
                        Icon { width: 14, height: 14, icon: FaXmark }
                    }
                }
            }
            if !filters.is_empty() {
                div { class: "flex flex-wrap gap-2",
                    for filter in filters {
                        {
                            let selected = active.contains(&filter);
                            let chip_class = if selected { "btn-primary" } else { "btn-outline" };
                            let label = filter.clone();
                            rsx!(
                                button {
                                    key: "{filter}",
                                    r#type: "button",
                                    class: "btn btn-sm rounded-full {chip_class}",
                                    onclick: move |_| {
                                        if let Some(handler) = ontoggle {
                                            handler.call(label.clone());
                                        }
                                    },
                                    "{filter}"
                                }
                            )
                        }
                    }
                }
            }
        }
    )
}
