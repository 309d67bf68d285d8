use dioxus::prelude::*;

/// Labelled text field. `input_type` defaults to `text`.
#[component]
pub fn Input(
    label: Option<String>,
    #[props(into)] value: String,
    placeholder: Option<String>,
    input_type: Option<&'static str>,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let input_type = input_type.unwrap_or("text");
    let placeholder = placeholder.unwrap_or_default();
    let error_class = if error.is_some() { "input-error" } else { "" };

    rsx!(
        fieldset { class: "fieldset w-full",
            if let Some(label) = label {
                legend { class: "fieldset-legend",
                    "{label}"
                }
            }
            input {
                class: "input w-full {error_class}",
                r#type: input_type,
                placeholder: placeholder,
                value: value,
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(error) = error {
                p { class: "label text-error",
                    "{error}"
                }
            }
        }
    )
}
