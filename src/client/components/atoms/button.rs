use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Ghost,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-neutral",
            ButtonVariant::Success => "btn-success",
            ButtonVariant::Danger => "btn-error",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

/// Clicks are swallowed while the button is disabled or loading.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] small: bool,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    class: Option<&'static str>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    let size_class = if small { "btn-sm" } else { "" };
    let class = class.unwrap_or_default();
    let inactive = disabled || loading;

    rsx!(
        button {
            r#type: "button",
            class: "btn {variant_class} {size_class} {class}",
            disabled: inactive,
            onclick: move |evt| {
                if inactive {
                    return;
                }
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "loading loading-spinner loading-sm" }
            }
            {children}
        }
    )
}
