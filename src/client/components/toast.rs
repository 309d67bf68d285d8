use dioxus::prelude::*;

use crate::client::{
    store::toast::{Toast, ToastState, TOAST_DURATION_MS},
    util::sleep,
};

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_context::<Store<ToastState>>();
    let visible = toasts.read().toasts.clone();

    rsx!(
        div { class: "toast toast-top toast-end z-50",
            for toast in visible {
                ToastItem { key: "{toast.id}", toast: toast }
            }
        }
    )
}

/// A single toast, dismissed on click or after a few seconds.
#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_context::<Store<ToastState>>();
    let id = toast.id;
    let alert_class = toast.kind.alert_class();

    use_future(move || async move {
        sleep(TOAST_DURATION_MS).await;
        toasts.write().dismiss(id);
    });

    rsx!(
        div {
            class: "alert {alert_class} cursor-pointer shadow-lg",
            onclick: move |_| toasts.write().dismiss(id),
            span {
                "{toast.message}"
            }
        }
    )
}
