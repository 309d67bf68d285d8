use dioxus::prelude::*;
use dioxus_logger::tracing;
use entity::prelude::Settings;

use crate::{
    client::{
        api,
        components::{Button, Input},
        store::toast::ToastState,
    },
    model::settings::SettingsPatchDto,
};

#[component]
pub fn ProfileTab(settings: Signal<Settings>) -> Element {
    let mut settings = settings;
    let mut toasts = use_context::<Store<ToastState>>();

    let mut draft = use_signal(|| settings());
    let mut image_url = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut uploading = use_signal(|| false);

    let save = move |_: MouseEvent| {
        let patch = SettingsPatchDto::profile(&draft.read());
        saving.set(true);

        spawn(async move {
            match api::settings::update_settings(&patch).await {
                Ok(updated) => {
                    settings.set(updated.clone());
                    draft.set(updated);
                    toasts.write().success("Settings updated successfully");
                }
                Err(err) => {
                    tracing::warn!("Failed to save profile: {}", err);
                    toasts.write().error("Failed to save settings");
                }
            }
            saving.set(false);
        });
    };

    let upload = move |_: MouseEvent| {
        let url = image_url().trim().to_string();
        if url.is_empty() {
            return;
        }
        uploading.set(true);

        spawn(async move {
            match api::settings::upload_profile_image(url).await {
                Ok(updated) => {
                    draft.write().profile_image = updated.profile_image.clone();
                    settings.set(updated);
                    image_url.set(String::new());
                    toasts.write().success("Profile image updated");
                }
                Err(err) => {
                    toasts.write().error(err);
                }
            }
            uploading.set(false);
        });
    };

    let current = draft();
    let initial = current.full_name.chars().next().unwrap_or('?');

    rsx!(
        h3 { class: "card-title", "Profile Information" }
        div { class: "flex items-center gap-4",
            if let Some(src) = current.profile_image.clone() {
                div { class: "avatar",
                    div { class: "w-20 rounded-full",
                        img { src: src, alt: "Profile image" }
                    }
                }
            } else {
                div { class: "avatar avatar-placeholder",
                    div { class: "w-20 rounded-full bg-primary text-primary-content text-2xl",
                        span { "{initial}" }
                    }
                }
            }
            div { class: "join",
                input {
                    class: "input join-item",
                    r#type: "url",
                    placeholder: "Image URL",
                    value: image_url(),
                    oninput: move |evt| image_url.set(evt.value()),
                }
                Button {
                    class: "join-item",
                    loading: uploading(),
                    onclick: upload,
                    "Change Photo"
                }
            }
        }
        div { class: "grid gap-2 md:grid-cols-2",
            Input {
                label: "Full Name".to_string(),
                value: current.full_name.clone(),
                oninput: move |value| draft.write().full_name = value,
            }
            Input {
                label: "Email".to_string(),
                value: current.email.clone(),
                input_type: "email",
                oninput: move |value| draft.write().email = value,
            }
            Input {
                label: "Phone".to_string(),
                value: current.phone.clone(),
                input_type: "tel",
                oninput: move |value| draft.write().phone = value,
            }
            Input {
                label: "Business Name".to_string(),
                value: current.business_name.clone(),
                oninput: move |value| draft.write().business_name = value,
            }
        }
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "Bio" }
            textarea {
                class: "textarea w-full",
                rows: 4,
                value: current.bio.clone(),
                oninput: move |evt| draft.write().bio = evt.value(),
            }
        }
        div { class: "flex justify-end",
            Button {
                loading: saving(),
                onclick: save,
                "Save Changes"
            }
        }
    )
}
