use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::{Button, Input},
        store::toast::ToastState,
    },
    model::settings::{PasswordChangeDto, MINIMUM_PASSWORD_LENGTH},
};

/// Check the password form before it is sent.
///
/// The server repeats the length check and verifies the current password.
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<PasswordChangeDto, &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("Please fill in all password fields");
    }
    if new != confirm {
        return Err("New passwords do not match");
    }
    if new.chars().count() < MINIMUM_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters");
    }

    Ok(PasswordChangeDto {
        current_password: current.to_string(),
        new_password: new.to_string(),
    })
}

#[component]
pub fn SecurityTab() -> Element {
    let mut toasts = use_context::<Store<ToastState>>();

    let mut current = use_signal(String::new);
    let mut new = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let submit = move |_: MouseEvent| {
        let change = match validate_password_change(&current(), &new(), &confirm()) {
            Ok(change) => change,
            Err(message) => {
                toasts.write().error(message);
                return;
            }
        };
        saving.set(true);

        spawn(async move {
            match api::settings::update_password(&change).await {
                Ok(()) => {
                    current.set(String::new());
                    new.set(String::new());
                    confirm.set(String::new());
                    toasts.write().success("Password updated successfully");
                }
                Err(err) => {
                    tracing::warn!("Password change rejected: {}", err);
                    toasts.write().error(err);
                }
            }
            saving.set(false);
        });
    };

    rsx!(
        h3 { class: "card-title", "Change Password" }
        div { class: "flex flex-col max-w-md",
            Input {
                label: "Current Password".to_string(),
                value: current(),
                input_type: "password",
                placeholder: "Enter current password".to_string(),
                oninput: move |value| current.set(value),
            }
            Input {
                label: "New Password".to_string(),
                value: new(),
                input_type: "password",
                placeholder: "Enter new password".to_string(),
                oninput: move |value| new.set(value),
            }
            Input {
                label: "Confirm New Password".to_string(),
                value: confirm(),
                input_type: "password",
                placeholder: "Confirm new password".to_string(),
                oninput: move |value| confirm.set(value),
            }
            div { class: "mt-4",
                Button {
                    loading: saving(),
                    onclick: submit,
                    "Update Password"
                }
            }
        }
    )
}
