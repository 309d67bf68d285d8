use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRocket;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use entity::prelude::Product;

use crate::{
    client::{
        api,
        components::{Button, ButtonVariant},
        store::toast::ToastState,
    },
    model::format,
};

/// Commission multipliers offered in the boost dialog.
pub const BOOST_MULTIPLIERS: [f64; 4] = [1.5, 2.0, 2.5, 3.0];

/// Visibility gained per extra multiplier step, shown in the confirmation toast.
fn visibility_increase(multiplier: f64) -> f64 {
    multiplier * 50.0
}

#[component]
pub fn BoostModal(
    product: Product,
    onclose: EventHandler<()>,
    onboosted: EventHandler<(i32, f64)>,
) -> Element {
    let mut toasts = use_context::<Store<ToastState>>();

    let product_id = product.id;
    let mut multiplier = use_signal(|| BOOST_MULTIPLIERS[0]);
    let mut activating = use_signal(|| false);

    let cost = use_resource(move || async move {
        api::product::get_boost_cost(product_id, multiplier()).await
    });

    let cost_label = match &*cost.read() {
        Some(Ok(dto)) => format!("{} / day", format::currency(dto.daily_cost)),
        Some(Err(_)) => "Unavailable".to_string(),
        None => "Calculating...".to_string(),
    };

    let activate = move |_: MouseEvent| {
        let chosen = multiplier();
        activating.set(true);

        spawn(async move {
            match api::product::activate_boost(product_id, chosen).await {
                Ok(_) => {
                    toasts.write().success(format!(
                        "{}x commission boost activated! \
                         Your product will get {:.0}% more visibility.",
                        chosen,
                        visibility_increase(chosen)
                    ));
                    onboosted.call((product_id, chosen));
                }
                Err(err) => {
                    tracing::warn!("Failed to boost product {}: {}", product_id, err);
                    toasts.write().error("Failed to activate boost");
                }
            }
            activating.set(false);
        });
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold flex items-center gap-2",
                    Icon { width: 18, height: 18, icon: FaRocket }
                    "Boost {product.name}"
                }
                p { class: "py-2 text-sm text-base-content/70",
                    "Boosted products rank higher in SmartMatch and campaign listings."
                }
                div { class: "grid grid-cols-4 gap-2 my-4",
                    for option_value in BOOST_MULTIPLIERS {
                        {
                            let class = if multiplier() == option_value {
                                "btn btn-primary"
                            } else {
                                "btn btn-outline"
                            };
                            rsx!(
                                button {
                                    key: "{option_value}",
                                    r#type: "button",
                                    class: class,
                                    onclick: move |_| multiplier.set(option_value),
                                    "{option_value}x"
                                }
                            )
                        }
                    }
                }
                div { class: "flex justify-between rounded-lg bg-base-200 p-3",
                    span { "Daily cost" }
                    span { class: "font-semibold", "{cost_label}" }
                }
                div { class: "modal-action",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| onclose.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Success,
                        loading: activating(),
                        onclick: activate,
                        "Activate Boost"
                    }
                }
            }
            div { class: "modal-backdrop", onclick: move |_| onclose.call(()) }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_scales_with_multiplier() {
        assert_eq!(visibility_increase(2.0), 100.0);
        assert_eq!(visibility_increase(1.5), 75.0);
    }
}
