use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;
use entity::prelude::{CommissionType, ContentStyle, EngagementTier, Niche};

use super::recommendations::Recommendations;
use crate::{
    client::components::{Button, ButtonVariant, Input},
    model::product::{InfluencerMatch, ProductForm},
};

/// Add or edit form. Validation happens in the parent on submit.
#[component]
pub fn ProductFormModal(
    form: Signal<ProductForm>,
    editing: bool,
    saving: bool,
    matches: Vec<InfluencerMatch>,
    matching: bool,
    onsubmit: EventHandler<()>,
    onclose: EventHandler<()>,
    onrecommend: EventHandler<()>,
    onclearmatches: EventHandler<()>,
) -> Element {
    let mut form = form;
    let mut image_url = use_signal(String::new);

    let current = form();
    let title = if editing { "Edit Product" } else { "Add New Product" };
    let submit_label = if editing { "Update Product" } else { "Create Product" };
    let niche_value = current.niche.map(|n| n.as_str()).unwrap_or("");
    let style_value = current.content_style.map(|s| s.as_str()).unwrap_or("");
    let tier_value = current.engagement_tier.as_str();
    let commission_value = current.commission_type.as_str();
    let quality = current.quality_score;

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-3xl",
                div { class: "flex items-center justify-between mb-4",
                    h3 { class: "text-xl font-bold",
                        "{title}"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-ghost btn-sm btn-square",
                        onclick: move |_| onclose.call(()),
                        Icon { width: 14, height: 14, icon: FaXmark }
                    }
                }
                div { class: "grid gap-2 md:grid-cols-2",
                    Input {
                        label: "Product Name *".to_string(),
                        value: current.name.clone(),
                        placeholder: "Enter product name".to_string(),
                        oninput: move |value| form.write().name = value,
                    }
                    Input {
                        label: "Price *".to_string(),
                        value: current.price.clone(),
                        input_type: "number",
                        placeholder: "0.00".to_string(),
                        oninput: move |value| form.write().price = value,
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Niche *" }
                        select {
                            class: "select w-full",
                            value: niche_value,
                            onchange: move |evt| {
                                form.write().niche = Niche::parse(&evt.value());
                                if form.read().smart_match {
                                    onrecommend.call(());
                                }
                            },
                            option { value: "", disabled: true, "Select niche" }
                            for niche in Niche::ALL {
                                option { key: "{niche}", value: "{niche}", "{niche}" }
                            }
                        }
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Commission Type" }
                        select {
                            class: "select w-full",
                            value: commission_value,
                            onchange: move |evt| {
                                if let Some(kind) = CommissionType::parse(&evt.value()) {
                                    form.write().commission_type = kind;
                                }
                            },
                            for kind in CommissionType::ALL {
                                {
                                    let value = kind.as_str();
                                    let label = kind.label();
                                    rsx!(option { key: "{value}", value: value, "{label}" })
                                }
                            }
                        }
                    }
                    Input {
                        label: "Commission Value".to_string(),
                        value: current.commission_value.clone(),
                        input_type: "number",
                        placeholder: "0".to_string(),
                        oninput: move |value| form.write().commission_value = value,
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Product Image URL" }
                        div { class: "join w-full",
                            input {
                                class: "input join-item w-full",
                                r#type: "url",
                                placeholder: "https://...",
                                value: image_url(),
                                oninput: move |evt| image_url.set(evt.value()),
                            }
                            button {
                                r#type: "button",
                                class: "btn join-item",
                                onclick: move |_| {
                                    let url = image_url().trim().to_string();
                                    if !url.is_empty() {
                                        form.write().images.push(url);
                                        image_url.set(String::new());
                                    }
                                },
                                "Add"
                            }
                        }
                    }
                }
                if !current.images.is_empty() {
                    div { class: "flex flex-wrap gap-2 mt-2",
                        for (index, image) in current.images.iter().cloned().enumerate() {
                            div { key: "{index}", class: "relative",
                                img { class: "w-16 h-16 object-cover rounded", src: image }
                                button {
                                    r#type: "button",
                                    class: "btn btn-xs btn-circle btn-error",
                                    class: "absolute -top-2 -right-2",
                                    onclick: move |_| {
                                        form.write().images.remove(index);
                                    },
                                    "x"
                                }
                            }
                        }
                    }
                }
                fieldset { class: "fieldset",
                    legend { class: "fieldset-legend", "Description *" }
                    textarea {
                        class: "textarea w-full",
                        rows: 3,
                        placeholder: "Describe the product",
                        value: current.description.clone(),
                        oninput: move |evt| form.write().description = evt.value(),
                    }
                }
                label { class: "label cursor-pointer gap-3 mt-2",
                    input {
                        r#type: "checkbox",
                        class: "toggle toggle-primary",
                        checked: current.smart_match,
                        onchange: move |evt| {
                            let enabled = evt.checked();
                            form.write().smart_match = enabled;
                            if enabled && form.read().niche.is_some() {
                                onrecommend.call(());
                            } else {
                                onclearmatches.call(());
                            }
                        },
                    }
                    span { "Enable SmartMatch recommendations" }
                }
                if current.smart_match {
                    div { class: "grid gap-2 md:grid-cols-2 mt-2 p-4 rounded-lg bg-base-200",
                        Input {
                            label: "Target Audience".to_string(),
                            value: current.target_audience.clone(),
                            placeholder: "e.g. women 25-34 into skincare".to_string(),
                            oninput: move |value| form.write().target_audience = value,
                        }
                        fieldset { class: "fieldset",
                            legend { class: "fieldset-legend", "Content Style" }
                            select {
                                class: "select w-full",
                                value: style_value,
                                onchange: move |evt| {
                                    form.write().content_style = ContentStyle::parse(&evt.value());
                                },
                                option { value: "", "Any style" }
                                for style in ContentStyle::ALL {
                                    {
                                        let value = style.as_str();
                                        let label = style.label();
                                        rsx!(option { key: "{value}", value: value, "{label}" })
                                    }
                                }
                            }
                        }
                        fieldset { class: "fieldset",
                            legend { class: "fieldset-legend", "Engagement Tier" }
                            select {
                                class: "select w-full",
                                value: tier_value,
                                onchange: move |evt| {
                                    if let Some(tier) = EngagementTier::parse(&evt.value()) {
                                        form.write().engagement_tier = tier;
                                    }
                                },
                                for tier in EngagementTier::ALL {
                                    {
                                        let value = tier.as_str();
                                        let label = tier.label();
                                        rsx!(option { key: "{value}", value: value, "{label}" })
                                    }
                                }
                            }
                        }
                        fieldset { class: "fieldset",
                            legend { class: "fieldset-legend", "Minimum Quality: {quality}/5" }
                            input {
                                r#type: "range",
                                class: "range range-primary",
                                min: 1,
                                max: 5,
                                value: "{quality}",
                                oninput: move |evt| {
                                    if let Ok(score) = evt.value().parse::<u8>() {
                                        form.write().quality_score = score.clamp(1, 5);
                                    }
                                },
                            }
                        }
                        div { class: "md:col-span-2 flex justify-end",
                            Button {
                                variant: ButtonVariant::Outline,
                                small: true,
                                loading: matching,
                                onclick: move |_| onrecommend.call(()),
                                "Refresh matches"
                            }
                        }
                    }
                    Recommendations { matches: matches, loading: matching }
                }
                div { class: "modal-action",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| onclose.call(()),
                        "Cancel"
                    }
                    Button {
                        loading: saving,
                        onclick: move |_| onsubmit.call(()),
                        "{submit_label}"
                    }
                }
            }
        }
    )
}
