use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBoxOpen, FaEye, FaUsers};
use dioxus_free_icons::Icon;
use entity::prelude::{Campaign, CampaignStatus};

use crate::client::components::{Badge, BadgeVariant, Button, ButtonVariant};

/// Summary of a campaign offer. Accept and decline are only offered while it is pending.
#[component]
pub fn CampaignCard(
    campaign: Campaign,
    onaccept: Option<EventHandler<i32>>,
    ondecline: Option<EventHandler<i32>>,
) -> Element {
    let id = campaign.id;
    let commission = campaign
        .commission_type
        .describe(campaign.commission_value);
    let deadline = campaign
        .deadline
        .map(|deadline| deadline.format("%b %-d, %Y").to_string());
    let status = campaign.status;
    let status_label = status.as_str();
    let pending = status == CampaignStatus::Pending;

    rsx!(
        div { class: "card bg-base-200 shadow-sm hover:shadow-md transition-shadow",
            div { class: "card-body gap-4",
                div { class: "flex items-start justify-between gap-2",
                    div { class: "flex items-center gap-3",
                        div {
                            class: "w-12 h-12 rounded-lg bg-primary text-primary-content",
                            class: "flex items-center justify-center",
                            Icon { width: 20, height: 20, icon: FaBoxOpen }
                        }
                        div {
                            h3 { class: "font-semibold",
                                "{campaign.product_name}"
                            }
                            p { class: "text-sm text-base-content/60",
                                "{campaign.store_name}"
                            }
                        }
                    }
                    Badge { variant: BadgeVariant::for_campaign(status),
                        "{status_label}"
                    }
                }
                if let Some(image) = campaign.product_image.clone() {
                    img {
                        class: "w-full h-40 object-cover rounded-lg",
                        src: image,
                        alt: "{campaign.product_name}",
                    }
                }
                div { class: "flex flex-col gap-2 text-sm",
                    div { class: "flex justify-between",
                        span { class: "text-base-content/60", "Commission" }
                        span { class: "text-success font-semibold", "{commission}" }
                    }
                    div { class: "flex justify-between",
                        span { class: "text-base-content/60", "Niche" }
                        Badge { small: true, "{campaign.niche}" }
                    }
                    if let Some(deadline) = deadline {
                        div { class: "flex justify-between",
                            span { class: "text-base-content/60", "Deadline" }
                            span { "{deadline}" }
                        }
                    }
                }
                p { class: "text-sm text-base-content/70 line-clamp-2",
                    "{campaign.description}"
                }
                div { class: "flex items-center gap-4 text-xs text-base-content/60",
                    span { class: "flex items-center gap-1",
                        Icon { width: 12, height: 12, icon: FaEye }
                        "{campaign.views} views"
                    }
                    span { class: "flex items-center gap-1",
                        Icon { width: 12, height: 12, icon: FaUsers }
                        "{campaign.applications} applications"
                    }
                }
                if pending && (onaccept.is_some() || ondecline.is_some()) {
                    div { class: "card-actions justify-end",
                        if let Some(handler) = ondecline {
                            Button {
                                variant: ButtonVariant::Ghost,
                                small: true,
                                onclick: move |_| handler.call(id),
                                "Decline"
                            }
                        }
                        if let Some(handler) = onaccept {
                            Button {
                                variant: ButtonVariant::Success,
                                small: true,
                                onclick: move |_| handler.call(id),
                                "Accept"
                            }
                        }
                    }
                }
            }
        }
    )
}
