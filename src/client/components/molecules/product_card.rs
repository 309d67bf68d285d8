use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaRocket, FaTrash, FaWandMagicSparkles};
use dioxus_free_icons::Icon;
use entity::prelude::Product;

use crate::{
    client::components::{Badge, BadgeVariant, Button, ButtonVariant},
    model::format,
};

#[component]
pub fn ProductCard(
    product: Product,
    onedit: EventHandler<Product>,
    ondelete: EventHandler<i32>,
    onboost: EventHandler<i32>,
    onmatch: EventHandler<Product>,
) -> Element {
    let id = product.id;
    let price = format::currency(product.price);
    let views = format::compact(product.total_views);
    let commission = product.commission_type.describe(product.commission_value);
    let edit_product = product.clone();
    let match_product = product.clone();

    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            if let Some(image) = product.images.first().cloned() {
                figure {
                    img {
                        class: "w-full h-44 object-cover",
                        src: image,
                        alt: "{product.name}",
                    }
                }
            }
            div { class: "card-body gap-3",
                div { class: "flex items-start justify-between gap-2",
                    h3 { class: "card-title text-lg",
                        "{product.name}"
                    }
                    span { class: "font-bold text-primary",
                        "{price}"
                    }
                }
                div { class: "flex flex-wrap gap-2",
                    Badge { small: true, "{product.niche}" }
                    if product.smart_match {
                        Badge { variant: BadgeVariant::Info, small: true, "SmartMatch" }
                    }
                    if product.boost_active {
                        Badge { variant: BadgeVariant::Warning, small: true,
                            "Boosted {product.boost_multiplier}x"
                        }
                    }
                }
                p { class: "text-sm text-base-content/70 line-clamp-2",
                    "{product.description}"
                }
                div { class: "grid grid-cols-3 gap-2 text-center text-xs",
                    div {
                        p { class: "font-semibold text-base", "{product.active_campaigns}" }
                        p { class: "text-base-content/60", "Campaigns" }
                    }
                    div {
                        p { class: "font-semibold text-base", "{views}" }
                        p { class: "text-base-content/60", "Views" }
                    }
                    div {
                        p { class: "font-semibold text-base", "{product.total_sales}" }
                        p { class: "text-base-content/60", "Sales" }
                    }
                }
                p { class: "text-sm text-success",
                    "{commission}"
                }
                div { class: "card-actions justify-end",
                    Button {
                        variant: ButtonVariant::Ghost,
                        small: true,
                        onclick: move |_| onedit.call(edit_product.clone()),
                        Icon { width: 14, height: 14, icon: FaPen }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        small: true,
                        onclick: move |_| ondelete.call(id),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        small: true,
                        onclick: move |_| onmatch.call(match_product.clone()),
                        Icon { width: 14, height: 14, icon: FaWandMagicSparkles }
                        "Match"
                    }
                    Button {
                        small: true,
                        disabled: product.boost_active,
                        onclick: move |_| onboost.call(id),
                        Icon { width: 14, height: 14, icon: FaRocket }
                        "Boost"
                    }
                }
            }
        }
    )
}
