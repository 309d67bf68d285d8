mod boost;
mod form;
mod recommendations;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use entity::prelude::Product;

use crate::{
    client::{
        api,
        components::{
            Button, ButtonVariant, Empty, ErrorPanel, Loading, Page, PageHeader, ProductCard,
        },
        store::toast::ToastState,
        util::LoadState,
    },
    model::product::{InfluencerMatch, ProductForm, ProductPatchDto},
};

use boost::BoostModal;
use form::ProductFormModal;
use recommendations::Recommendations;

/// Products requested for the management grid.
pub const PRODUCT_PAGE_SIZE: usize = 50;

#[component]
pub fn ProductManagement() -> Element {
    let mut toasts = use_context::<Store<ToastState>>();

    let mut products = use_signal(Vec::<Product>::new);
    let mut state = use_signal(LoadState::default);

    let mut form = use_signal(ProductForm::default);
    let mut form_open = use_signal(|| false);
    let mut editing = use_signal(|| None::<i32>);
    let mut saving = use_signal(|| false);

    let mut boosting = use_signal(|| None::<Product>);
    let mut deleting = use_signal(|| None::<i32>);
    let mut recommendations = use_signal(Vec::<InfluencerMatch>::new);
    let mut matching = use_signal(|| false);

    let mut loader = use_future(move || async move {
        state.set(LoadState::Loading);

        match api::product::get_products(1, PRODUCT_PAGE_SIZE).await {
            Ok(page) => {
                products.set(page.items);
                state.set(LoadState::Ready);
            }
            Err(err) => {
                tracing::warn!("Failed to load products: {}", err);
                state.set(LoadState::Failed("Failed to load products".to_string()));
            }
        }
    });

    let mut load_recommendations = move |boost: Option<(bool, f64)>| {
        let (boost_active, boost_multiplier) = boost.unwrap_or((false, 1.0));
        let Some(criteria) = form.read().criteria(boost_active, boost_multiplier) else {
            recommendations.set(Vec::new());
            return;
        };
        matching.set(true);

        spawn(async move {
            match api::product::get_recommendations(&criteria).await {
                Ok(matches) => recommendations.set(matches),
                Err(err) => {
                    tracing::warn!("Failed to load recommendations: {}", err);
                    toasts.write().error("Failed to load AI recommendations");
                }
            }
            matching.set(false);
        });
    };

    let open_create = move |_: MouseEvent| {
        form.set(ProductForm::default());
        editing.set(None);
        recommendations.set(Vec::new());
        form_open.set(true);
    };

    let close_form = move |_: ()| {
        form_open.set(false);
        editing.set(None);
    };

    let submit = move |_: ()| {
        let product = match form.read().validate() {
            Ok(product) => product,
            Err(message) => {
                toasts.write().error(message);
                return;
            }
        };
        saving.set(true);

        spawn(async move {
            let result = match editing() {
                Some(id) => api::product::update_product(id, &ProductPatchDto::from(product)).await,
                None => api::product::create_product(&product).await,
            };

            match result {
                Ok(saved) => {
                    let updated = editing().is_some();
                    {
                        let mut list = products.write();
                        if let Some(index) = list.iter().position(|p| p.id == saved.id) {
                            list[index] = saved;
                        } else {
                            list.push(saved);
                        }
                    }
                    toasts.write().success(if updated {
                        "Product updated successfully"
                    } else {
                        "Product created successfully"
                    });
                    form_open.set(false);
                    editing.set(None);
                }
                Err(err) => {
                    toasts.write().error(err);
                }
            }
            saving.set(false);
        });
    };

    let confirm_delete = move |_: MouseEvent| {
        let Some(id) = deleting() else {
            return;
        };
        deleting.set(None);

        spawn(async move {
            match api::product::delete_product(id).await {
                Ok(()) => {
                    products.write().retain(|p| p.id != id);
                    toasts.write().success("Product deleted successfully");
                }
                Err(err) => {
                    toasts.write().error(err);
                }
            }
        });
    };

    let on_boosted = move |(id, multiplier): (i32, f64)| {
        if let Some(product) = products.write().iter_mut().find(|p| p.id == id) {
            product.boost_active = true;
            product.boost_multiplier = multiplier;
        }
        boosting.set(None);
        if form_open() && form.read().smart_match {
            load_recommendations(Some((true, multiplier)));
        }
    };

    let body = match state() {
        LoadState::Loading => rsx!(Loading {}),
        LoadState::Failed(message) => rsx!(ErrorPanel {
            message: message,
            onretry: move |_| loader.restart(),
        }),
        LoadState::Ready => {
            let list = products();

            rsx!(
                if list.is_empty() {
                    Empty {
                        title: "No products yet",
                        message: "Add your first product to start attracting creators.",
                        action_label: "Add Product".to_string(),
                        onaction: move |_| {
                            form.set(ProductForm::default());
                            editing.set(None);
                            form_open.set(true);
                        },
                    }
                } else {
                    div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-3",
                        for product in list {
                            ProductCard {
                                key: "{product.id}",
                                product: product,
                                onedit: move |product: Product| {
                                    form.set(ProductForm::from_product(&product));
                                    editing.set(Some(product.id));
                                    recommendations.set(Vec::new());
                                    form_open.set(true);
                                },
                                ondelete: move |id| deleting.set(Some(id)),
                                onboost: move |id| {
                                    let product =
                                        products.read().iter().find(|p| p.id == id).cloned();
                                    boosting.set(product);
                                },
                                onmatch: move |product: Product| {
                                    form.set(ProductForm::from_product(&product));
                                    let boost = (product.boost_active, product.boost_multiplier);
                                    load_recommendations(Some(boost));
                                },
                            }
                        }
                    }
                }
                if !form_open() {
                    Recommendations {
                        matches: recommendations(),
                        loading: matching(),
                    }
                }
            )
        }
    };

    rsx!(
        Title { "Products | InfluenceHub" }
        Meta {
            name: "description",
            content: "Manage products, boosts and SmartMatch recommendations."
        }
        Page {
            PageHeader {
                title: "Product Management",
                subtitle: "Manage your products and create marketing campaigns".to_string(),
                Button {
                    onclick: open_create,
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Add Product"
                }
            }
            {body}
        }
        if form_open() {
            ProductFormModal {
                form: form,
                editing: editing().is_some(),
                saving: saving(),
                matches: recommendations(),
                matching: matching(),
                onsubmit: submit,
                onclose: close_form,
                onrecommend: move |_| load_recommendations(None),
                onclearmatches: move |_| recommendations.set(Vec::new()),
            }
        }
        if let Some(product) = boosting() {
            BoostModal {
                product: product,
                onclose: move |_| boosting.set(None),
                onboosted: on_boosted,
            }
        }
        if deleting().is_some() {
            div { class: "modal modal-open",
                div { class: "modal-box",
                    h3 { class: "text-lg font-bold",
                        "Delete product?"
                    }
                    p { class: "py-4",
                        "This removes the product and cannot be undone."
                    }
                    div { class: "modal-action",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| deleting.set(None),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: confirm_delete,
                            "Delete"
                        }
                    }
                }
            }
        }
    )
}
