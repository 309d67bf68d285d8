use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowRight, FaBolt, FaChartColumn, FaGlobe, FaMoneyBillWave, FaNetworkWired, FaShieldHalved,
};
use dioxus_free_icons::Icon;

use crate::client::router::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        title: "App-Based Network",
        description: "Connect with thousands of verified affiliates through our secure platform.",
    },
    Feature {
        title: "Real-Time Analytics",
        description: "Real-time performance insights and comprehensive reporting.",
    },
    Feature {
        title: "Flexible Payments",
        description: "Manage custom commission rates and payment structures through our interface.",
    },
    Feature {
        title: "Enterprise Security",
        description: "Enterprise-grade security measures protecting your data and transactions.",
    },
    Feature {
        title: "Instant Processing",
        description: "Fast and reliable payment processing accessible from any device.",
    },
    Feature {
        title: "Universal Access",
        description: "Access your affiliate network from any device with a modern browser.",
    },
];

fn feature_icon(index: usize) -> Element {
    match index {
        0 => rsx!(Icon { width: 22, height: 22, icon: FaNetworkWired }),
        1 => rsx!(Icon { width: 22, height: 22, icon: FaChartColumn }),
        2 => rsx!(Icon { width: 22, height: 22, icon: FaMoneyBillWave }),
        3 => rsx!(Icon { width: 22, height: 22, icon: FaShieldHalved }),
        4 => rsx!(Icon { width: 22, height: 22, icon: FaBolt }),
        _ => rsx!(Icon { width: 22, height: 22, icon: FaGlobe }),
    }
}

#[component]
pub fn Landing() -> Element {
    rsx!(
        Title { "InfluenceHub" }
        Meta {
            name: "description",
            content: "Marketplace connecting store owners with influencers and affiliates."
        }
        div { class: "min-h-screen bg-base-100",
            div { class: "navbar bg-base-200 px-4",
                div { class: "navbar-start gap-2",
                    div {
                        class: "w-8 h-8 rounded-lg bg-primary text-primary-content",
                        class: "flex items-center justify-center",
                        Icon { width: 16, height: 16, icon: FaBolt }
                    }
                    p { class: "text-xl font-bold",
                        "InfluenceHub"
                    }
                }
                div { class: "navbar-end gap-2",
                    a { href: "/api/docs",
                        button {
                            class: "btn btn-ghost",
                            "API Docs"
                        }
                    }
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary",
                        "Open App"
                    }
                }
            }
            section { class: "hero py-20 px-4",
                div { class: "hero-content text-center flex-col max-w-3xl",
                    h1 { class: "text-4xl sm:text-6xl font-bold",
                        "Welcome to "
                        span { class: "text-primary",
                            "InfluenceHub"
                        }
                    }
                    p { class: "text-lg text-base-content/70",
                        "Run campaigns with the right creators, match products to influencers with "
                        "SmartMatch, and grow through a built-in affiliate program."
                    }
                    div { class: "flex flex-wrap justify-center gap-3 mt-4",
                        Link {
                            to: Route::Dashboard {},
                            class: "btn btn-primary btn-lg flex gap-2",
                            "Get Started"
                            Icon { width: 18, height: 18, icon: FaArrowRight }
                        }
                        Link {
                            to: Route::AffiliateDashboard {},
                            class: "btn btn-outline btn-lg",
                            "Become an Affiliate"
                        }
                    }
                }
            }
            section { class: "py-16 px-4 bg-base-200",
                div { class: "max-w-6xl mx-auto flex flex-col gap-10",
                    h2 { class: "text-3xl font-bold text-center",
                        "Why Choose InfluenceHub?"
                    }
                    div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for (index, feature) in FEATURES.iter().enumerate() {
                            div { key: "{feature.title}", class: "card bg-base-100 shadow-sm",
                                div { class: "card-body",
                                    div {
                                        class: "w-12 h-12 rounded-lg",
                                        class: "bg-primary text-primary-content",
                                        class: "flex items-center justify-center",
                                        {feature_icon(index)}
                                    }
                                    h3 { class: "card-title",
                                        "{feature.title}"
                                    }
                                    p { class: "text-base-content/70",
                                        "{feature.description}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            section { class: "py-16 px-4 text-center",
                h2 { class: "text-3xl font-bold mb-4",
                    "Ready to Scale Your Business?"
                }
                Link {
                    to: Route::Dashboard {},
                    class: "btn btn-primary btn-lg",
                    "Start Now"
                }
            }
        }
    )
}
