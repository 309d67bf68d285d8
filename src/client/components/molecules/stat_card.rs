use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowTrendUp, FaBullseye, FaCircleCheck, FaClock, FaDollarSign, FaEye, FaHandshake,
    FaPercent, FaUsers, FaWallet,
};
use dioxus_free_icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Campaigns,
    Revenue,
    Users,
    Trend,
    Completed,
    Views,
    Wallet,
    Pending,
    Referrals,
    Rate,
}

impl StatIcon {
    fn render(&self) -> Element {
        match self {
            StatIcon::Campaigns => rsx!(Icon { width: 22, height: 22, icon: FaBullseye }),
            StatIcon::Revenue => rsx!(Icon { width: 22, height: 22, icon: FaDollarSign }),
            StatIcon::Users => rsx!(Icon { width: 22, height: 22, icon: FaUsers }),
            StatIcon::Trend => rsx!(Icon { width: 22, height: 22, icon: FaArrowTrendUp }),
            StatIcon::Completed => rsx!(Icon { width: 22, height: 22, icon: FaCircleCheck }),
            StatIcon::Views => rsx!(Icon { width: 22, height: 22, icon: FaEye }),
            StatIcon::Wallet => rsx!(Icon { width: 22, height: 22, icon: FaWallet }),
            StatIcon::Pending => rsx!(Icon { width: 22, height: 22, icon: FaClock }),
            StatIcon::Referrals => rsx!(Icon { width: 22, height: 22, icon: FaHandshake }),
            StatIcon::Rate => rsx!(Icon { width: 22, height: 22, icon: FaPercent }),
        }
    }
}

#[component]
pub fn StatCard(
    #[props(into)] title: String,
    #[props(into)] value: String,
    icon: StatIcon,
    note: Option<String>,
) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body gap-3",
                div { class: "flex items-center justify-between",
                    div {
                        class: "w-11 h-11 rounded-lg bg-primary text-primary-content",
                        class: "flex items-center justify-center",
                        {icon.render()}
                    }
                    if let Some(note) = note {
                        span { class: "text-sm text-success font-medium",
                            "{note}"
                        }
                    }
                }
                p { class: "text-sm text-base-content/60",
                    "{title}"
                }
                p { class: "text-2xl font-bold",
                    "{value}"
                }
            }
        }
    )
}
