use dioxus::prelude::*;
use entity::prelude::{CampaignStatus, CommissionStatus, ReferralStatus, TransactionStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "badge-neutral",
            BadgeVariant::Primary => "badge-primary",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Warning => "badge-warning",
            BadgeVariant::Error => "badge-error",
            BadgeVariant::Info => "badge-info",
        }
    }

    pub fn for_campaign(status: CampaignStatus) -> Self {
        match status {
            CampaignStatus::Pending => BadgeVariant::Warning,
            CampaignStatus::Accepted => BadgeVariant::Info,
            CampaignStatus::Completed => BadgeVariant::Success,
            CampaignStatus::Declined => BadgeVariant::Error,
        }
    }

    pub fn for_referral(status: ReferralStatus) -> Self {
        match status {
            ReferralStatus::Pending => BadgeVariant::Warning,
            ReferralStatus::Converted => BadgeVariant::Success,
            ReferralStatus::Expired => BadgeVariant::Neutral,
        }
    }

    pub fn for_commission(status: CommissionStatus) -> Self {
        match status {
            CommissionStatus::Pending => BadgeVariant::Warning,
            CommissionStatus::Processing => BadgeVariant::Info,
            CommissionStatus::Paid => BadgeVariant::Success,
        }
    }

    pub fn for_transaction(status: TransactionStatus) -> Self {
        match status {
            TransactionStatus::Pending => BadgeVariant::Warning,
            TransactionStatus::Completed => BadgeVariant::Success,
            TransactionStatus::Failed => BadgeVariant::Error,
        }
    }
}

#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] small: bool,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    let size_class = if small { "badge-sm" } else { "" };

    rsx!(
        span {
            class: "badge {variant_class} {size_class} capitalize",
            {children}
        }
    )
}
