//! Factories for marketplace records with deterministic, valid defaults.
//!
//! Tests override the fields they care about with struct update syntax:
//!
//! ```ignore
//! let campaign = Campaign { commission_value: 300.0, ..factory::campaign(1) };
//! ```

use chrono::{DateTime, Duration, Utc};
use entity::prelude::*;

/// Reference timestamp all factory records are dated from, 2026-01-01T00:00:00Z.
pub fn base_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_767_225_600, 0).unwrap_or_default()
}

/// `base_time()` moved forward by `days`.
pub fn day(days: i64) -> DateTime<Utc> {
    base_time() + Duration::days(days)
}

pub fn campaign(id: i32) -> Campaign {
    Campaign {
        id,
        product_name: format!("Product {}", id),
        store_name: format!("Store {}", id),
        niche: Niche::Fashion,
        commission_type: CommissionType::PerPost,
        commission_value: 100.0,
        status: CampaignStatus::Pending,
        deadline: Some(day(30)),
        description: format!("Campaign {} description", id),
        product_image: None,
        views: 0,
        applications: 0,
        created_at: day(id as i64),
    }
}

pub fn product(id: i32) -> Product {
    Product {
        id,
        name: format!("Product {}", id),
        price: 49.99,
        niche: Niche::Tech,
        description: format!("Product {} description", id),
        images: Vec::new(),
        commission_type: CommissionType::PerSale,
        commission_value: 15.0,
        smart_match: false,
        target_audience: None,
        content_style: None,
        engagement_tier: None,
        quality_score: None,
        boost_active: false,
        boost_multiplier: 1.0,
        boost_activated_at: None,
        created_at: day(id as i64),
        active_campaigns: 0,
        total_views: 0,
        total_sales: 0,
    }
}

pub fn affiliate(id: i32) -> Affiliate {
    Affiliate {
        id,
        name: format!("Affiliate {}", id),
        email: format!("affiliate{}@example.com", id),
        referral_code: format!("AF2026{:03}", id),
        status: AffiliateStatus::Active,
        join_date: base_time(),
        total_earnings: 0.0,
        pending_commissions: 0.0,
        total_referrals: 0,
        successful_referrals: 0,
        commission_rate: 0.5,
        last_payout_date: None,
    }
}

pub fn referral(id: i32, affiliate_id: i32) -> Referral {
    Referral {
        id,
        affiliate_id,
        name: format!("Customer {}", id),
        email: format!("customer{}@example.com", id),
        signup_date: day(id as i64),
        status: ReferralStatus::Pending,
        subscription_plan: None,
        subscription_value: 0.0,
        commission_earned: 0.0,
        conversion_date: None,
    }
}

pub fn commission(id: i32, affiliate_id: i32, amount: f64, status: CommissionStatus) -> Commission {
    Commission {
        id,
        affiliate_id,
        referral_id: id,
        amount,
        date: day(id as i64),
        status,
        payout_date: None,
        subscription_plan: Some("Starter".to_string()),
        customer_name: format!("Customer {}", id),
    }
}

pub fn payout(id: i32, affiliate_id: i32, amount: f64) -> Payout {
    Payout {
        id,
        affiliate_id,
        amount,
        date: day(id as i64),
        status: PayoutStatus::Completed,
        method: "bank_transfer".to_string(),
        transaction_id: format!("TXN_{}_{}", id, affiliate_id),
        commissions_included: 1,
    }
}

pub fn conversation(id: i32) -> Conversation {
    Conversation {
        id,
        partner_id: 100 + id,
        partner_name: format!("Partner {}", id),
        last_message: String::new(),
        last_message_time: day(id as i64),
        unread_count: 0,
        is_online: false,
    }
}

/// A message in `conversation_id` sent `minutes` after `base_time()`.
pub fn message(id: i32, conversation_id: i32, is_own: bool, minutes: i64) -> Message {
    Message {
        id,
        conversation_id,
        sender_id: if is_own {
            "current_user".to_string()
        } else {
            format!("partner_{}", conversation_id)
        },
        text: format!("Message {}", id),
        timestamp: base_time() + Duration::minutes(minutes),
        is_own,
        read: is_own,
    }
}

pub fn wallet(available_balance: f64) -> Wallet {
    Wallet {
        available_balance,
        pending_balance: 0.0,
        total_earned: available_balance,
        total_paid_out: 0.0,
    }
}

pub fn transaction(id: i32, kind: TransactionType, amount: f64) -> WalletTransaction {
    WalletTransaction {
        id,
        kind,
        amount,
        description: format!("Transaction {}", id),
        campaign_name: String::new(),
        status: TransactionStatus::Completed,
        timestamp: day(id as i64),
    }
}

pub fn settings(tier: SubscriptionTier, used_slots: u32) -> Settings {
    Settings {
        full_name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        phone: String::new(),
        business_name: String::new(),
        bio: String::new(),
        profile_image: None,
        email_notifications: true,
        push_notifications: false,
        campaign_updates: true,
        show_activity_status: true,
        subscription_tier: tier,
        used_slots,
        total_slots: tier.slot_limit(),
        next_billing_date: None,
        social_accounts: SocialAccounts::default(),
    }
}

pub fn analytics() -> AnalyticsBase {
    AnalyticsBase {
        total_revenue: 1000.0,
        total_earnings: 400.0,
        active_campaigns: 8,
        completed_campaigns: 20,
        total_views: 10_000,
        total_engagement: 2_000,
        conversion_rate: 3.5,
        success_rate: 80.0,
        top_products: vec![TopProduct {
            name: "Product 1".to_string(),
            revenue: 500.0,
            campaigns: 3,
        }],
        top_influencers: vec![TopInfluencer {
            name: "Influencer 1".to_string(),
            followers: "120K".to_string(),
            engagement: 4.5,
            campaigns: 2,
        }],
    }
}
