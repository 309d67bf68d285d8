use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: i32,
    pub partner_id: i32,
    pub partner_name: String,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    #[serde(default)]
    pub unread_count: u32,
    /// Simulated presence of the conversation partner.
    #[serde(default)]
    pub is_online: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i32,
    pub conversation_id: i32,
    pub sender_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub is_own: bool,
    #[serde(default)]
    pub read: bool,
}
