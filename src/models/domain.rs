use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's dating profile. One per account, soft-deactivated rather than
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub age: i32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "photoUrls", default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(rename = "isPremium", default)]
    pub is_premium: bool,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "profileType", default)]
    pub profile_type: ProfileType,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

fn default_true() -> bool { true }

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "profile_type", rename_all = "lowercase")]
pub enum ProfileType {
    #[default]
    Single,
    Couple,
}

/// A recorded like/pass decision from one profile toward another.
///
/// The (swiper, swiped) edge is unique and immutable; there is no undo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swipe {
    pub id: Uuid,
    #[serde(rename = "swiperId")]
    pub swiper_id: Uuid,
    #[serde(rename = "swipedId")]
    pub swiped_id: Uuid,
    pub action: SwipeAction,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "swipe_action", rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Pass,
}

impl SwipeAction {
    /// Parse the wire form ("like" / "pass"), case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "like" => Some(SwipeAction::Like),
            "pass" => Some(SwipeAction::Pass),
            _ => None,
        }
    }
}

/// A mutual-like pairing. Stored with the pair normalized so the same two
/// profiles can never produce two rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    #[serde(rename = "profileA")]
    pub profile_a: Uuid,
    #[serde(rename = "profileB")]
    pub profile_b: Uuid,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Match {
    /// Whether the given profile is one of the two participants.
    pub fn involves(&self, profile_id: Uuid) -> bool {
        self.profile_a == profile_id || self.profile_b == profile_id
    }
}

/// A message inside a match conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    #[serde(rename = "matchId")]
    pub match_id: Uuid,
    #[serde(rename = "senderId")]
    pub sender_id: Uuid,
    pub content: String,
    pub kind: MessageKind,
    #[serde(rename = "isRead")]
    pub is_read: bool,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "message_kind", rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Image,
}

impl MessageKind {
    /// Parse the wire form ("text" / "image"), case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "text" => Some(MessageKind::Text),
            "image" => Some(MessageKind::Image),
            _ => None,
        }
    }
}

/// A directed block edge. Removing it has no retroactive effect; discovery
/// simply stops excluding on the next fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: Uuid,
    #[serde(rename = "blockerId")]
    pub blocker_id: Uuid,
    #[serde(rename = "blockedId")]
    pub blocked_id: Uuid,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// An append-only abuse report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    #[serde(rename = "reporterId")]
    pub reporter_id: Uuid,
    #[serde(rename = "reportedId")]
    pub reported_id: Uuid,
    pub reason: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Public lookup entry for the interests picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interest {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_action_parse() {
        assert_eq!(SwipeAction::parse("like"), Some(SwipeAction::Like));
        assert_eq!(SwipeAction::parse("LIKE"), Some(SwipeAction::Like));
        assert_eq!(SwipeAction::parse("pass"), Some(SwipeAction::Pass));
        assert_eq!(SwipeAction::parse("superlike"), None);
    }

    #[test]
    fn test_message_kind_parse() {
        assert_eq!(MessageKind::parse("text"), Some(MessageKind::Text));
        assert_eq!(MessageKind::parse("Image"), Some(MessageKind::Image));
        assert_eq!(MessageKind::parse("video"), None);
    }

    #[test]
    fn test_match_involves() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let m = Match {
            id: Uuid::new_v4(),
            profile_a: a,
            profile_b: b,
            created_at: chrono::Utc::now(),
        };

        assert!(m.involves(a));
        assert!(m.involves(b));
        assert!(!m.involves(Uuid::new_v4()));
    }
}
