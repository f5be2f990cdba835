use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{Profile, Swipe, SwipeAction};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// Response for the swipe endpoint: the recorded swipe plus whether it
/// completed a mutual like.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeResponse {
    pub id: Uuid,
    #[serde(rename = "swiperId")]
    pub swiper_id: Uuid,
    #[serde(rename = "swipedId")]
    pub swiped_id: Uuid,
    pub action: SwipeAction,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "isMatch")]
    pub is_match: bool,
}

impl SwipeResponse {
    pub fn from_swipe(swipe: Swipe, is_match: bool) -> Self {
        Self {
            id: swipe.id,
            swiper_id: swipe.swiper_id,
            swiped_id: swipe.swiped_id,
            action: swipe.action,
            created_at: swipe.created_at,
            is_match,
        }
    }
}

/// A match joined with both participants' profiles, newest first in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWithProfiles {
    pub id: Uuid,
    #[serde(rename = "matchedAt")]
    pub matched_at: chrono::DateTime<chrono::Utc>,
    pub profiles: Vec<Profile>,
}

/// Response for the discovery feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryResponse {
    pub profiles: Vec<Profile>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_response_wire_shape() {
        let swipe = Swipe {
            id: Uuid::new_v4(),
            swiper_id: Uuid::new_v4(),
            swiped_id: Uuid::new_v4(),
            action: SwipeAction::Like,
            created_at: chrono::Utc::now(),
        };

        let json = serde_json::to_value(SwipeResponse::from_swipe(swipe, true))
            .expect("serializes");

        assert_eq!(json["isMatch"], true);
        assert_eq!(json["action"], "like");
        assert!(json.get("swiperId").is_some());
    }
}
