use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::ProfileType;

/// Request to create the caller's profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, max = 50))]
    #[serde(alias = "display_name", rename = "displayName")]
    pub display_name: String,
    #[validate(range(min = 18, max = 120))]
    pub age: i32,
    #[serde(default)]
    pub location: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(alias = "photo_urls", rename = "photoUrls", default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(alias = "profile_type", rename = "profileType", default)]
    pub profile_type: ProfileType,
}

/// Partial update of the caller's profile. Absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50))]
    #[serde(alias = "display_name", rename = "displayName", default)]
    pub display_name: Option<String>,
    #[validate(range(min = 18, max = 120))]
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub location: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(alias = "photo_urls", rename = "photoUrls", default)]
    pub photo_urls: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(alias = "profile_type", rename = "profileType", default)]
    pub profile_type: Option<ProfileType>,
    #[serde(alias = "is_active", rename = "isActive", default)]
    pub is_active: Option<bool>,
}

/// Request to record a swipe decision
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwipeRequest {
    #[serde(alias = "target_id", rename = "targetId")]
    pub target_id: Uuid,
    /// "like" or "pass"
    #[validate(length(min = 1))]
    pub action: String,
}

/// Request to send a message in a match conversation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[serde(alias = "match_id", rename = "matchId")]
    pub match_id: Uuid,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    /// "text" or "image"; defaults to text
    #[serde(default)]
    pub kind: Option<String>,
}

/// Request to block a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRequest {
    #[serde(alias = "blocked_id", rename = "blockedId")]
    pub blocked_id: Uuid,
}

/// Request to report a profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReportRequest {
    #[serde(alias = "reported_id", rename = "reportedId")]
    pub reported_id: Uuid,
    #[validate(length(min = 1, max = 1000))]
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_profile_validation() {
        let req = CreateProfileRequest {
            display_name: "Robin".to_string(),
            age: 29,
            location: Some("Berlin".to_string()),
            bio: None,
            photo_urls: vec![],
            interests: vec!["hiking".to_string()],
            profile_type: ProfileType::Single,
        };
        assert!(req.validate().is_ok());

        let underage = CreateProfileRequest { age: 17, ..req.clone() };
        assert!(underage.validate().is_err());

        let unnamed = CreateProfileRequest { display_name: String::new(), ..req };
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_swipe_request_accepts_snake_case_alias() {
        let json = r#"{"target_id":"7f1c6a3e-98f2-4d52-b9cd-0f2b55c8a111","action":"like"}"#;
        let req: SwipeRequest = serde_json::from_str(json).expect("alias should deserialize");
        assert_eq!(req.action, "like");
    }
}
