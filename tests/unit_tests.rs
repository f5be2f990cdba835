// Unit tests for the Amora API core logic

use uuid::Uuid;

use amora_api::core::{filter_candidates, is_mutual_like, normalize_pair, ExclusionSet};
use amora_api::models::{MessageKind, Profile, ProfileType, SwipeAction};

fn create_profile(id: Uuid) -> Profile {
    Profile {
        id,
        user_id: id.to_string(),
        display_name: "Candidate".to_string(),
        age: 27,
        location: Some("Berlin".to_string()),
        bio: None,
        photo_urls: vec![],
        interests: vec!["hiking".to_string()],
        is_verified: false,
        is_premium: false,
        is_active: true,
        profile_type: ProfileType::Single,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

#[test]
fn test_normalize_pair_is_symmetric() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    assert_eq!(normalize_pair(a, b), normalize_pair(b, a));
}

#[test]
fn test_normalize_pair_orders_sides() {
    for _ in 0..100 {
        let (first, second) = normalize_pair(Uuid::new_v4(), Uuid::new_v4());
        assert!(first <= second);
    }
}

#[test]
fn test_mutual_like_truth_table() {
    use SwipeAction::{Like, Pass};

    assert!(is_mutual_like(Like, Some(Like)));
    assert!(!is_mutual_like(Like, Some(Pass)));
    assert!(!is_mutual_like(Like, None));
    assert!(!is_mutual_like(Pass, Some(Like)));
    assert!(!is_mutual_like(Pass, Some(Pass)));
    assert!(!is_mutual_like(Pass, None));
}

#[test]
fn test_swipe_action_parse_is_case_insensitive() {
    assert_eq!(SwipeAction::parse("Like"), Some(SwipeAction::Like));
    assert_eq!(SwipeAction::parse("PASS"), Some(SwipeAction::Pass));
    assert_eq!(SwipeAction::parse(""), None);
    assert_eq!(SwipeAction::parse("superlike"), None);
}

#[test]
fn test_message_kind_parse() {
    assert_eq!(MessageKind::parse("text"), Some(MessageKind::Text));
    assert_eq!(MessageKind::parse("image"), Some(MessageKind::Image));
    assert_eq!(MessageKind::parse("gif"), None);
}

#[test]
fn test_feed_excludes_viewer() {
    let viewer = Uuid::new_v4();
    let exclusions = ExclusionSet::new(viewer);

    let result = filter_candidates(vec![create_profile(viewer)], &exclusions, 20);
    assert!(result.is_empty());
}

#[test]
fn test_feed_excludes_swiped_profiles() {
    let viewer = Uuid::new_v4();
    let swiped: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
    let fresh = Uuid::new_v4();

    let exclusions = ExclusionSet::new(viewer).with_swiped(swiped.clone());

    let mut candidates: Vec<Profile> = swiped.iter().map(|id| create_profile(*id)).collect();
    candidates.push(create_profile(fresh));

    let result = filter_candidates(candidates, &exclusions, 20);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, fresh);
}

#[test]
fn test_feed_excludes_blocked_profiles() {
    let viewer = Uuid::new_v4();
    let blocked = Uuid::new_v4();

    let exclusions = ExclusionSet::new(viewer).with_blocked([blocked]);

    let result = filter_candidates(vec![create_profile(blocked)], &exclusions, 20);
    assert!(result.is_empty());
}

#[test]
fn test_feed_excludes_inactive_profiles() {
    let viewer = Uuid::new_v4();
    let mut deactivated = create_profile(Uuid::new_v4());
    deactivated.is_active = false;

    let result = filter_candidates(vec![deactivated], &ExclusionSet::new(viewer), 20);
    assert!(result.is_empty());
}

#[test]
fn test_feed_respects_page_size() {
    let viewer = Uuid::new_v4();
    let candidates: Vec<Profile> = (0..100).map(|_| create_profile(Uuid::new_v4())).collect();

    let result = filter_candidates(candidates, &ExclusionSet::new(viewer), 20);
    assert_eq!(result.len(), 20);
}

#[test]
fn test_feed_keeps_store_order() {
    let viewer = Uuid::new_v4();
    let candidates: Vec<Profile> = (0..10).map(|_| create_profile(Uuid::new_v4())).collect();
    let expected: Vec<Uuid> = candidates.iter().map(|p| p.id).collect();

    let result = filter_candidates(candidates, &ExclusionSet::new(viewer), 20);
    let got: Vec<Uuid> = result.iter().map(|p| p.id).collect();

    assert_eq!(got, expected);
}
