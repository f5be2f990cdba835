use std::collections::HashSet;
use uuid::Uuid;

use crate::models::Profile;

/// Everything the discovery feed must never show a given viewer: their own
/// profile, anyone they have a swipe edge with, and anyone they have a block
/// relation with.
///
/// The store query already applies the same exclusions; this set re-applies
/// them over the overfetched page so a stale read can never leak a profile
/// the viewer has already acted on.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    viewer: Uuid,
    swiped: HashSet<Uuid>,
    blocked: HashSet<Uuid>,
}

impl ExclusionSet {
    pub fn new(viewer: Uuid) -> Self {
        Self {
            viewer,
            swiped: HashSet::new(),
            blocked: HashSet::new(),
        }
    }

    pub fn with_swiped(mut self, ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.swiped.extend(ids);
        self
    }

    pub fn with_blocked(mut self, ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.blocked.extend(ids);
        self
    }

    /// Whether a candidate profile must be excluded from the viewer's feed.
    #[inline]
    pub fn excludes(&self, candidate: &Profile) -> bool {
        candidate.id == self.viewer
            || !candidate.is_active
            || self.swiped.contains(&candidate.id)
            || self.blocked.contains(&candidate.id)
    }
}

/// Filter an overfetched candidate page down to at most `limit` visible
/// profiles.
///
/// No ordering is imposed beyond what the store returned; repeated calls may
/// repeat or skip profiles as the underlying data changes.
pub fn filter_candidates(
    candidates: Vec<Profile>,
    exclusions: &ExclusionSet,
    limit: usize,
) -> Vec<Profile> {
    let mut visible: Vec<Profile> = candidates
        .into_iter()
        .filter(|profile| !exclusions.excludes(profile))
        .collect();

    visible.truncate(limit);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileType;

    fn create_profile(id: Uuid) -> Profile {
        Profile {
            id,
            user_id: id.to_string(),
            display_name: "Candidate".to_string(),
            age: 27,
            location: None,
            bio: None,
            photo_urls: vec![],
            interests: vec![],
            is_verified: false,
            is_premium: false,
            is_active: true,
            profile_type: ProfileType::Single,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_viewer_never_sees_self() {
        let viewer = Uuid::new_v4();
        let exclusions = ExclusionSet::new(viewer);

        let result = filter_candidates(vec![create_profile(viewer)], &exclusions, 20);
        assert!(result.is_empty());
    }

    #[test]
    fn test_swiped_and_blocked_are_excluded() {
        let viewer = Uuid::new_v4();
        let swiped = Uuid::new_v4();
        let blocked = Uuid::new_v4();
        let fresh = Uuid::new_v4();

        let exclusions = ExclusionSet::new(viewer)
            .with_swiped([swiped])
            .with_blocked([blocked]);

        let candidates = vec![
            create_profile(swiped),
            create_profile(blocked),
            create_profile(fresh),
        ];

        let result = filter_candidates(candidates, &exclusions, 20);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, fresh);
    }

    #[test]
    fn test_inactive_profiles_are_excluded() {
        let viewer = Uuid::new_v4();
        let mut inactive = create_profile(Uuid::new_v4());
        inactive.is_active = false;

        let result = filter_candidates(vec![inactive], &ExclusionSet::new(viewer), 20);
        assert!(result.is_empty());
    }

    #[test]
    fn test_respects_limit() {
        let viewer = Uuid::new_v4();
        let candidates: Vec<Profile> = (0..50).map(|_| create_profile(Uuid::new_v4())).collect();

        let result = filter_candidates(candidates, &ExclusionSet::new(viewer), 20);
        assert_eq!(result.len(), 20);
    }
}
