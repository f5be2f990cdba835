use uuid::Uuid;

use crate::models::SwipeAction;

/// Order the two sides of a pairing so the same two profiles always produce
/// the same (a, b) tuple regardless of who swiped first.
///
/// Match rows are stored in this normalized form; combined with a unique
/// constraint on the pair it makes match creation idempotent.
#[inline]
pub fn normalize_pair(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Decide whether a swipe completes a mutual like.
///
/// `reverse` is the action the target previously recorded toward the swiper,
/// if any. Only like-meets-like is a match; a pass never matches, and a like
/// against a prior pass stays one-sided.
#[inline]
pub fn is_mutual_like(action: SwipeAction, reverse: Option<SwipeAction>) -> bool {
    matches!((action, reverse), (SwipeAction::Like, Some(SwipeAction::Like)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_order_independent() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert_eq!(normalize_pair(a, b), normalize_pair(b, a));
    }

    #[test]
    fn test_pair_is_ordered() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let (first, second) = normalize_pair(a, b);
        assert!(first <= second);
    }

    #[test]
    fn test_like_after_like_matches() {
        assert!(is_mutual_like(SwipeAction::Like, Some(SwipeAction::Like)));
    }

    #[test]
    fn test_first_like_does_not_match() {
        assert!(!is_mutual_like(SwipeAction::Like, None));
    }

    #[test]
    fn test_pass_never_matches() {
        assert!(!is_mutual_like(SwipeAction::Pass, Some(SwipeAction::Like)));
        assert!(!is_mutual_like(SwipeAction::Pass, None));
    }

    #[test]
    fn test_like_against_prior_pass_does_not_match() {
        assert!(!is_mutual_like(SwipeAction::Like, Some(SwipeAction::Pass)));
    }
}
