use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::errors::{ApiError, ApiResult};
use crate::models::{SwipeAction, SwipeRequest, SwipeResponse};
use crate::routes::AppState;
use crate::services::{AuthUser, CacheKey};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/swipe", web::post().to(post_swipe));
}

/// POST /api/swipe - record a like/pass decision
///
/// The response carries `isMatch`; on a reciprocal like the match row is
/// created inside the same store transaction as the swipe insert.
async fn post_swipe(
    user: AuthUser,
    state: web::Data<AppState>,
    req: web::Json<SwipeRequest>,
) -> ApiResult<HttpResponse> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let action = SwipeAction::parse(&req.action).ok_or_else(|| {
        ApiError::Validation("action must be one of: like, pass".to_string())
    })?;

    let swiper = state.store.get_profile_by_subject(&user.subject).await?;

    if swiper.id == req.target_id {
        return Err(ApiError::Validation(
            "cannot swipe on your own profile".to_string(),
        ));
    }

    let target = state
        .store
        .find_profile(req.target_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("target profile not found".to_string()))?;

    let (swipe, is_match) = state.store.record_swipe(swiper.id, target.id, action).await?;

    if is_match {
        tracing::info!("new match between {} and {}", swiper.id, target.id);

        // Both participants' match lists changed.
        for profile_id in [swiper.id, target.id] {
            if let Err(e) = state.cache.delete(&CacheKey::matches(profile_id)).await {
                tracing::warn!("failed to invalidate match cache for {}: {}", profile_id, e);
            }
        }
    }

    Ok(HttpResponse::Ok().json(SwipeResponse::from_swipe(swipe, is_match)))
}
