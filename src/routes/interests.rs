use actix_web::{web, HttpResponse};

use crate::errors::ApiResult;
use crate::models::Interest;
use crate::routes::AppState;
use crate::services::CacheKey;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/interests", web::get().to(get_interests));
}

/// GET /api/interests - public lookup list for the interests picker
///
/// The list changes rarely, so it is served through the two-tier cache with
/// the configured TTL.
async fn get_interests(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let cache_key = CacheKey::interests();
    if let Ok(cached) = state.cache.get::<Vec<Interest>>(&cache_key).await {
        return Ok(HttpResponse::Ok().json(cached));
    }

    let interests = state.store.list_interests().await?;

    if let Err(e) = state.cache.set(&cache_key, &interests).await {
        tracing::warn!("failed to cache interests list: {}", e);
    }

    Ok(HttpResponse::Ok().json(interests))
}
