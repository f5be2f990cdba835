use actix_web::{web, HttpResponse};

use crate::core::{filter_candidates, ExclusionSet};
use crate::errors::ApiResult;
use crate::models::DiscoveryResponse;
use crate::routes::AppState;
use crate::services::AuthUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/discovery", web::get().to(get_discovery));
}

/// GET /api/discovery - candidate feed for the caller
///
/// The store query already excludes swiped, blocked, and inactive profiles;
/// the page is overfetched and run through the in-process exclusion filter
/// before truncating to the public page size.
async fn get_discovery(user: AuthUser, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let profile = state.store.get_profile_by_subject(&user.subject).await?;

    let page_size = state.discovery.page_size;
    let fetch_limit = (page_size * state.discovery.overfetch_factor) as i64;

    let swiped = state.store.swiped_profile_ids(profile.id).await?;
    let blocked = state.store.blocked_profile_ids(profile.id).await?;

    let exclusions = ExclusionSet::new(profile.id)
        .with_swiped(swiped)
        .with_blocked(blocked);

    let candidates = state
        .store
        .discovery_candidates(profile.id, fetch_limit)
        .await?;

    let profiles = filter_candidates(candidates, &exclusions, page_size);

    tracing::debug!(
        "discovery for {}: {} visible candidates",
        profile.id,
        profiles.len()
    );

    let count = profiles.len();
    Ok(HttpResponse::Ok().json(DiscoveryResponse { profiles, count }))
}
