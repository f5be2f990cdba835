use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{ApiError, ApiResult};
use crate::models::{BlockRequest, ReportRequest};
use crate::routes::AppState;
use crate::services::AuthUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/block", web::post().to(post_block))
        .route("/block/{block_id}", web::delete().to(delete_block))
        .route("/report", web::post().to(post_report));
}

/// POST /api/block - block a profile
async fn post_block(
    user: AuthUser,
    state: web::Data<AppState>,
    req: web::Json<BlockRequest>,
) -> ApiResult<HttpResponse> {
    let blocker = state.store.get_profile_by_subject(&user.subject).await?;

    if blocker.id == req.blocked_id {
        return Err(ApiError::Validation(
            "cannot block your own profile".to_string(),
        ));
    }

    let blocked = state
        .store
        .find_profile(req.blocked_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("blocked profile not found".to_string()))?;

    let block = state.store.insert_block(blocker.id, blocked.id).await?;

    tracing::info!("profile {} blocked {}", blocker.id, blocked.id);

    Ok(HttpResponse::Created().json(block))
}

/// DELETE /api/block/{id} - remove one of the caller's block edges
///
/// Removal has no retroactive effect; discovery recomputes exclusions on the
/// next fetch.
async fn delete_block(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let block_id = path.into_inner();
    let blocker = state.store.get_profile_by_subject(&user.subject).await?;

    let deleted = state.store.delete_block(block_id, blocker.id).await?;

    if !deleted {
        return Err(ApiError::NotFound("block not found".to_string()));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/report - file a report against a profile
async fn post_report(
    user: AuthUser,
    state: web::Data<AppState>,
    req: web::Json<ReportRequest>,
) -> ApiResult<HttpResponse> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let reporter = state.store.get_profile_by_subject(&user.subject).await?;

    if reporter.id == req.reported_id {
        return Err(ApiError::Validation(
            "cannot report your own profile".to_string(),
        ));
    }

    let reported = state
        .store
        .find_profile(req.reported_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("reported profile not found".to_string()))?;

    let report = state
        .store
        .insert_report(reporter.id, reported.id, &req.reason)
        .await?;

    tracing::info!("profile {} reported {}", reporter.id, reported.id);

    Ok(HttpResponse::Created().json(report))
}
