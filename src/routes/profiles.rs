use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::errors::{ApiError, ApiResult};
use crate::models::{CreateProfileRequest, UpdateProfileRequest};
use crate::routes::AppState;
use crate::services::AuthUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(get_profile))
            .route(web::post().to(create_profile))
            .route(web::put().to(update_profile)),
    );
}

/// GET /api/profile - fetch the caller's profile
async fn get_profile(user: AuthUser, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let profile = state.store.get_profile_by_subject(&user.subject).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// POST /api/profile - create the caller's profile (409 if one exists)
async fn create_profile(
    user: AuthUser,
    state: web::Data<AppState>,
    req: web::Json<CreateProfileRequest>,
) -> ApiResult<HttpResponse> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let profile = state.store.create_profile(&user.subject, &req).await?;

    tracing::info!("profile created for subject {}", user.subject);

    Ok(HttpResponse::Created().json(profile))
}

/// PUT /api/profile - partial update of the caller's profile
async fn update_profile(
    user: AuthUser,
    state: web::Data<AppState>,
    req: web::Json<UpdateProfileRequest>,
) -> ApiResult<HttpResponse> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let profile = state.store.get_profile_by_subject(&user.subject).await?;
    let updated = state.store.update_profile(profile.id, &req).await?;

    Ok(HttpResponse::Ok().json(updated))
}
