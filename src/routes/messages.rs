use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{ApiError, ApiResult};
use crate::models::{Match, MessageKind, Profile, SendMessageRequest};
use crate::routes::AppState;
use crate::services::AuthUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/messages", web::post().to(post_message))
        .route("/messages/{match_id}", web::get().to(get_messages))
        .route("/messages/{message_id}/read", web::put().to(mark_read));
}

/// Reject callers that are not a participant of the match.
fn verify_membership(m: &Match, profile: &Profile) -> ApiResult<()> {
    if !m.involves(profile.id) {
        return Err(ApiError::Forbidden(
            "you are not a participant of this match".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/messages/{matchId} - a match's messages, ascending by creation
/// time
async fn get_messages(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let match_id = path.into_inner();
    let profile = state.store.get_profile_by_subject(&user.subject).await?;

    let m = state
        .store
        .find_match(match_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("match not found".to_string()))?;

    verify_membership(&m, &profile)?;

    let messages = state.store.list_messages(match_id).await?;

    Ok(HttpResponse::Ok().json(messages))
}

/// POST /api/messages - append a message to a match
async fn post_message(
    user: AuthUser,
    state: web::Data<AppState>,
    req: web::Json<SendMessageRequest>,
) -> ApiResult<HttpResponse> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let kind = match req.kind.as_deref() {
        None => MessageKind::Text,
        Some(raw) => MessageKind::parse(raw).ok_or_else(|| {
            ApiError::Validation("kind must be one of: text, image".to_string())
        })?,
    };

    let profile = state.store.get_profile_by_subject(&user.subject).await?;

    let m = state
        .store
        .find_match(req.match_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("match not found".to_string()))?;

    verify_membership(&m, &profile)?;

    let message = state
        .store
        .insert_message(m.id, profile.id, &req.content, kind)
        .await?;

    Ok(HttpResponse::Created().json(message))
}

/// PUT /api/messages/{messageId}/read - mark a message as read
async fn mark_read(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let message_id = path.into_inner();
    let profile = state.store.get_profile_by_subject(&user.subject).await?;

    let message = state
        .store
        .find_message(message_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("message not found".to_string()))?;

    let m = state
        .store
        .find_match(message.match_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("match not found".to_string()))?;

    verify_membership(&m, &profile)?;

    let updated = state.store.mark_message_read(message_id).await?;

    Ok(HttpResponse::Ok().json(updated))
}
