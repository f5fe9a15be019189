//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer; no business rules live here.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use super::dto::{CreateMessageParams, HealthResponse, MessageDto};
use super::error::AppError;
use super::state::AppState;
use crate::db::services;
use crate::models::Message;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn to_dto(message: Message) -> Result<MessageDto, AppError> {
    let id = message
        .id
        .ok_or_else(|| AppError::Internal("repository returned a message without an id".into()))?;

    Ok(MessageDto {
        id: id.value(),
        description: message.description,
    })
}

/// GET /health
///
/// Verify the service is running and the store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        database: db_status,
    }))
}

/// POST /api/message?description=...
///
/// Store a message and return it with its generated id. A missing
/// `description` parameter is a 400; everything else, including an empty
/// value, is stored verbatim.
pub async fn create_message(
    State(state): State<AppState>,
    params: Result<Query<CreateMessageParams>, QueryRejection>,
) -> HandlerResult<MessageDto> {
    let Query(params) = params
        .map_err(|_| AppError::BadRequest("required query parameter: description".to_string()))?;

    let stored = services::create_message(state.repository.as_ref(), params.description).await?;

    Ok(Json(to_dto(stored)?))
}

/// GET /api/message
///
/// List every stored message. Always 200, an empty array when the store
/// holds nothing.
pub async fn list_messages(State(state): State<AppState>) -> HandlerResult<Vec<MessageDto>> {
    let messages = services::list_messages(state.repository.as_ref()).await?;

    let dtos = messages
        .into_iter()
        .map(to_dto)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(dtos))
}
