use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use fxdesk_core::chat::ChatServiceTrait;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{ChatPayload, ChatResponse, ErrorBody},
};

#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatPayload,
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, body = ErrorBody, description = "Message missing"),
        (status = 500, body = ErrorBody, description = "Agent failed")
    )
)]
pub(super) async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatPayload>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(payload) = payload?;
    let message = payload.message.unwrap_or_default();
    let reply = state.chat_service.reply(&message).await?;
    Ok(Json(ChatResponse::from(reply)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/chat", post(chat))
}
