use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::completion::conversation,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // Missing, non-string and unparseable bodies all land here.
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected chat payload");
        AppError::InvalidMessage
    })?;

    if payload.message.is_empty() {
        return Err(AppError::InvalidMessage);
    }

    let messages = conversation(&payload.message);
    let reply = state.completion.complete(&messages).await?;

    Ok(Json(ChatResponse { reply }))
}

pub async fn ping_handler() -> &'static str {
    "✅ RentalBoost Chatbot Server is running"
}
