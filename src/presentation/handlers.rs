// HTTP request handlers
use crate::application::layout_editor::{EditAction, EditorView};
use crate::domain::assistant::{self, Reply};
use crate::domain::dashboard::Dashboard;
use crate::domain::layout::Configuration;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize)]
pub struct EditorStatus {
    pub open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<EditorView>,
}

#[derive(Serialize)]
pub struct EditOutcome {
    pub applied: bool,
    pub editor: EditorView,
}

#[derive(Deserialize)]
pub struct AssistantMessage {
    pub message: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the dashboard from the committed layout
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Result<Json<Dashboard>, ApiError> {
    // Render from a snapshot so the session lock is not held across repository calls
    let config = state.session.lock().await.live().clone();
    let dashboard = state.dashboard_service.render(&config).await?;
    Ok(Json(dashboard))
}

/// Committed layout configuration
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<Configuration> {
    Json(state.session.lock().await.live().clone())
}

pub async fn get_editor(State(state): State<Arc<AppState>>) -> Json<EditorStatus> {
    let session = state.session.lock().await;
    let editor = session.editor().map(|e| e.view());
    Json(EditorStatus {
        open: editor.is_some(),
        editor,
    })
}

/// Open the customizer with a fresh copy of the committed layout
pub async fn open_editor(State(state): State<Arc<AppState>>) -> Json<EditorView> {
    let mut session = state.session.lock().await;
    Json(session.open().view())
}

pub async fn apply_edit(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EditAction>, JsonRejection>,
) -> Result<Json<EditOutcome>, ApiError> {
    // Unknown ids and malformed actions surface as 400 with a JSON error body
    let Json(action) = payload?;
    let mut session = state.session.lock().await;
    let (change, editor) = session.apply(action)?;
    Ok(Json(EditOutcome {
        applied: change.applied(),
        editor: editor.view(),
    }))
}

pub async fn confirm_editor(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Configuration>, ApiError> {
    let mut session = state.session.lock().await;
    let committed = session.confirm()?;
    Ok(Json(committed.clone()))
}

pub async fn cancel_editor(State(state): State<Arc<AppState>>) -> Json<Configuration> {
    let mut session = state.session.lock().await;
    Json(session.cancel().clone())
}

/// Keyword-matched answer from the dashboard assistant
pub async fn ask_assistant(
    payload: Result<Json<AssistantMessage>, JsonRejection>,
) -> Result<Json<Reply>, ApiError> {
    let Json(request) = payload?;
    let reply = assistant::respond(&request.message)
        .ok_or_else(|| ApiError::InvalidRequest("message must not be empty".to_string()))?;
    tracing::debug!(topic = ?reply.topic, "assistant replied");
    Ok(Json(reply))
}

pub async fn assistant_greeting() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "greeting": assistant::GREETING }))
}
