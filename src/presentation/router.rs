// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    apply_edit, ask_assistant, assistant_greeting, cancel_editor, confirm_editor, get_dashboard,
    get_editor, get_layout, health_check, open_editor,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/layout", get(get_layout))
        .route("/layout/editor", get(get_editor).post(open_editor))
        .route("/layout/editor/actions", post(apply_edit))
        .route("/layout/editor/confirm", post(confirm_editor))
        .route("/layout/editor/cancel", post(cancel_editor))
        .route("/assistant", get(assistant_greeting).post(ask_assistant))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
