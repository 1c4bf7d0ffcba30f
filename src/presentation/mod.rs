// Presentation layer - HTTP routes
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    apply_ui_action, dashboard_data, dashboard_page, health_check, raw_resource,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(dashboard_page))
        .route("/data/:name", get(raw_resource))
        .route("/api/dashboard", get(dashboard_data))
        .route("/api/actions", post(apply_ui_action))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
