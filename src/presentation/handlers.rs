// HTTP request handlers
use crate::application::dashboard_service::{LoadedDashboard, ResultsOrigin};
use crate::application::resource_source::ResourceError;
use crate::application::ui_actions::{apply_action, ActionOutcome, ModalView, UiAction};
use crate::domain::document::ViewDocument;
use crate::domain::simulation::TableRow;
use crate::infrastructure::html_renderer::render_dashboard;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct DashboardView {
    pub overall_latency_improvement: Option<String>,
    pub resource_utilization_improvement: Option<String>,
    pub results_origin: ResultsOrigin,
    pub rows: Vec<TableRow>,
    pub generated_at: Option<String>,
}

#[derive(Serialize)]
pub struct ActionResponse {
    pub outcome: ActionOutcome,
    pub modal: ModalView,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Rendered dashboard page
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let loaded = state.dashboard_service.load_dashboard().await;
    Html(render_dashboard(
        &loaded.document,
        state.dashboard_service.view_settings(),
    ))
}

/// Bound values as JSON
pub async fn dashboard_data(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    let loaded = state.dashboard_service.load_dashboard().await;
    Json(dashboard_view(&loaded))
}

/// Pass a configured resource through unchanged
pub async fn raw_resource(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.fetch_resource(&name).await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(ResourceError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Error fetching resource {}: {}", name, e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// Apply a UI action to the page template; no resources are fetched
pub async fn apply_ui_action(
    State(state): State<Arc<AppState>>,
    Json(action): Json<UiAction>,
) -> Json<ActionResponse> {
    let mut doc = ViewDocument::dashboard_template(&state.dashboard_service.view_settings().slices);
    let outcome = apply_action(&mut doc, action);
    Json(ActionResponse {
        outcome,
        modal: ModalView::from_document(&doc),
    })
}

fn dashboard_view(loaded: &LoadedDashboard) -> DashboardView {
    use crate::domain::document::{
        GENERATION_DATE, OVERALL_LATENCY_IMPROVEMENT, RESOURCE_UTILIZATION_IMPROVEMENT,
        SIMULATION_RESULTS_TABLE,
    };

    let doc = &loaded.document;
    DashboardView {
        overall_latency_improvement: doc.text(OVERALL_LATENCY_IMPROVEMENT).map(str::to_string),
        resource_utilization_improvement: doc
            .text(RESOURCE_UTILIZATION_IMPROVEMENT)
            .map(str::to_string),
        results_origin: loaded.results_origin,
        rows: doc
            .rows(SIMULATION_RESULTS_TABLE)
            .map(<[TableRow]>::to_vec)
            .unwrap_or_default(),
        generated_at: doc.text(GENERATION_DATE).map(str::to_string),
    }
}
