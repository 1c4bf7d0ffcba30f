// Dashboard service - Loads both resources and binds them into a view document
use crate::application::binder::initialize_dashboard;
use crate::application::mock_data::generate_mock_results;
use crate::application::resource_source::{fetch_json, ResourceError, ResourceSource};
use crate::application::table_populator::populate_simulation_results;
use crate::domain::document::{ViewDocument, GENERATION_DATE};
use crate::domain::simulation::SimulationResult;
use crate::domain::summary::DashboardSummary;
use crate::infrastructure::config::{SourceSettings, ViewSettings};
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsOrigin {
    Resource,
    Generated,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadedDashboard {
    pub document: ViewDocument,
    pub summary: Option<DashboardSummary>,
    pub results: Vec<SimulationResult>,
    pub results_origin: ResultsOrigin,
    /// Times the results table was populated during the load
    pub populate_calls: usize,
}

enum LoadEvent {
    Summary(Result<DashboardSummary, ResourceError>),
    Results(Result<Vec<serde_json::Value>, ResourceError>),
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn ResourceSource>,
    source_settings: SourceSettings,
    view_settings: ViewSettings,
}

impl DashboardService {
    pub fn new(
        source: Arc<dyn ResourceSource>,
        source_settings: SourceSettings,
        view_settings: ViewSettings,
    ) -> Self {
        Self {
            source,
            source_settings,
            view_settings,
        }
    }

    pub fn view_settings(&self) -> &ViewSettings {
        &self.view_settings
    }

    /// Whether `name` is one of the two resources the dashboard reads
    pub fn is_known_resource(&self, name: &str) -> bool {
        name == self.source_settings.summary_resource || name == self.source_settings.results_resource
    }

    /// Raw bytes of a known resource
    pub async fn fetch_resource(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        if !self.is_known_resource(name) {
            return Err(ResourceError::NotFound(name.to_string()));
        }
        self.source.fetch(name).await
    }

    /// Fetch both resources concurrently and apply each one as it arrives
    pub async fn load_dashboard(&self) -> LoadedDashboard {
        let mut document = ViewDocument::dashboard_template(&self.view_settings.slices);
        if let Some(element) = document.element_mut(GENERATION_DATE) {
            element.set_text(chrono::Local::now().format("%Y-%m-%d %H:%M").to_string());
        }

        let source = self.source.as_ref();
        let summary_name = self.source_settings.summary_resource.as_str();
        let results_name = self.source_settings.results_resource.as_str();

        let mut pending: FuturesUnordered<BoxFuture<'_, LoadEvent>> = FuturesUnordered::new();
        pending.push(
            async move { LoadEvent::Summary(fetch_json(source, summary_name).await) }.boxed(),
        );
        pending.push(
            async move { LoadEvent::Results(fetch_json(source, results_name).await) }.boxed(),
        );

        let mut summary = None;
        let mut results = Vec::new();
        let mut results_origin = ResultsOrigin::Resource;
        let mut populate_calls = 0;

        while let Some(event) = pending.next().await {
            match event {
                LoadEvent::Summary(Ok(data)) => {
                    initialize_dashboard(&mut document, &data);
                    summary = Some(data);
                }
                LoadEvent::Summary(Err(e)) => {
                    tracing::error!("Error loading dashboard data: {}", e);
                }
                LoadEvent::Results(outcome) => {
                    results = match outcome {
                        Ok(records) => decode_results(&records),
                        Err(e) => {
                            tracing::error!("Error loading simulation results: {}", e);
                            tracing::info!("Creating mock simulation data for demonstration");
                            results_origin = ResultsOrigin::Generated;
                            fallback_results()
                        }
                    };
                    populate_simulation_results(&mut document, &results);
                    populate_calls += 1;
                }
            }
        }

        LoadedDashboard {
            document,
            summary,
            results,
            results_origin,
            populate_calls,
        }
    }
}

fn decode_results(records: &[serde_json::Value]) -> Vec<SimulationResult> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let (result, rejected) = SimulationResult::from_value(record);
            if !rejected.is_empty() {
                tracing::warn!(
                    "Simulation result {} has mistyped fields: {}",
                    i + 1,
                    rejected.join(", ")
                );
            }
            result
        })
        .collect()
}

fn fallback_results() -> Vec<SimulationResult> {
    generate_mock_results(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::resource_source::testing::StaticSource;
    use crate::domain::document::{OVERALL_LATENCY_IMPROVEMENT, SIMULATION_RESULTS_TABLE};

    const SUMMARY: &str = r#"{
        "overall_latency_improvement": 0.8,
        "resource_utilization_improvement": 12.5,
        "slice_latencies": {"urllc": {"base": 0.479, "optimized": 0.475}}
    }"#;

    const RESULTS: &str = r#"[
        {"config_name": "urllc_resource_reservation_0.1", "slice_name": "urllc", "overall_latency": 0.393},
        {"slice_name": "iot"},
        {}
    ]"#;

    fn service(source: StaticSource) -> DashboardService {
        DashboardService::new(
            Arc::new(source),
            SourceSettings::default(),
            ViewSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_load_binds_summary_and_results() {
        let source = StaticSource::default()
            .with("dashboard_data.json", SUMMARY)
            .with("simulation_results.json", RESULTS);

        let loaded = service(source).load_dashboard().await;

        assert!(loaded.summary.is_some());
        assert_eq!(loaded.results_origin, ResultsOrigin::Resource);
        assert_eq!(loaded.populate_calls, 1);
        assert_eq!(loaded.document.text(OVERALL_LATENCY_IMPROVEMENT), Some("0.8"));
        assert_eq!(loaded.document.text("urllc-improvement"), Some("0.8"));

        let rows = loaded.document.rows(SIMULATION_RESULTS_TABLE).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].cells[0], "Simulation 2");
        assert_eq!(rows[2].cells[1], "All");
    }

    #[tokio::test]
    async fn test_missing_results_fall_back_to_generated_data() {
        let source = StaticSource::default().with("dashboard_data.json", SUMMARY);

        let loaded = service(source).load_dashboard().await;

        assert_eq!(loaded.results_origin, ResultsOrigin::Generated);
        assert_eq!(loaded.populate_calls, 1);
        assert_eq!(loaded.results.len(), 20);
        let rows = loaded.document.rows(SIMULATION_RESULTS_TABLE).unwrap();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[18].cells[0], "validation_base");
        assert_eq!(rows[19].cells[0], "validation_optimized");
    }

    #[tokio::test]
    async fn test_malformed_results_fall_back_to_generated_data() {
        let source = StaticSource::default()
            .with("dashboard_data.json", SUMMARY)
            .with("simulation_results.json", r#"{"not": "an array"}"#);

        let loaded = service(source).load_dashboard().await;

        assert_eq!(loaded.results_origin, ResultsOrigin::Generated);
        assert_eq!(loaded.populate_calls, 1);
    }

    #[tokio::test]
    async fn test_mistyped_record_keeps_the_rest() {
        let source = StaticSource::default()
            .with("dashboard_data.json", SUMMARY)
            .with(
                "simulation_results.json",
                r#"[{"config_name": "kept", "overall_latency": 0.393}, {"config_name": 5, "overall_latency": "fast"}]"#,
            );

        let loaded = service(source).load_dashboard().await;

        assert_eq!(loaded.results_origin, ResultsOrigin::Resource);
        let rows = loaded.document.rows(SIMULATION_RESULTS_TABLE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[0], "kept");
        assert_eq!(rows[0].cells[4], "0.393");
        assert_eq!(rows[1].cells[0], "5");
        assert_eq!(rows[1].cells[4], "N/A");
    }

    #[tokio::test]
    async fn test_summary_failure_does_not_affect_results() {
        let source = StaticSource::default().with("simulation_results.json", RESULTS);

        let loaded = service(source).load_dashboard().await;

        assert!(loaded.summary.is_none());
        assert_eq!(loaded.document.text(OVERALL_LATENCY_IMPROVEMENT), Some("0.0"));
        assert_eq!(loaded.results_origin, ResultsOrigin::Resource);
        assert_eq!(loaded.document.rows(SIMULATION_RESULTS_TABLE).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_each_resource_fetched_once() {
        let source = Arc::new(
            StaticSource::default()
                .with("dashboard_data.json", SUMMARY)
                .with("simulation_results.json", RESULTS),
        );
        let service = DashboardService::new(
            source.clone(),
            SourceSettings::default(),
            ViewSettings::default(),
        );

        service.load_dashboard().await;

        let mut requests = source.requests.lock().unwrap().clone();
        requests.sort();
        assert_eq!(requests, vec!["dashboard_data.json", "simulation_results.json"]);
    }

    #[tokio::test]
    async fn test_fetch_resource_rejects_unknown_names() {
        let source = StaticSource::default().with("secrets.json", "{}");
        let err = service(source).fetch_resource("secrets.json").await.unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
    }
}
