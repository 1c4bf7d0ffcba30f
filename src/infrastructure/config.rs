use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "SLICE_DASHBOARD";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub view: ViewSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    File,
    Http,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    pub base_url: Option<String>,
    #[serde(default = "default_summary_resource")]
    pub summary_resource: String,
    #[serde(default = "default_results_resource")]
    pub results_resource: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            data_dir: default_data_dir(),
            base_url: None,
            summary_resource: default_summary_resource(),
            results_resource: default_results_resource(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_slices")]
    pub slices: Vec<String>,
    #[serde(default = "default_images")]
    pub images: Vec<ImageSettings>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            slices: default_slices(),
            images: default_images(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ImageSettings {
    pub title: String,
    pub src: String,
    #[serde(default)]
    pub section: GallerySection,
}

/// Tab a visualization is shown under, in page order
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GallerySection {
    #[default]
    Summary,
    Latency,
    Params,
    Resource,
    Simulation,
    Comparison,
}

impl GallerySection {
    pub const ALL: [GallerySection; 6] = [
        GallerySection::Summary,
        GallerySection::Latency,
        GallerySection::Params,
        GallerySection::Resource,
        GallerySection::Simulation,
        GallerySection::Comparison,
    ];

    pub fn id(self) -> &'static str {
        match self {
            GallerySection::Summary => "summary",
            GallerySection::Latency => "latency",
            GallerySection::Params => "params",
            GallerySection::Resource => "resource",
            GallerySection::Simulation => "simulation",
            GallerySection::Comparison => "comparison",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GallerySection::Summary => "Summary",
            GallerySection::Latency => "Latency Analysis",
            GallerySection::Params => "Parameter Impact",
            GallerySection::Resource => "Resource Allocation",
            GallerySection::Simulation => "Simulation Results",
            GallerySection::Comparison => "Simulation Comparison",
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_summary_resource() -> String {
    "dashboard_data.json".to_string()
}

fn default_results_resource() -> String {
    "simulation_results.json".to_string()
}

fn default_title() -> String {
    "5G Network Slicing Optimization Dashboard".to_string()
}

fn default_slices() -> Vec<String> {
    vec!["urllc".to_string(), "iot".to_string(), "data".to_string()]
}

fn default_images() -> Vec<ImageSettings> {
    use GallerySection::*;

    [
        (Summary, "Optimization Summary", "optimization_summary"),
        (Latency, "Latency Comparison", "slice_latency_comparison"),
        (Params, "URLLC Parameter Importance", "urllc_parameter_importance"),
        (Params, "IoT Parameter Importance", "iot_parameter_importance"),
        (Params, "Data Parameter Importance", "data_parameter_importance"),
        (Resource, "Slice Requirements", "slice_requirements"),
        (Resource, "Approach Comparison", "approach_comparison"),
        (Simulation, "URLLC Resource Reservation Impact", "urllc_resource_reservation_detailed"),
        (Simulation, "URLLC Bandwidth Guaranteed Impact", "urllc_bandwidth_guaranteed_detailed"),
        (Simulation, "URLLC Parameter Interactions", "urllc_parameter_heatmap"),
        (Simulation, "IoT Resource Reservation Impact", "iot_resource_reservation_detailed"),
        (Simulation, "IoT Bandwidth Guaranteed Impact", "iot_bandwidth_guaranteed_detailed"),
        (Simulation, "IoT Parameter Interactions", "iot_parameter_heatmap"),
        (Simulation, "Data Resource Reservation Impact", "data_resource_reservation_detailed"),
        (Simulation, "Data Bandwidth Guaranteed Impact", "data_bandwidth_guaranteed_detailed"),
        (Simulation, "Data Parameter Interactions", "data_parameter_heatmap"),
        (Comparison, "Simulation Latency Comparison", "sim_comparison_latency"),
        (Comparison, "Resource Reservation Impact Comparison", "cross_slice_resource_comparison"),
        (Comparison, "Bandwidth Guarantee Impact Comparison", "cross_slice_bandwidth_comparison"),
    ]
    .into_iter()
    .map(|(section, title, file)| ImageSettings {
        title: title.to_string(),
        src: format!("images/{}.png", file),
        section,
    })
    .collect()
}

/// Load configuration from an optional file plus `SLICE_DASHBOARD__*` variables
pub fn load_dashboard_config(path: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
