// Simulation result domain model and its table projection
use super::summary::format_fixed;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MISSING_VALUE: &str = "N/A";
pub const ALL_SLICES: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slice_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_latency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_violations: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handover_ratio: Option<f64>,
}

impl SimulationResult {
    /// Decode one record field by field. Fields of the wrong type are dropped and
    /// named in the returned list instead of failing the whole record.
    pub fn from_value(value: &Value) -> (Self, Vec<&'static str>) {
        let mut rejected = Vec::new();
        let Some(fields) = value.as_object() else {
            return (Self::default(), rejected);
        };

        let mut text = |name: &'static str| match fields.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            Some(_) => {
                rejected.push(name);
                None
            }
        };
        let config_name = text("config_name");
        let slice_name = text("slice_name");
        let param_name = text("param_name");

        let mut number = |name: &'static str| match fields.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(_) => {
                rejected.push(name);
                None
            }
        };
        let result = Self {
            config_name,
            slice_name,
            param_name,
            param_value: number("param_value"),
            overall_latency: number("overall_latency"),
            sla_violations: number("sla_violations"),
            block_ratio: number("block_ratio"),
            handover_ratio: number("handover_ratio"),
        };

        (result, rejected)
    }

    /// Project the record into a display row; `index` is its position in the result set
    pub fn to_row(&self, index: usize) -> TableRow {
        let cells = vec![
            non_empty(&self.config_name)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Simulation {}", index + 1)),
            non_empty(&self.slice_name).unwrap_or(ALL_SLICES).to_string(),
            non_empty(&self.param_name).unwrap_or(MISSING_VALUE).to_string(),
            format_optional(self.param_value, 2),
            format_optional(self.overall_latency, 3),
            format_optional(self.sla_violations, 3),
            format_optional(self.block_ratio, 3),
            format_optional(self.handover_ratio, 3),
        ];

        let class = non_empty(&self.slice_name).map(|s| format!("slice-{}", s.to_lowercase()));

        TableRow { cells, class }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub class: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format_fixed(v, decimals))
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}
