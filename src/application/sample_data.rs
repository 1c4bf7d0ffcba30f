// Sample resources - default summary and sweep results for a fresh data directory
use crate::domain::simulation::SimulationResult;
use crate::domain::summary::{DashboardSummary, SliceLatency};

// (slice, param, value, latency, block ratio, handover ratio)
const SWEEP: [(&str, &str, f64, f64, f64, f64); 18] = [
    ("urllc", "resource_reservation", 0.1, 0.393, 0.021, 0.028),
    ("urllc", "resource_reservation", 0.2, 0.395, 0.023, 0.029),
    ("urllc", "resource_reservation", 0.3, 0.399, 0.026, 0.031),
    ("urllc", "bandwidth_guaranteed", 2.0, 0.391, 0.019, 0.026),
    ("urllc", "bandwidth_guaranteed", 5.0, 0.395, 0.022, 0.030),
    ("urllc", "bandwidth_guaranteed", 10.0, 0.401, 0.027, 0.033),
    ("iot", "resource_reservation", 0.05, 0.392, 0.018, 0.025),
    ("iot", "resource_reservation", 0.1, 0.397, 0.023, 0.030),
    ("iot", "resource_reservation", 0.2, 0.403, 0.028, 0.036),
    ("iot", "bandwidth_guaranteed", 5.0, 0.391, 0.017, 0.024),
    ("iot", "bandwidth_guaranteed", 10.0, 0.397, 0.022, 0.029),
    ("iot", "bandwidth_guaranteed", 15.0, 0.405, 0.029, 0.037),
    ("data", "resource_reservation", 0.0, 0.390, 0.016, 0.023),
    ("data", "resource_reservation", 0.1, 0.399, 0.025, 0.032),
    ("data", "resource_reservation", 0.2, 0.409, 0.031, 0.040),
    ("data", "bandwidth_guaranteed", 500.0, 0.389, 0.015, 0.022),
    ("data", "bandwidth_guaranteed", 1000.0, 0.395, 0.020, 0.028),
    ("data", "bandwidth_guaranteed", 1500.0, 0.403, 0.027, 0.034),
];

pub fn sample_summary() -> DashboardSummary {
    DashboardSummary {
        overall_latency_improvement: 0.8,
        resource_utilization_improvement: 12.5,
        slice_latencies: ["urllc", "iot", "data"]
            .into_iter()
            .map(|slice| (slice.to_string(), SliceLatency::new(0.479, 0.475)))
            .collect(),
    }
}

pub fn sample_results() -> Vec<SimulationResult> {
    SWEEP
        .iter()
        .map(|&(slice, param, value, latency, block, handover)| SimulationResult {
            config_name: Some(format!("{}_{}_{}", slice, param, value)),
            slice_name: Some(slice.to_string()),
            param_name: Some(param.to_string()),
            param_value: Some(value),
            overall_latency: Some(latency),
            sla_violations: Some(0.0),
            block_ratio: Some(block),
            handover_ratio: Some(handover),
        })
        .chain([
            validation_record("validation_base", "baseline", 0.479, 0.035, 0.045),
            validation_record("validation_optimized", "optimized", 0.475, 0.030, 0.040),
        ])
        .collect()
}

fn validation_record(
    config_name: &str,
    param_name: &str,
    latency: f64,
    block: f64,
    handover: f64,
) -> SimulationResult {
    SimulationResult {
        config_name: Some(config_name.to_string()),
        slice_name: Some("all".to_string()),
        param_name: Some(param_name.to_string()),
        param_value: Some(0.0),
        overall_latency: Some(latency),
        sla_violations: Some(0.0),
        block_ratio: Some(block),
        handover_ratio: Some(handover),
    }
}
