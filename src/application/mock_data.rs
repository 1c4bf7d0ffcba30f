// Mock data generator - stand-in results when the results resource is unavailable
use crate::domain::simulation::SimulationResult;
use rand::Rng;

const SLICES: [&str; 3] = ["urllc", "iot", "data"];
const PARAMS: [&str; 2] = ["resource_reservation", "bandwidth_guaranteed"];
const PARAM_VALUES: [f64; 3] = [0.1, 0.2, 0.3];

/// 18 sweep records with random metrics followed by the two validation records
pub fn generate_mock_results<R: Rng>(rng: &mut R) -> Vec<SimulationResult> {
    let mut results = Vec::with_capacity(SLICES.len() * PARAMS.len() * PARAM_VALUES.len() + 2);

    for slice in SLICES {
        for param in PARAMS {
            for value in PARAM_VALUES {
                results.push(SimulationResult {
                    config_name: Some(format!("{}_{}_{}", slice, param, value)),
                    slice_name: Some(slice.to_string()),
                    param_name: Some(param.to_string()),
                    param_value: Some(value),
                    overall_latency: Some(0.4 + rng.gen_range(0.0..0.1)),
                    sla_violations: Some(rng.gen_range(0.0..0.02)),
                    block_ratio: Some(rng.gen_range(0.0..0.05)),
                    handover_ratio: Some(rng.gen_range(0.0..0.1)),
                });
            }
        }
    }

    results.extend(validation_results());
    results
}

/// Baseline and optimized validation runs with fixed metrics
fn validation_results() -> [SimulationResult; 2] {
    [
        validation_record("validation_base", "baseline", 0.479, 0.02, 0.03),
        validation_record("validation_optimized", "optimized", 0.475, 0.018, 0.028),
    ]
}

fn validation_record(
    config_name: &str,
    param_name: &str,
    overall_latency: f64,
    block_ratio: f64,
    handover_ratio: f64,
) -> SimulationResult {
    SimulationResult {
        config_name: Some(config_name.to_string()),
        slice_name: Some("all".to_string()),
        param_name: Some(param_name.to_string()),
        param_value: Some(0.0),
        overall_latency: Some(overall_latency),
        sla_violations: Some(0.0),
        block_ratio: Some(block_ratio),
        handover_ratio: Some(handover_ratio),
    }
}
