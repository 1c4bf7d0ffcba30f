// Summary domain model - KPI and per-slice latency figures
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceLatency {
    pub base: f64,
    pub optimized: f64,
}

impl SliceLatency {
    pub fn new(base: f64, optimized: f64) -> Self {
        Self { base, optimized }
    }

    /// Relative latency reduction in percent, `None` when the base is not positive
    pub fn improvement_percent(&self) -> Option<f64> {
        if self.base > 0.0 {
            Some((self.base - self.optimized) / self.base * 100.0)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub overall_latency_improvement: f64,
    pub resource_utilization_improvement: f64,
    pub slice_latencies: BTreeMap<String, SliceLatency>,
}

/// Format a value with a fixed number of decimals, rounding exact midpoints away from zero
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimals as u32);
            rounded.to_string()
        }
        // beyond Decimal's range there are no fractional digits left to round
        None => format!("{:.*}", decimals, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improvement_percent() {
        let latency = SliceLatency::new(0.479, 0.475);
        let improvement = latency.improvement_percent().unwrap();
        assert!((improvement - 0.835_073_068_893_528).abs() < 1e-9);
        assert_eq!(format_fixed(improvement, 1), "0.8");

        let regression = SliceLatency::new(0.4, 0.5);
        assert_eq!(format_fixed(regression.improvement_percent().unwrap(), 1), "-25.0");
    }

    #[test]
    fn test_improvement_rounds_ties_up() {
        let latency = SliceLatency::new(400.0, 399.0);
        assert_eq!(format_fixed(latency.improvement_percent().unwrap(), 1), "0.3");
    }

    #[test]
    fn test_format_fixed_midpoints() {
        assert_eq!(format_fixed(0.25, 1), "0.3");
        assert_eq!(format_fixed(12.25, 1), "12.3");
        assert_eq!(format_fixed(0.0625, 3), "0.063");
        assert_eq!(format_fixed(-0.25, 1), "-0.3");
        assert_eq!(format_fixed(0.5, 3), "0.500");
        assert_eq!(format_fixed(12.0, 1), "12.0");
        assert_eq!(format_fixed(0.479, 3), "0.479");
    }

    #[test]
    fn test_format_fixed_non_finite() {
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
        assert_eq!(format_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    #[test]
    fn test_improvement_requires_positive_base() {
        assert_eq!(SliceLatency::new(0.0, 0.3).improvement_percent(), None);
        assert_eq!(SliceLatency::new(-1.0, 0.3).improvement_percent(), None);
    }

    #[test]
    fn test_deserialize_summary() {
        let json = r#"{
            "overall_latency_improvement": 0.8,
            "resource_utilization_improvement": 12.5,
            "slice_latencies": {
                "urllc": {"base": 0.479, "optimized": 0.475},
                "iot": {"base": 0.5, "optimized": 0.4}
            }
        }"#;

        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.slice_latencies.len(), 2);
        assert_eq!(summary.slice_latencies["iot"], SliceLatency::new(0.5, 0.4));
    }

    #[test]
    fn test_missing_kpi_is_rejected() {
        let json = r#"{"resource_utilization_improvement": 1.0, "slice_latencies": {}}"#;
        assert!(serde_json::from_str::<DashboardSummary>(json).is_err());
    }
}
