// Binder - writes summary values into the view document
use crate::domain::document::{
    base_latency_id, improvement_id, optimized_latency_id, ViewDocument,
    OVERALL_LATENCY_IMPROVEMENT, RESOURCE_UTILIZATION_IMPROVEMENT,
};
use crate::domain::summary::{format_fixed, DashboardSummary};
use thiserror::Error;

pub const POSITIVE_CLASS: &str = "text-success";
pub const NEGATIVE_CLASS: &str = "text-danger";

#[derive(Debug, Error, PartialEq)]
pub enum BindError {
    #[error("element {0} not found")]
    MissingElement(String),
}

/// Bind the summary, logging instead of propagating a failed pass.
/// Updates applied before a failure stay in the document.
pub fn initialize_dashboard(doc: &mut ViewDocument, summary: &DashboardSummary) {
    match bind_summary(doc, summary) {
        Ok(()) => tracing::info!(
            "Dashboard initialized with {} slices",
            summary.slice_latencies.len()
        ),
        Err(e) => tracing::error!("Error initializing dashboard: {}", e),
    }
}

pub fn bind_summary(doc: &mut ViewDocument, summary: &DashboardSummary) -> Result<(), BindError> {
    set_required_text(
        doc,
        OVERALL_LATENCY_IMPROVEMENT,
        format_fixed(summary.overall_latency_improvement, 1),
    )?;
    set_required_text(
        doc,
        RESOURCE_UTILIZATION_IMPROVEMENT,
        format_fixed(summary.resource_utilization_improvement, 1),
    )?;

    for (slice, latencies) in &summary.slice_latencies {
        let base_id = base_latency_id(slice);
        let opt_id = optimized_latency_id(slice);

        if !(doc.contains(&base_id) && doc.contains(&opt_id)) {
            tracing::debug!("Skipping slice {} - latency elements not present", slice);
            continue;
        }

        if let Some(element) = doc.element_mut(&base_id) {
            element.set_text(format_fixed(latencies.base, 3));
        }
        if let Some(element) = doc.element_mut(&opt_id) {
            element.set_text(format_fixed(latencies.optimized, 3));
        }

        let (Some(element), Some(improvement)) = (
            doc.element_mut(&improvement_id(slice)),
            latencies.improvement_percent(),
        ) else {
            continue;
        };

        element.set_text(format_fixed(improvement, 1));
        if improvement > 0.0 {
            element.add_class(POSITIVE_CLASS);
        } else {
            element.add_class(NEGATIVE_CLASS);
        }
    }

    Ok(())
}

fn set_required_text(doc: &mut ViewDocument, id: &str, text: String) -> Result<(), BindError> {
    let element = doc
        .element_mut(id)
        .ok_or_else(|| BindError::MissingElement(id.to_string()))?;
    element.set_text(text);
    Ok(())
}
