// Table populator - renders simulation results into table rows
use crate::domain::document::{ViewDocument, SIMULATION_RESULTS_TABLE};
use crate::domain::simulation::SimulationResult;

/// Replace the rows of the results table, one per record in input order.
/// Returns the number of rows written, or `None` when the table is absent.
pub fn populate_simulation_results(
    doc: &mut ViewDocument,
    results: &[SimulationResult],
) -> Option<usize> {
    let Some(rows) = doc.rows_mut(SIMULATION_RESULTS_TABLE) else {
        tracing::error!("Simulation results table body element not found");
        return None;
    };

    rows.clear();
    rows.extend(results.iter().enumerate().map(|(i, r)| r.to_row(i)));

    tracing::info!("Simulation results populated with {} rows", rows.len());
    Some(rows.len())
}
