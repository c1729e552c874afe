use hrg_core::{ErrorInfo, GasError};
use hrg_gas::{
    compute_observables, resolve_decay_probabilities, DecayProbabilities, GasObservables,
    GridPoint, SpeciesCollection, ThermalModel,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::SweepConfig;
use crate::report::SweepReport;

/// Completion state of one grid point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum PointStatus {
    /// The point evaluated cleanly.
    Complete,
    /// Thermal evaluation or aggregation failed; the rest of the sweep is
    /// unaffected.
    Failed {
        /// Stringified error describing the failure.
        error: String,
    },
}

/// Result of one grid point, reported in grid order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOutcome {
    /// Position of the point in the enumeration order.
    pub index: usize,
    /// The evaluated grid point.
    pub point: GridPoint,
    /// Completion state.
    pub status: PointStatus,
    /// Observables for completed points.
    pub observables: Option<GasObservables>,
}

/// Enumerates the sweep grid deterministically: temperature outermost, then
/// the baryon potential, then the strangeness potential.
pub fn enumerate_grid(config: &SweepConfig) -> Vec<GridPoint> {
    let mut points = Vec::new();
    for &temperature in &config.temperature.values() {
        for &mu_baryon in &config.mu_baryon.values() {
            for &mu_strange in &config.mu_strange.values() {
                points.push(GridPoint {
                    temperature,
                    mu_baryon,
                    mu_strange,
                });
            }
        }
    }
    points
}

/// Runs a full grid sweep.
///
/// Decay probabilities depend only on the collection topology, so the
/// resolver runs once and its output is shared read-only by the grid-point
/// workers. A failing point is recorded and skipped; it never aborts the
/// sweep.
pub fn run_sweep<M>(
    collection: &SpeciesCollection,
    model: &M,
    config: &SweepConfig,
) -> Result<SweepReport, GasError>
where
    M: ThermalModel + Sync,
{
    config.validate()?;
    let probabilities = resolve_decay_probabilities(collection)?;
    let points = enumerate_grid(config);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.concurrency.max(1))
        .build()
        .map_err(|err| GasError::Serde(ErrorInfo::new("thread_pool", err.to_string())))?;

    let mut outcomes: Vec<PointOutcome> = pool.install(|| {
        points
            .par_iter()
            .enumerate()
            .map(|(index, point)| evaluate_point(collection, model, &probabilities, index, point))
            .collect()
    });
    outcomes.sort_by_key(|outcome| outcome.index);

    SweepReport::new(collection, config, outcomes)
}

fn evaluate_point<M: ThermalModel>(
    collection: &SpeciesCollection,
    model: &M,
    probabilities: &[DecayProbabilities],
    index: usize,
    point: &GridPoint,
) -> PointOutcome {
    match try_evaluate(collection, model, probabilities, point) {
        Ok(observables) => PointOutcome {
            index,
            point: *point,
            status: PointStatus::Complete,
            observables: Some(observables),
        },
        Err(err) => PointOutcome {
            index,
            point: *point,
            status: PointStatus::Failed {
                error: err.to_string(),
            },
            observables: None,
        },
    }
}

fn try_evaluate<M: ThermalModel>(
    collection: &SpeciesCollection,
    model: &M,
    probabilities: &[DecayProbabilities],
    point: &GridPoint,
) -> Result<GasObservables, GasError> {
    let mut densities = Vec::with_capacity(collection.len());
    for record in collection.all() {
        let density = model.compute_densities(record, point)?;
        if !density.is_finite() {
            return Err(GasError::Thermal(
                ErrorInfo::new("non-finite-density", "thermal model returned a non-finite density")
                    .with_context("species", record.pdg())
                    .with_context("temperature", point.temperature),
            ));
        }
        densities.push(density);
    }
    compute_observables(collection, &densities, probabilities)
}
