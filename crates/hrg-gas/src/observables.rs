use hrg_core::{ErrorInfo, GasError, ThermalDensities};
use serde::{Deserialize, Serialize};

use crate::collection::SpeciesCollection;
use crate::matrix::PairMatrix;
use crate::resolver::DecayProbabilities;

/// Aggregate densities summed over every species except the photon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasTotals {
    /// Total primordial number density.
    pub number: f64,
    /// Total energy density.
    pub energy: f64,
    /// Total entropy density.
    pub entropy: f64,
    /// Total pressure.
    pub pressure: f64,
}

/// Final-state observables over the stable subset, recomputed fully for each
/// grid point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasObservables {
    /// Stable single-species densities after all decays.
    pub rho1: Vec<f64>,
    /// Independent-emission baseline: outer product of the single densities.
    pub rho1_rho1: PairMatrix,
    /// Pairwise density from the ordered double sum over all primordial
    /// species pairs.
    pub rho2: PairMatrix,
    /// Same-event correlated pairwise density: one decaying resonance
    /// producing both tagged stable particles.
    pub rho2_corr: PairMatrix,
    /// Second-order density cumulant `rho2 - rho1 x rho1`.
    pub c2: PairMatrix,
    /// Aggregate primordial totals.
    pub totals: GasTotals,
}

/// Turns resolved probabilities plus per-species thermal densities into the
/// stable-subset observables.
///
/// `densities` and `probabilities` are indexed by arena index and must match
/// the collection length.
pub fn compute_observables(
    collection: &SpeciesCollection,
    densities: &[ThermalDensities],
    probabilities: &[DecayProbabilities],
) -> Result<GasObservables, GasError> {
    check_length(collection, "densities", densities.len())?;
    check_length(collection, "probabilities", probabilities.len())?;

    let stable_count = collection.stable_count();
    let mut rho1 = vec![0.0; stable_count];
    let mut rho2_corr = PairMatrix::zeros(stable_count);
    let mut totals = GasTotals {
        number: 0.0,
        energy: 0.0,
        entropy: 0.0,
        pressure: 0.0,
    };

    for (idx, record) in collection.all().iter().enumerate() {
        let density = &densities[idx];
        let probs = &probabilities[idx];
        for m in 0..stable_count {
            rho1[m] += density.number * probs.single()[m];
        }
        rho2_corr.add_scaled(probs.pair(), density.number);
        if !record.is_photon() {
            totals.number += density.number;
            totals.energy += density.energy;
            totals.entropy += density.entropy;
            totals.pressure += density.pressure;
        }
    }

    // The ordered double sum over all primordial species pairs factorizes
    // exactly into the product of the two single-tag sums, so rho2 and the
    // independent-emission baseline are built from the same outer product and
    // stay symmetric to the last bit.
    let rho1_rho1 = PairMatrix::outer(&rho1, &rho1);
    let rho2 = PairMatrix::outer(&rho1, &rho1);
    let c2 = rho2.difference(&rho1_rho1);

    Ok(GasObservables {
        rho1,
        rho1_rho1,
        rho2,
        rho2_corr,
        c2,
        totals,
    })
}

fn check_length(
    collection: &SpeciesCollection,
    what: &str,
    actual: usize,
) -> Result<(), GasError> {
    if actual != collection.len() {
        return Err(GasError::Argument(
            ErrorInfo::new("length-mismatch", "per-species array does not match the collection")
                .with_context("array", what)
                .with_context("expected", collection.len())
                .with_context("actual", actual),
        ));
    }
    Ok(())
}
