use hrg_core::{ErrorInfo, GasError, ThermalDensities};
use serde::{Deserialize, Serialize};

use crate::species::SpeciesRecord;

/// One point of the (T, muB, muS) grid, in GeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    /// Temperature, strictly positive.
    pub temperature: f64,
    /// Baryon chemical potential.
    pub mu_baryon: f64,
    /// Strangeness chemical potential.
    pub mu_strange: f64,
}

impl GridPoint {
    /// Validates the grid point, rejecting non-positive or non-finite
    /// temperatures and non-finite potentials.
    pub fn validate(&self) -> Result<(), GasError> {
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(GasError::Argument(
                ErrorInfo::new("non-positive-temperature", "temperature must be positive")
                    .with_context("temperature", self.temperature),
            ));
        }
        if !self.mu_baryon.is_finite() || !self.mu_strange.is_finite() {
            return Err(GasError::Argument(
                ErrorInfo::new("non-finite-potential", "chemical potentials must be finite")
                    .with_context("mu_baryon", self.mu_baryon)
                    .with_context("mu_strange", self.mu_strange),
            ));
        }
        Ok(())
    }
}

/// Per-species thermal integral evaluation, supplied by a driver.
///
/// Implementations are deterministic functions of the species identity and
/// the grid point; the engine never caches across grid points.
pub trait ThermalModel {
    /// Computes the four equilibrium densities of `species` at `point`.
    fn compute_densities(
        &self,
        species: &SpeciesRecord,
        point: &GridPoint,
    ) -> Result<ThermalDensities, GasError>;
}
