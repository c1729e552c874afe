use std::f64::consts::PI;

use hrg_core::{ErrorInfo, GasError, ThermalDensities};
use hrg_gas::{GridPoint, QuantumStatistics, SpeciesRecord, ThermalModel};

use crate::bessel::{bessel_k1, bessel_k2};

/// Closed-form hadron-gas thermal integrals as a cluster expansion over
/// modified Bessel functions, in natural units (GeV).
///
/// Quantum statistics are summed to `expansion_order` terms; classical
/// Boltzmann species keep only the first term. Massless species use the
/// analytic limit of each term instead of the Bessel evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticalModel {
    expansion_order: usize,
}

impl StatisticalModel {
    /// Creates a model summing quantum-statistics corrections up to the
    /// given cluster order.
    pub fn new(expansion_order: usize) -> Result<Self, GasError> {
        if expansion_order == 0 {
            return Err(GasError::Argument(ErrorInfo::new(
                "non-positive-expansion-order",
                "the cluster expansion needs at least one term",
            )));
        }
        Ok(Self { expansion_order })
    }

    /// Returns the configured cluster expansion order.
    pub fn expansion_order(&self) -> usize {
        self.expansion_order
    }
}

impl Default for StatisticalModel {
    fn default() -> Self {
        Self {
            expansion_order: 10,
        }
    }
}

impl ThermalModel for StatisticalModel {
    fn compute_densities(
        &self,
        species: &SpeciesRecord,
        point: &GridPoint,
    ) -> Result<ThermalDensities, GasError> {
        point.validate()?;
        validate_species(species)?;

        let t = point.temperature;
        let mass = species.mass();
        let mu = species.chemical_potential(point.mu_baryon, point.mu_strange);
        let (eta, order) = match species.statistics() {
            QuantumStatistics::BoseEinstein => (1.0, self.expansion_order),
            QuantumStatistics::FermiDirac => (-1.0, self.expansion_order),
            QuantumStatistics::Boltzmann => (1.0, 1),
        };
        if species.statistics() == QuantumStatistics::BoseEinstein && mu > mass {
            return Err(GasError::Thermal(
                ErrorInfo::new(
                    "bose-condensation",
                    "bosonic chemical potential exceeds the species mass",
                )
                .with_context("species", species.pdg())
                .with_context("mu", mu)
                .with_context("mass", mass),
            ));
        }

        let prefactor = species.degeneracy() / (2.0 * PI * PI);
        let mut number = 0.0;
        let mut pressure = 0.0;
        let mut energy = 0.0;
        for k in 1..=order {
            let kf = k as f64;
            let sign = if k % 2 == 1 { 1.0 } else { eta };
            let fugacity = (kf * mu / t).exp();
            let (n_term, p_term, e_term) = if mass == 0.0 {
                // Analytic m -> 0 limit of each cluster term.
                let t3 = t * t * t;
                (
                    2.0 * t3 / (kf * kf * kf),
                    2.0 * t3 * t / (kf * kf * kf * kf),
                    6.0 * t3 * t / (kf * kf * kf * kf),
                )
            } else {
                let x = kf * mass / t;
                let k2 = bessel_k2(x);
                let k1 = bessel_k1(x);
                let m2t = mass * mass * t / kf;
                (
                    m2t * k2,
                    m2t * t / kf * k2,
                    m2t * (3.0 * t / kf * k2 + mass * k1),
                )
            };
            number += sign * fugacity * n_term;
            pressure += sign * fugacity * p_term;
            energy += sign * fugacity * e_term;
        }
        number *= prefactor;
        pressure *= prefactor;
        energy *= prefactor;

        let densities = ThermalDensities {
            number,
            energy,
            entropy: (energy + pressure - mu * number) / t,
            pressure,
        };
        if !densities.is_finite() {
            return Err(GasError::Thermal(
                ErrorInfo::new("non-finite-density", "thermal integral produced a non-finite value")
                    .with_context("species", species.pdg())
                    .with_context("temperature", t)
                    .with_context("mu", mu),
            ));
        }
        Ok(densities)
    }
}

fn validate_species(species: &SpeciesRecord) -> Result<(), GasError> {
    if !species.mass().is_finite() || species.mass() < 0.0 {
        return Err(GasError::Argument(
            ErrorInfo::new("invalid-mass", "species mass must be finite and non-negative")
                .with_context("species", species.pdg())
                .with_context("mass", species.mass()),
        ));
    }
    if !species.degeneracy().is_finite() || species.degeneracy() <= 0.0 {
        return Err(GasError::Argument(
            ErrorInfo::new("invalid-degeneracy", "species degeneracy must be positive")
                .with_context("species", species.pdg())
                .with_context("degeneracy", species.degeneracy()),
        ));
    }
    Ok(())
}
