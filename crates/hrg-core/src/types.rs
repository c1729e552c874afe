use serde::{Deserialize, Serialize};

/// Equilibrium densities of a single species at one (T, muB, muS) grid point.
///
/// All quantities are in natural units (GeV powers); the entropy density may
/// be negative for exotic chemical potentials, the other three are
/// non-negative for valid inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalDensities {
    /// Particle number density.
    pub number: f64,
    /// Energy density.
    pub energy: f64,
    /// Entropy density.
    pub entropy: f64,
    /// Partial pressure.
    pub pressure: f64,
}

impl ThermalDensities {
    /// Returns an all-zero record.
    pub fn zero() -> Self {
        Self {
            number: 0.0,
            energy: 0.0,
            entropy: 0.0,
            pressure: 0.0,
        }
    }

    /// Returns whether every stored density is a finite number.
    pub fn is_finite(&self) -> bool {
        self.number.is_finite()
            && self.energy.is_finite()
            && self.entropy.is_finite()
            && self.pressure.is_finite()
    }
}
