use hrg_core::{PdgCode, PHOTON};
use serde::{Deserialize, Serialize};

use crate::decay::{DecayChannel, DecayMode};

/// Quantum statistics obeyed by a species when thermal integrals are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantumStatistics {
    /// Bose-Einstein statistics (integer spin).
    BoseEinstein,
    /// Fermi-Dirac statistics (half-integer spin).
    FermiDirac,
    /// Classical Maxwell-Boltzmann limit.
    Boltzmann,
}

impl Default for QuantumStatistics {
    fn default() -> Self {
        QuantumStatistics::Boltzmann
    }
}

/// One species entry as read from a particle list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesInput {
    /// Monte-Carlo numbering scheme code, unique within the list.
    pub pdg: PdgCode,
    /// Human readable species name.
    pub name: String,
    /// Rest mass in GeV.
    pub mass: f64,
    /// Spin-isospin degeneracy factor.
    pub degeneracy: f64,
    /// Statistics used for the thermal integrals.
    #[serde(default)]
    pub statistics: QuantumStatistics,
    /// Database stability flag.
    #[serde(default)]
    pub stable: bool,
    /// Baryon number.
    #[serde(default)]
    pub baryon: i32,
    /// Strangeness.
    #[serde(default)]
    pub strangeness: i32,
    /// Decay channels with unresolved daughter codes.
    #[serde(default)]
    pub decays: Vec<DecayChannel>,
}

/// Immutable per-species record held by a [`crate::SpeciesCollection`].
///
/// Identity and decay topology only; per-grid-point densities and propagated
/// probabilities live in worker-owned arrays so the record can be shared
/// read-only across grid-point workers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pdg: PdgCode,
    name: String,
    mass: f64,
    degeneracy: f64,
    statistics: QuantumStatistics,
    stable: bool,
    baryon: i32,
    strangeness: i32,
    modes: Vec<DecayMode>,
}

impl SpeciesRecord {
    pub(crate) fn new(input: &SpeciesInput, modes: Vec<DecayMode>) -> Self {
        Self {
            pdg: input.pdg,
            name: input.name.clone(),
            mass: input.mass,
            degeneracy: input.degeneracy,
            statistics: input.statistics,
            stable: input.stable,
            baryon: input.baryon,
            strangeness: input.strangeness,
            modes,
        }
    }

    /// Returns the species code.
    pub fn pdg(&self) -> PdgCode {
        self.pdg
    }

    /// Returns the species name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rest mass in GeV.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Returns the degeneracy factor.
    pub fn degeneracy(&self) -> f64 {
        self.degeneracy
    }

    /// Returns the statistics used for thermal integrals.
    pub fn statistics(&self) -> QuantumStatistics {
        self.statistics
    }

    /// Returns the database stability flag.
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Returns the baryon number.
    pub fn baryon(&self) -> i32 {
        self.baryon
    }

    /// Returns the strangeness.
    pub fn strangeness(&self) -> i32 {
        self.strangeness
    }

    /// Returns the resolved decay modes.
    pub fn modes(&self) -> &[DecayMode] {
        &self.modes
    }

    /// Returns whether the species counts as a measurable final state.
    ///
    /// Photons are excluded even though massless and stable; they are not
    /// counted as hadronic final-state particles.
    pub fn is_stable_for_run(&self) -> bool {
        self.stable && self.pdg != PHOTON
    }

    /// Returns whether the species is the photon.
    pub fn is_photon(&self) -> bool {
        self.pdg == PHOTON
    }

    /// Effective chemical potential at the given baryon and strangeness
    /// potentials, in GeV.
    pub fn chemical_potential(&self, mu_baryon: f64, mu_strange: f64) -> f64 {
        f64::from(self.baryon) * mu_baryon + f64::from(self.strangeness) * mu_strange
    }
}
