#![deny(missing_docs)]

//! Shared identifiers, thermal-density records and error types for the HRG engine.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
mod types;

pub use errors::{ErrorInfo, GasError};
pub use types::ThermalDensities;

/// Monte-Carlo particle numbering scheme identifier for a hadron species.
///
/// Antiparticles carry the negated code of their particle partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PdgCode(i32);

impl PdgCode {
    /// Creates a code from its raw integer representation.
    pub fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the code.
    pub fn as_raw(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for PdgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pdg({})", self.0)
    }
}

/// Code assigned to the photon, which is excluded from hadronic final-state
/// bookkeeping even though it is massless and stable.
pub const PHOTON: PdgCode = PdgCode(22);
