#![deny(missing_docs)]

//! Grid sweep driver for the HRG engine.
//!
//! Iterates a (T, muB, muS) grid, evaluates per-species thermal integrals
//! with a statistical hadron-gas model, and aggregates stable-subset
//! observables per grid point with per-point failure isolation.

/// Modified Bessel functions of the second kind used by the thermal model.
pub mod bessel;
/// YAML sweep configuration schema and defaults.
pub mod config;
/// Grid enumeration and parallel sweep execution.
pub mod grid;
/// Deterministic report, manifest and CSV export.
pub mod report;
/// Closed-form statistical thermal model.
pub mod thermal;

pub use config::{AxisSpec, OutputConfig, SweepConfig};
pub use grid::{enumerate_grid, run_sweep, PointOutcome, PointStatus};
pub use report::{observables_hash, SweepManifest, SweepReport, SCHEMA_VERSION};
pub use thermal::StatisticalModel;
