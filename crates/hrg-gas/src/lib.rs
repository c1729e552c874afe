#![deny(missing_docs)]

//! Hadron resonance gas decay-chain resolution and density/cumulant engine.
//!
//! The crate owns the species collection (an arena indexed by PDG code with a
//! precomputed topological order over the decay graph), the forward-pass decay
//! resolver, and the stable-subset observable aggregation. Thermal integrals
//! are consumed through the [`ThermalModel`] contract and supplied by a driver
//! crate.

/// Species collection arena, identifier resolution and topological ordering.
pub mod collection;
/// Decay channel and resolved decay mode records.
pub mod decay;
/// Dense square matrices addressed by stable-subset indices.
pub mod matrix;
/// Stable-subset observable aggregation.
pub mod observables;
/// Forward-pass decay probability resolution.
pub mod resolver;
/// Canonical serialization helpers shared by tests and drivers.
pub mod serde;
/// Species identity and thermal-state records.
pub mod species;
/// Grid point definition and the thermal integral contract.
pub mod thermal;

pub use collection::{GraphTolerances, SpeciesCollection};
pub use decay::{DecayChannel, DecayMode};
pub use matrix::PairMatrix;
pub use observables::{compute_observables, GasObservables, GasTotals};
pub use resolver::{resolve_decay_probabilities, DecayProbabilities};
pub use species::{QuantumStatistics, SpeciesInput, SpeciesRecord};
pub use thermal::{GridPoint, ThermalModel};
