use hrg_core::PdgCode;
use hrg_gas::{DecayChannel, QuantumStatistics, SpeciesInput};

/// Builds a species entry with neutral quantum numbers and unit mass.
pub fn species(pdg: i32, name: &str, stable: bool) -> SpeciesInput {
    SpeciesInput {
        pdg: PdgCode::from_raw(pdg),
        name: name.to_string(),
        mass: 1.0,
        degeneracy: 1.0,
        statistics: QuantumStatistics::Boltzmann,
        stable,
        baryon: 0,
        strangeness: 0,
        decays: Vec::new(),
    }
}

/// Adds a decay channel to a species entry.
pub fn with_decay(mut input: SpeciesInput, branching_ratio: f64, daughters: &[i32]) -> SpeciesInput {
    input.decays.push(DecayChannel {
        branching_ratio,
        daughters: daughters.iter().map(|&raw| PdgCode::from_raw(raw)).collect(),
    });
    input
}
