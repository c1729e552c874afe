use std::collections::{BTreeMap, BTreeSet};

use hrg_core::{ErrorInfo, GasError, PdgCode};
use serde::{Deserialize, Serialize};

use crate::decay::{DecayMode, MAX_CHANNEL_ARITY, MIN_CHANNEL_ARITY};
use crate::species::{SpeciesInput, SpeciesRecord};

/// Tolerances applied when validating the decay graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphTolerances {
    /// Permitted deviation of a species' branching-ratio sum from unity.
    #[serde(default = "default_branching_sum_tolerance")]
    pub branching_sum: f64,
}

fn default_branching_sum_tolerance() -> f64 {
    1.0e-3
}

impl Default for GraphTolerances {
    fn default() -> Self {
        Self {
            branching_sum: default_branching_sum_tolerance(),
        }
    }
}

/// Immutable species arena with resolved decay topology.
///
/// Holds every species of the gas, the PDG-code lookup map, the designated
/// stable subset (whose order defines all probability and observable
/// indices), and a topological order of the decay graph in which every decay
/// product precedes its parents. The collection never changes after
/// construction and may be shared read-only across grid-point workers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesCollection {
    species: Vec<SpeciesRecord>,
    index: BTreeMap<PdgCode, usize>,
    stable: Vec<usize>,
    stable_index: Vec<Option<usize>>,
    topological: Vec<usize>,
}

impl SpeciesCollection {
    /// Builds a collection, deriving the stable subset from the database
    /// stability flags in list order (photon excluded).
    pub fn build(inputs: &[SpeciesInput], tolerances: &GraphTolerances) -> Result<Self, GasError> {
        let index = build_index(inputs)?;
        let stable: Vec<usize> = inputs
            .iter()
            .enumerate()
            .filter(|(_, input)| input.stable && input.pdg != hrg_core::PHOTON)
            .map(|(idx, _)| idx)
            .collect();
        Self::finish(inputs, index, stable, tolerances)
    }

    /// Builds a collection with an explicitly supplied stable subset whose
    /// order defines all output indices.
    pub fn build_with_stable_subset(
        inputs: &[SpeciesInput],
        subset: &[PdgCode],
        tolerances: &GraphTolerances,
    ) -> Result<Self, GasError> {
        let index = build_index(inputs)?;
        let mut seen = BTreeSet::new();
        let mut stable = Vec::with_capacity(subset.len());
        for code in subset {
            if !seen.insert(*code) {
                return Err(GasError::Argument(
                    ErrorInfo::new("duplicate-stable-entry", "stable subset lists a species twice")
                        .with_context("species", code),
                ));
            }
            let idx = *index.get(code).ok_or_else(|| {
                GasError::Species(
                    ErrorInfo::new(
                        "unknown-stable-species",
                        "stable subset references a species absent from the collection",
                    )
                    .with_context("species", code),
                )
            })?;
            if code == &hrg_core::PHOTON {
                return Err(GasError::Argument(
                    ErrorInfo::new(
                        "photon-in-stable-subset",
                        "photons are excluded from stable bookkeeping",
                    )
                    .with_context("species", code),
                ));
            }
            if !inputs[idx].stable {
                return Err(GasError::Argument(
                    ErrorInfo::new(
                        "unstable-subset-entry",
                        "stable subset references a species not flagged stable",
                    )
                    .with_context("species", code),
                ));
            }
            stable.push(idx);
        }
        Self::finish(inputs, index, stable, tolerances)
    }

    fn finish(
        inputs: &[SpeciesInput],
        index: BTreeMap<PdgCode, usize>,
        stable: Vec<usize>,
        tolerances: &GraphTolerances,
    ) -> Result<Self, GasError> {
        if stable.is_empty() {
            return Err(GasError::Argument(ErrorInfo::new(
                "empty-stable-subset",
                "at least one non-photon stable species is required",
            )));
        }

        let mut species = Vec::with_capacity(inputs.len());
        for input in inputs {
            let modes = resolve_modes(input, &index, tolerances)?;
            species.push(SpeciesRecord::new(input, modes));
        }

        let mut stable_index = vec![None; species.len()];
        for (subset_idx, &arena_idx) in stable.iter().enumerate() {
            stable_index[arena_idx] = Some(subset_idx);
        }

        let topological = topological_order(&species)?;

        Ok(Self {
            species,
            index,
            stable,
            stable_index,
            topological,
        })
    }

    /// Returns the number of species in the collection.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Returns the species record at the given arena index.
    pub fn species(&self, idx: usize) -> &SpeciesRecord {
        &self.species[idx]
    }

    /// Returns all species records in arena order.
    pub fn all(&self) -> &[SpeciesRecord] {
        &self.species
    }

    /// Returns the arena index of a species code, if present.
    pub fn index_of(&self, code: PdgCode) -> Option<usize> {
        self.index.get(&code).copied()
    }

    /// Returns the number of species in the stable subset.
    pub fn stable_count(&self) -> usize {
        self.stable.len()
    }

    /// Returns the arena indices of the stable subset in subset order.
    pub fn stable_arena_indices(&self) -> &[usize] {
        &self.stable
    }

    /// Returns the species codes of the stable subset in subset order.
    pub fn stable_codes(&self) -> Vec<PdgCode> {
        self.stable
            .iter()
            .map(|&idx| self.species[idx].pdg())
            .collect()
    }

    /// Returns the stable-subset index of an arena index, if the species is
    /// part of the subset.
    pub fn stable_index_of(&self, arena_idx: usize) -> Option<usize> {
        self.stable_index[arena_idx]
    }

    /// Returns arena indices in an order where every decay product precedes
    /// its parents.
    pub fn topological_order(&self) -> &[usize] {
        &self.topological
    }
}

fn build_index(inputs: &[SpeciesInput]) -> Result<BTreeMap<PdgCode, usize>, GasError> {
    let mut index = BTreeMap::new();
    for (idx, input) in inputs.iter().enumerate() {
        if index.insert(input.pdg, idx).is_some() {
            return Err(GasError::Argument(
                ErrorInfo::new("duplicate-species", "species code appears twice in the list")
                    .with_context("species", input.pdg),
            ));
        }
    }
    Ok(index)
}

fn resolve_modes(
    input: &SpeciesInput,
    index: &BTreeMap<PdgCode, usize>,
    tolerances: &GraphTolerances,
) -> Result<Vec<DecayMode>, GasError> {
    if input.decays.is_empty() {
        return Ok(Vec::new());
    }

    let mut modes = Vec::with_capacity(input.decays.len());
    let mut branching_sum = 0.0;
    for channel in &input.decays {
        let ratio = channel.branching_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
            return Err(GasError::Graph(
                ErrorInfo::new("branching-ratio-range", "branching ratio must lie in (0, 1]")
                    .with_context("species", input.pdg)
                    .with_context("ratio", ratio),
            ));
        }
        let arity = channel.daughters.len();
        if !(MIN_CHANNEL_ARITY..=MAX_CHANNEL_ARITY).contains(&arity) {
            return Err(GasError::Graph(
                ErrorInfo::new("unsupported-arity", "decay channels carry two or three daughters")
                    .with_context("species", input.pdg)
                    .with_context("daughters", arity),
            ));
        }
        let mut children = Vec::with_capacity(arity);
        for daughter in &channel.daughters {
            let child = *index.get(daughter).ok_or_else(|| {
                GasError::Species(
                    ErrorInfo::new(
                        "unresolved-child",
                        "decay channel references a species absent from the collection",
                    )
                    .with_context("species", input.pdg)
                    .with_context("daughter", daughter)
                    .with_hint("add the daughter species to the particle list"),
                )
            })?;
            children.push(child);
        }
        branching_sum += ratio;
        modes.push(DecayMode::new(ratio, children));
    }

    if (branching_sum - 1.0).abs() > tolerances.branching_sum {
        return Err(GasError::Graph(
            ErrorInfo::new("branching-sum", "branching ratios do not sum to unity")
                .with_context("species", input.pdg)
                .with_context("sum", branching_sum)
                .with_context("tolerance", tolerances.branching_sum),
        ));
    }

    Ok(modes)
}

/// Kahn's algorithm over the child-reference graph.
///
/// Dependencies point from decay products to their parents, so the returned
/// order lists every child before any species that decays into it. Ties are
/// broken by ascending arena index to keep the order deterministic.
fn topological_order(species: &[SpeciesRecord]) -> Result<Vec<usize>, GasError> {
    let mut indegree = vec![0usize; species.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); species.len()];
    for (parent, record) in species.iter().enumerate() {
        for mode in record.modes() {
            for &child in mode.children() {
                dependents[child].push(parent);
                indegree[parent] += 1;
            }
        }
    }

    let mut ready: BTreeSet<usize> = indegree
        .iter()
        .enumerate()
        .filter(|(_, &degree)| degree == 0)
        .map(|(idx, _)| idx)
        .collect();
    let mut order = Vec::with_capacity(species.len());
    while let Some(&idx) = ready.iter().next() {
        ready.remove(&idx);
        order.push(idx);
        for &parent in &dependents[idx] {
            indegree[parent] -= 1;
            if indegree[parent] == 0 {
                ready.insert(parent);
            }
        }
    }

    // Any species left with unresolved dependencies sits on a cycle.
    if let Some(stuck) = indegree.iter().position(|&degree| degree > 0) {
        return Err(GasError::Graph(
            ErrorInfo::new("cycle-detected", "decay graph contains a cycle")
                .with_context("species", species[stuck].pdg()),
        ));
    }
    Ok(order)
}
