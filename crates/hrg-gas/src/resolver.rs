use hrg_core::{ErrorInfo, GasError};
use serde::{Deserialize, Serialize};

use crate::collection::SpeciesCollection;
use crate::matrix::PairMatrix;

/// Propagated decay probabilities of one species over the stable subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayProbabilities {
    /// Probability of yielding each stable species through any number of
    /// decay generations.
    single: Vec<f64>,
    /// Joint probability that a single decay event yields each ordered pair
    /// of stable species.
    pair: PairMatrix,
}

impl DecayProbabilities {
    /// Creates zeroed probability arrays sized to the stable subset.
    pub fn new(stable_count: usize) -> Result<Self, GasError> {
        if stable_count == 0 {
            return Err(GasError::Argument(ErrorInfo::new(
                "non-positive-stable-count",
                "decay probability arrays require a positive stable count",
            )));
        }
        Ok(Self {
            single: vec![0.0; stable_count],
            pair: PairMatrix::zeros(stable_count),
        })
    }

    /// Returns the single-species probability vector.
    pub fn single(&self) -> &[f64] {
        &self.single
    }

    /// Returns the pair probability matrix.
    pub fn pair(&self) -> &PairMatrix {
        &self.pair
    }
}

/// Computes every species' decay probability vector and pair matrix in one
/// forward pass over the collection's topological order.
///
/// Stable species are the base case: probability one into their own stable
/// index, zero elsewhere. For decaying species each mode contributes three
/// terms: the branching-weighted single probabilities of every child, the
/// cross-child product for every ordered pair of distinct children, and the
/// branching-weighted pair matrices of the children themselves (both tagged
/// descendants emerging from further sub-decay of one product).
pub fn resolve_decay_probabilities(
    collection: &SpeciesCollection,
) -> Result<Vec<DecayProbabilities>, GasError> {
    let stable_count = collection.stable_count();
    let mut resolved: Vec<Option<DecayProbabilities>> = vec![None; collection.len()];

    for &idx in collection.topological_order() {
        let record = collection.species(idx);
        let mut probabilities = DecayProbabilities::new(stable_count)?;

        if let Some(own) = collection.stable_index_of(idx) {
            // Stable-for-this-run species terminate the recursion; their own
            // decay modes, if any, are not processed.
            probabilities.single[own] = 1.0;
        } else {
            for mode in record.modes() {
                let ratio = mode.branching_ratio();
                let children = mode.children();
                for &child in children {
                    let child_probs = resolved[child].as_ref().ok_or_else(|| {
                        ordering_violation(collection, idx, child)
                    })?;
                    for m in 0..stable_count {
                        probabilities.single[m] += ratio * child_probs.single[m];
                    }
                    probabilities.pair.add_scaled(child_probs.pair(), ratio);
                }
                // Both orderings of a child pair are folded into one addend
                // per matrix entry, which keeps the pair matrix symmetric to
                // the last bit.
                for (a, &first) in children.iter().enumerate() {
                    for &second in children.iter().skip(a + 1) {
                        let first_probs = resolved[first]
                            .as_ref()
                            .ok_or_else(|| ordering_violation(collection, idx, first))?;
                        let second_probs = resolved[second]
                            .as_ref()
                            .ok_or_else(|| ordering_violation(collection, idx, second))?;
                        for m1 in 0..stable_count {
                            for m2 in 0..stable_count {
                                let forward =
                                    ratio * (first_probs.single[m1] * second_probs.single[m2]);
                                let backward =
                                    ratio * (second_probs.single[m1] * first_probs.single[m2]);
                                probabilities.pair.add(m1, m2, forward + backward);
                            }
                        }
                    }
                }
            }
        }

        resolved[idx] = Some(probabilities);
    }

    let mut out = Vec::with_capacity(collection.len());
    for (idx, entry) in resolved.into_iter().enumerate() {
        match entry {
            Some(probabilities) => out.push(probabilities),
            None => {
                return Err(GasError::Ordering(
                    ErrorInfo::new(
                        "unresolved-species",
                        "species missing from the topological order",
                    )
                    .with_context("species", collection.species(idx).pdg()),
                ))
            }
        }
    }
    Ok(out)
}

fn ordering_violation(collection: &SpeciesCollection, parent: usize, child: usize) -> GasError {
    GasError::Ordering(
        ErrorInfo::new(
            "child-not-resolved",
            "decay child processed after its parent",
        )
        .with_context("species", collection.species(parent).pdg())
        .with_context("child", collection.species(child).pdg()),
    )
}
