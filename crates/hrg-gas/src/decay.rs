use hrg_core::PdgCode;
use serde::{Deserialize, Serialize};

/// Number of decay products a channel must carry.
///
/// The propagation pass only handles two- and three-body channels; anything
/// else is rejected when the collection is built.
pub const MIN_CHANNEL_ARITY: usize = 2;
/// Upper bound on the number of decay products per channel.
pub const MAX_CHANNEL_ARITY: usize = 3;

/// One decay channel as read from a particle list, daughters still unresolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayChannel {
    /// Fraction of decays proceeding through this channel, in (0, 1].
    pub branching_ratio: f64,
    /// Ordered daughter species codes.
    pub daughters: Vec<PdgCode>,
}

/// One decay channel with daughters resolved to arena indices.
///
/// Owned by its parent species; the children are shared, non-owning indices
/// into the collection arena the parent lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecayMode {
    /// Branching ratio stored as read from the channel.
    branching_ratio: OrderedRatio,
    /// Arena indices of the ordered daughter species.
    children: Vec<usize>,
}

impl DecayMode {
    pub(crate) fn new(branching_ratio: f64, children: Vec<usize>) -> Self {
        Self {
            branching_ratio: OrderedRatio(branching_ratio),
            children,
        }
    }

    /// Returns the branching ratio of the channel.
    pub fn branching_ratio(&self) -> f64 {
        self.branching_ratio.0
    }

    /// Returns the arena indices of the daughter species.
    pub fn children(&self) -> &[usize] {
        &self.children
    }
}

/// Branching ratio wrapper giving [`DecayMode`] a total equality.
///
/// Ratios are validated to be finite before a mode is constructed, so the
/// bitwise comparison is well defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
struct OrderedRatio(f64);

impl Eq for OrderedRatio {}
