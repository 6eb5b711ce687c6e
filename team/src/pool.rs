//! Filtering a run's pairs down to team building candidates

use serde::{Deserialize, Serialize};

use crate::constraints::{ConstraintSet, SearchLimits};
use crate::pair::Pair;
use crate::search::{search, Combination};
use crate::ConfigurationError;

/// Pairs eligible for team building, in the caller's order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairPool {
    pairs: Vec<Pair>,
}

impl PairPool {
    /// Keep living pairs, and drop pairs with a custom member unless the
    /// constraints allow them.
    pub fn eligible<'a>(
        pairs: impl IntoIterator<Item = &'a Pair>,
        constraints: &ConstraintSet,
    ) -> Self {
        let pairs: Vec<Pair> = pairs
            .into_iter()
            .filter(|p| p.is_alive())
            .filter(|p| constraints.allow_custom || !p.has_custom())
            .cloned()
            .collect();
        tracing::debug!(
            eligible = pairs.len(),
            allow_custom = constraints.allow_custom,
            "built pair pool"
        );
        Self { pairs }
    }

    pub fn as_slice(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    /// Enumerate legal teams from this pool
    pub fn search(
        &self,
        constraints: &ConstraintSet,
        limits: &SearchLimits,
    ) -> Result<Vec<Combination>, ConfigurationError> {
        search(&self.pairs, constraints, limits)
    }
}

impl From<Vec<Pair>> for PairPool {
    fn from(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }
}

/// Alive/dead tally for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub alive: usize,
    pub dead: usize,
}

impl RunSummary {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a Pair>) -> Self {
        pairs.into_iter().fold(Self::default(), |mut summary, pair| {
            summary.total += 1;
            if pair.is_alive() {
                summary.alive += 1;
            } else {
                summary.dead += 1;
            }
            summary
        })
    }
}
