//! Team building rules and search limits

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::pair::PairId;
use crate::ConfigurationError;

pub const DEFAULT_TEAM_SIZE: usize = 6;

/// Result cap keeping interactive searches bounded
pub const DEFAULT_MAX_COMBINATIONS: usize = 50;

/// Exclusivity rules for a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstraintSet {
    /// No species key may appear twice across the team
    pub species_clause: bool,

    /// No lowercased primary type may appear twice across the team
    pub primary_type_clause: bool,

    /// Keep pairs with a custom member in the pool
    #[serde(rename = "allowCustomPokemon")]
    pub allow_custom: bool,

    pub team_size: usize,

    /// Pairs pinned into every result
    pub required_pair_ids: HashSet<PairId>,
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self {
            species_clause: true,
            primary_type_clause: true,
            allow_custom: true,
            team_size: DEFAULT_TEAM_SIZE,
            required_pair_ids: HashSet::new(),
        }
    }
}

impl ConstraintSet {
    /// Pin a pair into every result
    pub fn require(mut self, id: impl Into<PairId>) -> Self {
        self.required_pair_ids.insert(id.into());
        self
    }

    pub fn is_required(&self, id: &PairId) -> bool {
        self.required_pair_ids.contains(id)
    }

    /// Check the configuration is searchable
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.team_size == 0 {
            return Err(ConfigurationError::EmptyTeam);
        }
        if self.required_pair_ids.len() > self.team_size {
            return Err(ConfigurationError::TooManyRequired {
                required: self.required_pair_ids.len(),
                team_size: self.team_size,
            });
        }
        Ok(())
    }
}

/// Operational bounds on a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchLimits {
    pub max_combinations: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
        }
    }
}
