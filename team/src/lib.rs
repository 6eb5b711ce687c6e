//! Linked pair model and team combination search for Soul-Link runs.
//!
//! A Soul-Link run pairs every catch of player 1 with a catch of player 2.
//! When building a team, both members of a pair come along, so exclusivity
//! rules (one of each species, one of each primary type) apply to the union
//! of both members.
//!
//! ```text
//! Vec<Pair> ──PairPool::eligible──> PairPool ──search──> Vec<Combination>
//!                 ▲                               ▲
//!                 └──────── ConstraintSet ────────┘
//! ```
//!
//! # Example Usage
//!
//! ```
//! use soullink_team::{search, ConstraintSet, Pair, Pokemon, SearchLimits};
//!
//! let pool = vec![
//!     Pair::new("p1", Pokemon::new("a", "Bulbasaur", "bulbasaur", "grass"),
//!                     Pokemon::new("b", "Charmander", "charmander", "fire")),
//!     Pair::new("p2", Pokemon::new("c", "Squirtle", "squirtle", "water"),
//!                     Pokemon::new("d", "Pidgey", "pidgey", "normal")),
//! ];
//! let constraints = ConstraintSet { team_size: 2, ..Default::default() };
//!
//! let teams = search(&pool, &constraints, &SearchLimits::default()).unwrap();
//! assert_eq!(teams.len(), 1);
//! ```

use thiserror::Error;

mod constraints;
mod pair;
mod pokemon;
mod pool;
mod search;

pub use constraints::{ConstraintSet, SearchLimits, DEFAULT_MAX_COMBINATIONS, DEFAULT_TEAM_SIZE};
pub use pair::{Pair, PairId, Side};
pub use pokemon::{LifeStatus, Pokemon};
pub use pool::{PairPool, RunSummary};
pub use search::{search, Combination};

/// Rejected team configuration, raised before any enumeration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{required} required pairs selected but team size is {team_size}")]
    TooManyRequired { required: usize, team_size: usize },

    #[error("Team size must be at least 1")]
    EmptyTeam,
}
