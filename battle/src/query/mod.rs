//! Query helpers for matchup decisions
//!
//! This module turns the static type chart into the answers a team builder
//! needs: what a Pokemon is weak to, and how two sets of types fare against
//! each other.

mod effectiveness;
mod matchup;

pub use effectiveness::{resolve_effectiveness, Effectiveness};
pub use matchup::{
    classify_against_type, classify_damage, offensive_multiplier, DamageLabel, DamageTier,
    Matchup, MatchupRating, Perspective,
};
