//! Type chart and matchup resolution for Soul-Link runs.
//!
//! # Overview
//!
//! `soullink-battle` answers type questions for the team builder and the
//! battle screen. It has no notion of pairs or teams; callers hand it types.
//!
//! ```text
//! TYPE_CHART (static, 18 defending rows)
//!        │
//!        ├─> Effectiveness::resolve   (weak / resist / immune + double sets)
//!        │          │
//!        │          └─> classify_against_type (single opposing type)
//!        │
//!        └─> offensive_multiplier      (attacker types vs defender types)
//!                   │
//!                   └─> classify_damage (offense / defense labels)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - Pokemon types, parsed case-insensitively
//! - [`TypeSet`] - Small ordered set of types
//! - [`Effectiveness`] - Aggregate defensive profile
//! - [`DamageLabel`], [`MatchupRating`] - Display labels
//!
//! # Example Usage
//!
//! ```
//! use soullink_battle::{classify_damage, offensive_multiplier, Perspective, Type};
//!
//! let m = offensive_multiplier(&[Type::Electric], &[Type::Water, Type::Flying]);
//! assert_eq!(m, 4.0);
//! assert_eq!(classify_damage(m, Perspective::Offense).as_str(), "Super Effective 4x");
//! ```

pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use query::{
    classify_against_type, classify_damage, offensive_multiplier, resolve_effectiveness,
    DamageLabel, DamageTier, Effectiveness, Matchup, MatchupRating, Perspective,
};
pub use types::{Type, TypeChartEntry, TypeSet, TYPE_CHART};
