//! Type matchup helpers: damage multipliers and their display labels

use std::fmt;

use super::effectiveness::Effectiveness;
use crate::types::Type;

/// Damage multiplier of every attacking type against every defending type.
///
/// Each attacker/defender pair contributes its chart factor to a running
/// product starting at 1. Any immunity makes the product 0 for good.
/// Empty inputs on either side give a neutral 1.
pub fn offensive_multiplier(attackers: &[Type], defenders: &[Type]) -> f32 {
    let mut multiplier = 1.0;
    for defender in defenders {
        for attacker in attackers {
            multiplier *= defender.factor_from(*attacker);
        }
    }
    multiplier
}

/// Which side of the matchup a multiplier is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Perspective {
    /// Our moves hitting them
    Offense,
    /// Their moves hitting us
    Defense,
}

/// Discrete damage bucket for a multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum DamageTier {
    Immune,
    Quadruple,
    Double,
    Quarter,
    Half,
    Neutral,
}

impl DamageTier {
    /// Bucket a multiplier; thresholds are checked top to bottom
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            DamageTier::Immune
        } else if multiplier >= 4.0 {
            DamageTier::Quadruple
        } else if multiplier >= 2.0 {
            DamageTier::Double
        } else if multiplier <= 0.25 {
            DamageTier::Quarter
        } else if multiplier <= 0.5 {
            DamageTier::Half
        } else {
            DamageTier::Neutral
        }
    }
}

/// A damage tier read from one side of the matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageLabel {
    pub tier: DamageTier,
    pub perspective: Perspective,
}

impl DamageLabel {
    /// Label text as shown on the battle screen
    pub fn as_str(&self) -> &'static str {
        match (self.perspective, self.tier) {
            (Perspective::Offense, DamageTier::Immune) => "Immune (0x)",
            (Perspective::Offense, DamageTier::Quadruple) => "Super Effective 4x",
            (Perspective::Offense, DamageTier::Double) => "Super Effective 2x",
            (Perspective::Offense, DamageTier::Quarter) => "Very Resisted ¼x",
            (Perspective::Offense, DamageTier::Half) => "Not Very Effective ½x",
            (Perspective::Defense, DamageTier::Immune) => "Immune (0x taken)",
            (Perspective::Defense, DamageTier::Quadruple) => "4x Weak",
            (Perspective::Defense, DamageTier::Double) => "Weak (2x taken)",
            (Perspective::Defense, DamageTier::Quarter) => "Quad Resist ¼x",
            (Perspective::Defense, DamageTier::Half) => "Resist ½x",
            (_, DamageTier::Neutral) => "Neutral",
        }
    }
}

impl fmt::Display for DamageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Label a raw multiplier from the given perspective
pub fn classify_damage(multiplier: f32, perspective: Perspective) -> DamageLabel {
    DamageLabel {
        tier: DamageTier::from_multiplier(multiplier),
        perspective,
    }
}

/// How a Pokemon fares against a single opposing type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum MatchupRating {
    Immune,
    DoubleResist,
    Resist,
    DoubleWeak,
    Weak,
    Neutral,
}

impl MatchupRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchupRating::Immune => "immune",
            MatchupRating::DoubleResist => "double resist",
            MatchupRating::Resist => "resists",
            MatchupRating::DoubleWeak => "4x weak",
            MatchupRating::Weak => "weak",
            MatchupRating::Neutral => "neutral",
        }
    }
}

impl fmt::Display for MatchupRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rate a resolved profile against one opposing type.
///
/// Precedence: immune, double resist, resist, double weak, weak, neutral.
pub fn classify_against_type(effectiveness: &Effectiveness, opposing: Type) -> MatchupRating {
    if effectiveness.immunities.contains(opposing) {
        MatchupRating::Immune
    } else if effectiveness.double_resistances.contains(opposing) {
        MatchupRating::DoubleResist
    } else if effectiveness.resistances.contains(opposing) {
        MatchupRating::Resist
    } else if effectiveness.double_weaknesses.contains(opposing) {
        MatchupRating::DoubleWeak
    } else if effectiveness.weaknesses.contains(opposing) {
        MatchupRating::Weak
    } else {
        MatchupRating::Neutral
    }
}

/// Both directions of a matchup between our types and theirs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub offense_multiplier: f32,
    pub offense: DamageLabel,
    pub defense_multiplier: f32,
    pub defense: DamageLabel,
}

impl Matchup {
    pub fn between(mine: &[Type], theirs: &[Type]) -> Self {
        let offense_multiplier = offensive_multiplier(mine, theirs);
        let defense_multiplier = offensive_multiplier(theirs, mine);
        Self {
            offense_multiplier,
            offense: classify_damage(offense_multiplier, Perspective::Offense),
            defense_multiplier,
            defense: classify_damage(defense_multiplier, Perspective::Defense),
        }
    }
}
