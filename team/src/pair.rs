//! Linked pairs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pokemon::{LifeStatus, Pokemon};

/// Pair identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairId(pub String);

impl PairId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PairId {
    fn from(s: &str) -> Self {
        PairId(s.to_string())
    }
}

impl From<String> for PairId {
    fn from(s: String) -> Self {
        PairId(s)
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which player's half of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Player1,
    Player2,
}

/// Two catches whose fates are linked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub id: PairId,
    pub player1: Pokemon,
    pub player2: Pokemon,
    #[serde(default)]
    pub status: LifeStatus,
}

impl Pair {
    /// Create a living pair
    pub fn new(id: impl Into<PairId>, player1: Pokemon, player2: Pokemon) -> Self {
        Self {
            id: id.into(),
            player1,
            player2,
            status: LifeStatus::Alive,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == LifeStatus::Alive
    }

    /// Whether either member is a custom variant
    pub fn has_custom(&self) -> bool {
        self.player1.custom || self.player2.custom
    }

    pub fn member(&self, side: Side) -> &Pokemon {
        match side {
            Side::Player1 => &self.player1,
            Side::Player2 => &self.player2,
        }
    }

    pub fn members(&self) -> [&Pokemon; 2] {
        [&self.player1, &self.player2]
    }

    /// Species keys of both members
    pub fn species_keys(&self) -> [&str; 2] {
        [self.player1.species_key.as_str(), self.player2.species_key.as_str()]
    }

    /// Lowercased primary types of both members, missing ones skipped
    pub fn primary_types(&self) -> Vec<String> {
        self.members()
            .into_iter()
            .filter_map(Pokemon::primary_type_key)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Pair {
        Pair::new(
            "p",
            Pokemon::new("a", "Zappy", "pikachu", "Electric"),
            Pokemon::new("b", "Leafy", "oddish", "Grass").without_primary_type(),
        )
    }

    #[test]
    fn test_member_by_side() {
        let p = pair();
        assert_eq!(p.member(Side::Player1).name, "Zappy");
        assert_eq!(p.member(Side::Player2).name, "Leafy");
    }

    #[test]
    fn test_species_and_types() {
        let p = pair();
        assert_eq!(p.species_keys(), ["pikachu", "oddish"]);
        assert_eq!(p.primary_types(), vec!["electric"]);
    }

    #[test]
    fn test_deserialize_defaults_to_alive() {
        let json = r#"{
            "id": "pair-1",
            "player1": {"id": "a", "name": "A", "speciesKey": "a"},
            "player2": {"id": "b", "name": "B", "speciesKey": "b"},
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;
        let p: Pair = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, PairId::from("pair-1"));
        assert!(p.is_alive());
    }

    #[test]
    fn test_deserialize_dead() {
        let json = r#"{
            "id": "pair-2",
            "player1": {"id": "a", "name": "A", "speciesKey": "a"},
            "player2": {"id": "b", "name": "B", "speciesKey": "b", "custom": true},
            "status": "Dead"
        }"#;
        let p: Pair = serde_json::from_str(json).unwrap();
        assert!(!p.is_alive());
        assert!(p.has_custom());
    }
}
