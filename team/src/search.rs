//! Backtracking search over legal team compositions

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constraints::{ConstraintSet, SearchLimits};
use crate::pair::{Pair, PairId, Side};
use crate::pokemon::Pokemon;
use crate::ConfigurationError;

/// One legal team: required pairs first, then chosen pairs in pool order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Combination {
    pairs: Vec<Pair>,
}

impl Combination {
    /// Pairs in team order: required first, then chosen pairs by pool index
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Number of pairs on the team
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the team has no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in team order
    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    /// Pair ids in team order
    pub fn ids(&self) -> Vec<&PairId> {
        self.pairs.iter().map(|p| &p.id).collect()
    }

    /// Whether the pair with `id` is on the team
    pub fn contains(&self, id: &PairId) -> bool {
        self.pairs.iter().any(|p| &p.id == id)
    }

    /// One player's half of the team, in team order
    pub fn side(&self, side: Side) -> Vec<&Pokemon> {
        self.pairs.iter().map(|p| p.member(side)).collect()
    }

    /// Take ownership of the pairs
    pub fn into_pairs(self) -> Vec<Pair> {
        self.pairs
    }
}

/// Species and primary types already taken by the partial team.
///
/// Every accepted pair produces a fresh copy, so sibling branches never see
/// each other's choices.
#[derive(Debug, Clone, Default)]
struct Used<'a> {
    species: HashSet<&'a str>,
    types: HashSet<String>,
}

impl<'a> Used<'a> {
    fn seed(required: &[&'a Pair]) -> Self {
        let mut used = Self::default();
        for pair in required {
            used.add(pair);
        }
        used
    }

    fn add(&mut self, pair: &'a Pair) {
        self.species.extend(pair.species_keys());
        self.types.extend(pair.primary_types());
    }

    fn with(&self, pair: &'a Pair) -> Self {
        let mut next = self.clone();
        next.add(pair);
        next
    }

    /// A pair whose own members share a species or type is not rejected for
    /// that; only collisions with earlier pairs count.
    fn admits(&self, pair: &Pair, constraints: &ConstraintSet) -> bool {
        if constraints.species_clause
            && pair.species_keys().iter().any(|s| self.species.contains(s))
        {
            return false;
        }
        if constraints.primary_type_clause {
            let (Some(t1), Some(t2)) = (
                pair.player1.primary_type_key(),
                pair.player2.primary_type_key(),
            ) else {
                return false;
            };
            if self.types.contains(&t1) || self.types.contains(&t2) {
                return false;
            }
        }
        true
    }
}

struct Search<'a> {
    required: Vec<&'a Pair>,
    optional: Vec<&'a Pair>,
    constraints: &'a ConstraintSet,
    slots: usize,
    cap: usize,
    results: Vec<Combination>,
}

impl<'a> Search<'a> {
    fn is_full(&self) -> bool {
        self.results.len() >= self.cap
    }

    fn emit(&mut self, team: &[&'a Pair]) {
        let pairs = self
            .required
            .iter()
            .chain(team)
            .map(|p| (*p).clone())
            .collect();
        self.results.push(Combination { pairs });
    }

    fn extend(&mut self, start: usize, team: &mut Vec<&'a Pair>, used: &Used<'a>) {
        if team.len() == self.slots {
            self.emit(team);
            return;
        }

        let needed = self.slots - team.len();
        for i in start..self.optional.len() {
            if self.is_full() || self.optional.len() - i < needed {
                return;
            }
            let pair = self.optional[i];
            if !used.admits(pair, self.constraints) {
                continue;
            }

            let next = used.with(pair);
            team.push(pair);
            self.extend(i + 1, team, &next);
            team.pop();
        }
    }
}

/// Enumerate every legal team from `pool`, up to `limits.max_combinations`.
///
/// Pairs named in `required_pair_ids` are pinned to the front of every team
/// and seed the used species and types without being checked against each
/// other. Remaining slots are filled from the other pairs by increasing pool
/// index, so each team appears once and results come out in lexicographic
/// index order. Unknown required ids match nothing.
///
/// Fails only when the configuration itself is unusable; an empty or
/// unsatisfiable pool gives an empty list.
pub fn search(
    pool: &[Pair],
    constraints: &ConstraintSet,
    limits: &SearchLimits,
) -> Result<Vec<Combination>, ConfigurationError> {
    constraints.validate()?;

    let mut seen: HashSet<&PairId> = HashSet::new();
    let mut required = Vec::new();
    let mut optional = Vec::new();
    for pair in pool {
        if !seen.insert(&pair.id) {
            tracing::trace!(pair = %pair.id, "skipping duplicate pair id");
            continue;
        }
        if constraints.is_required(&pair.id) {
            required.push(pair);
        } else {
            optional.push(pair);
        }
    }

    let slots = constraints.team_size - required.len();
    tracing::debug!(
        pool = pool.len(),
        required = required.len(),
        slots,
        species_clause = constraints.species_clause,
        primary_type_clause = constraints.primary_type_clause,
        "searching team combinations"
    );

    let used = Used::seed(&required);
    let mut state = Search {
        required,
        optional,
        constraints,
        slots,
        cap: limits.max_combinations,
        results: Vec::new(),
    };
    if !state.is_full() {
        state.extend(0, &mut Vec::with_capacity(slots), &used);
    }

    if state.is_full() {
        tracing::debug!(cap = state.cap, "combination cap reached, search truncated");
    }
    tracing::debug!(found = state.results.len(), "team combination search finished");
    Ok(state.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(id: &str, s1: &str, t1: &str, s2: &str, t2: &str) -> Pair {
        Pair::new(
            id,
            Pokemon::new(format!("{id}-1"), s1, s1, t1),
            Pokemon::new(format!("{id}-2"), s2, s2, t2),
        )
    }

    fn ids(results: &[Combination]) -> Vec<Vec<&str>> {
        results
            .iter()
            .map(|c| c.iter().map(|p| p.id.as_str()).collect())
            .collect()
    }

    fn sized(team_size: usize) -> ConstraintSet {
        ConstraintSet {
            team_size,
            ..Default::default()
        }
    }

    #[test]
    fn test_species_clause_scenario() {
        let pool = vec![
            pair("p1", "a1", "fire", "a2", "water"),
            pair("p2", "b1", "grass", "b2", "ice"),
            pair("p3", "a1", "rock", "c2", "dark"),
        ];
        let constraints = ConstraintSet {
            primary_type_clause: false,
            ..sized(2)
        };
        let results = search(&pool, &constraints, &SearchLimits::default()).unwrap();
        assert_eq!(ids(&results), vec![vec!["p1", "p2"], vec!["p2", "p3"]]);
    }

    #[test]
    fn test_species_clause_scenario_single_result() {
        // Pinning p1 leaves p2 as its only legal partner
        let pool = vec![
            pair("p1", "a1", "fire", "a2", "water"),
            pair("p2", "b1", "grass", "b2", "ice"),
            pair("p3", "a1", "rock", "c2", "dark"),
        ];
        let constraints = ConstraintSet {
            primary_type_clause: false,
            ..sized(2)
        }
        .require("p1");
        let results = search(&pool, &constraints, &SearchLimits::default()).unwrap();
        assert_eq!(ids(&results), vec![vec!["p1", "p2"]]);
    }

    #[test]
    fn test_type_clause_case_insensitive() {
        let pool = vec![
            pair("p1", "a", "Fire", "b", "water"),
            pair("p2", "c", "FIRE", "d", "grass"),
            pair("p3", "e", "ice", "f", "rock"),
        ];
        let results = search(&pool, &sized(2), &SearchLimits::default()).unwrap();
        assert_eq!(ids(&results), vec![vec!["p1", "p3"], vec!["p2", "p3"]]);
    }

    #[test]
    fn test_type_clause_rejects_missing_primary_type() {
        let mut untyped = pair("p2", "c", "grass", "d", "ice");
        untyped.player2 = untyped.player2.without_primary_type();
        let pool = vec![pair("p1", "a", "fire", "b", "water"), untyped];

        let results = search(&pool, &sized(2), &SearchLimits::default()).unwrap();
        assert!(results.is_empty());

        let relaxed = ConstraintSet {
            primary_type_clause: false,
            ..sized(2)
        };
        let results = search(&pool, &relaxed, &SearchLimits::default()).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_pair_sharing_type_internally_is_allowed() {
        let pool = vec![
            pair("p1", "a", "fire", "b", "fire"),
            pair("p2", "c", "water", "d", "grass"),
        ];
        let results = search(&pool, &sized(2), &SearchLimits::default()).unwrap();
        assert_eq!(ids(&results), vec![vec!["p1", "p2"]]);
    }

    #[test]
    fn test_required_pairs_first_in_pool_order() {
        let pool = vec![
            pair("p1", "a", "fire", "b", "water"),
            pair("p2", "c", "grass", "d", "ice"),
            pair("p3", "e", "rock", "f", "dark"),
            pair("p4", "g", "bug", "h", "steel"),
        ];
        let constraints = sized(3).require("p4").require("p2");
        let results = search(&pool, &constraints, &SearchLimits::default()).unwrap();
        assert_eq!(
            ids(&results),
            vec![vec!["p2", "p4", "p1"], vec!["p2", "p4", "p3"]]
        );
    }

    #[test]
    fn test_required_fill_whole_team() {
        let pool = vec![
            pair("p1", "a", "fire", "b", "water"),
            pair("p2", "a", "fire", "c", "grass"),
            pair("p3", "e", "rock", "f", "dark"),
        ];
        // Required pairs clash with each other but are never checked against
        // each other
        let constraints = sized(2).require("p1").require("p2");
        let results = search(&pool, &constraints, &SearchLimits::default()).unwrap();
        assert_eq!(ids(&results), vec![vec!["p1", "p2"]]);
    }

    #[test]
    fn test_required_block_conflicting_optional() {
        let pool = vec![
            pair("p1", "a", "fire", "b", "water"),
            pair("p2", "c", "Water", "d", "grass"),
            pair("p3", "e", "rock", "f", "dark"),
        ];
        let constraints = sized(2).require("p1");
        let results = search(&pool, &constraints, &SearchLimits::default()).unwrap();
        assert_eq!(ids(&results), vec![vec!["p1", "p3"]]);
    }

    #[test]
    fn test_too_many_required() {
        let pool = vec![
            pair("p1", "a", "fire", "b", "water"),
            pair("p2", "c", "grass", "d", "ice"),
        ];
        let constraints = sized(1).require("p1").require("p2");
        let err = search(&pool, &constraints, &SearchLimits::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::TooManyRequired {
                required: 2,
                team_size: 1
            }
        );
    }

    #[test]
    fn test_unknown_required_id_matches_nothing() {
        let pool = vec![
            pair("p1", "a", "fire", "b", "water"),
            pair("p2", "c", "grass", "d", "ice"),
        ];
        let constraints = sized(2).require("ghost-pair");
        let results = search(&pool, &constraints, &SearchLimits::default()).unwrap();
        assert_eq!(ids(&results), vec![vec!["p1", "p2"]]);
    }

    #[test]
    fn test_empty_and_short_pools() {
        let results = search(&[], &sized(2), &SearchLimits::default()).unwrap();
        assert!(results.is_empty());

        let pool = vec![pair("p1", "a", "fire", "b", "water")];
        let results = search(&pool, &sized(2), &SearchLimits::default()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_cap_limits_results() {
        let types = [
            "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
            "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
        ];
        let pool: Vec<Pair> = (0..9)
            .map(|i| {
                let id = format!("p{i}");
                pair(
                    &id,
                    &format!("s{i}a"),
                    types[2 * i],
                    &format!("s{i}b"),
                    types[2 * i + 1],
                )
            })
            .collect();
        // C(9, 3) = 84 legal teams
        let unbounded = SearchLimits {
            max_combinations: 1000,
        };
        assert_eq!(search(&pool, &sized(3), &unbounded).unwrap().len(), 84);

        let capped = search(&pool, &sized(3), &SearchLimits::default()).unwrap();
        assert_eq!(capped.len(), 50);
        assert_eq!(ids(&capped)[0], vec!["p0", "p1", "p2"]);

        let none = SearchLimits {
            max_combinations: 0,
        };
        assert!(search(&pool, &sized(3), &none).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_pool_ids_collapse() {
        let p = pair("p1", "a", "fire", "b", "water");
        let pool = vec![p.clone(), p, pair("p2", "c", "grass", "d", "ice")];
        let results = search(&pool, &sized(2), &SearchLimits::default()).unwrap();
        assert_eq!(ids(&results), vec![vec!["p1", "p2"]]);
    }

    #[test]
    fn test_combination_side() {
        let pool = vec![
            pair("p1", "a", "fire", "b", "water"),
            pair("p2", "c", "grass", "d", "ice"),
        ];
        let results = search(&pool, &sized(2), &SearchLimits::default()).unwrap();
        let mine: Vec<&str> = results[0]
            .side(Side::Player2)
            .iter()
            .map(|p| p.species_key.as_str())
            .collect();
        assert_eq!(mine, vec!["b", "d"]);
        assert!(results[0].contains(&PairId::from("p2")));

        let owned = results.into_iter().next().unwrap().into_pairs();
        assert_eq!(owned, pool);
    }
}
