//! Aggregate defensive profile of a Pokemon with one or two types

use crate::types::{Type, TypeSet};

/// Everything a Pokemon is weak to, resists, or is immune to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Effectiveness {
    pub weaknesses: TypeSet,
    pub resistances: TypeSet,
    pub immunities: TypeSet,
    /// Attacking types both defending types are weak to (4x)
    pub double_weaknesses: TypeSet,
    /// Attacking types both defending types resist (0.25x)
    pub double_resistances: TypeSet,
}

impl Effectiveness {
    /// Resolve the profile for a set of defending types.
    ///
    /// Chart entries are unioned, then immunity masks resistance and
    /// resistance masks weakness. Double categories come from the raw per-type
    /// chart rows and only exist for exactly two distinct types.
    pub fn resolve(types: &[Type]) -> Self {
        let mut distinct: Vec<Type> = Vec::with_capacity(2);
        for t in types {
            if !distinct.contains(t) {
                distinct.push(*t);
            }
        }

        let mut weaknesses = TypeSet::EMPTY;
        let mut resistances = TypeSet::EMPTY;
        let mut immunities = TypeSet::EMPTY;
        for t in &distinct {
            let entry = t.chart();
            weaknesses = weaknesses.union(entry.weak_to);
            resistances = resistances.union(entry.resistant_to);
            immunities = immunities.union(entry.immune_to);
        }

        let weaknesses = weaknesses.difference(resistances).difference(immunities);
        let resistances = resistances.difference(immunities);

        let (double_weaknesses, double_resistances) = match distinct.as_slice() {
            [a, b] => (
                a.chart().weak_to.intersection(b.chart().weak_to),
                a.chart().resistant_to.intersection(b.chart().resistant_to),
            ),
            _ => (TypeSet::EMPTY, TypeSet::EMPTY),
        };

        Self {
            weaknesses,
            resistances,
            immunities,
            double_weaknesses,
            double_resistances,
        }
    }

    /// Resolve from raw identifiers; unknown identifiers contribute nothing
    pub fn resolve_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self::resolve(&Type::parse_all(names))
    }
}

/// Shorthand for [`Effectiveness::resolve`]
pub fn resolve_effectiveness(types: &[Type]) -> Effectiveness {
    Effectiveness::resolve(types)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_type() {
        let steel = Effectiveness::resolve(&[Type::Steel]);
        assert_eq!(
            steel.weaknesses.to_vec(),
            vec![Type::Fire, Type::Fighting, Type::Ground]
        );
        assert_eq!(steel.resistances.len(), 10);
        assert_eq!(steel.immunities.to_vec(), vec![Type::Poison]);
        assert!(steel.double_weaknesses.is_empty());
        assert!(steel.double_resistances.is_empty());
    }

    #[test]
    fn test_resistance_masks_weakness() {
        // Fire is weak to Water, Water/Fire resists Water
        let e = Effectiveness::resolve(&[Type::Water, Type::Fire]);
        assert!(!e.weaknesses.contains(Type::Water));
        assert!(e.resistances.contains(Type::Water));
        assert!(e.double_resistances.contains(Type::Fire));
        assert!(e.double_resistances.contains(Type::Ice));
    }

    #[test]
    fn test_immunity_masks_weakness_and_resistance() {
        // Flying is immune to Ground, Electric is weak to it
        let e = Effectiveness::resolve(&[Type::Electric, Type::Flying]);
        assert!(e.immunities.contains(Type::Ground));
        assert!(!e.weaknesses.contains(Type::Ground));

        // Bug resists Fighting, Ghost is immune to it
        let e = Effectiveness::resolve(&[Type::Bug, Type::Ghost]);
        assert!(e.immunities.contains(Type::Fighting));
        assert!(!e.resistances.contains(Type::Fighting));
    }

    #[test]
    fn test_immunity_only_removes() {
        let ghost_dark = Effectiveness::resolve(&[Type::Ghost, Type::Dark]);
        for t in ghost_dark.immunities.iter() {
            assert!(!ghost_dark.weaknesses.contains(t));
            assert!(!ghost_dark.resistances.contains(t));
        }
        assert_eq!(
            ghost_dark.immunities.to_vec(),
            vec![Type::Normal, Type::Fighting, Type::Psychic]
        );
    }

    #[test]
    fn test_double_weakness_from_raw_rows() {
        // Ice and Ground have no common weakness
        let e = Effectiveness::resolve(&[Type::Ice, Type::Ground]);
        assert!(e.double_weaknesses.is_empty());
        assert!(e.weaknesses.contains(Type::Fire));
        assert!(e.weaknesses.contains(Type::Water));

        // Grass/Ice shares Fire
        let e = Effectiveness::resolve(&[Type::Grass, Type::Ice]);
        assert_eq!(e.double_weaknesses.to_vec(), vec![Type::Fire]);
    }

    #[test]
    fn test_double_weakness_ignores_precedence_pruning() {
        // Both Grass and Bug are weak to Flying and Fire; Bug resists Grass,
        // which does not affect the double set
        let e = Effectiveness::resolve(&[Type::Grass, Type::Bug]);
        assert!(e.double_weaknesses.contains(Type::Fire));
        assert!(e.double_weaknesses.contains(Type::Flying));
    }

    #[test]
    fn test_repeated_type_is_single_type() {
        let twice = Effectiveness::resolve(&[Type::Fire, Type::Fire]);
        let once = Effectiveness::resolve(&[Type::Fire]);
        assert_eq!(twice, once);
        assert!(twice.double_resistances.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let a = Effectiveness::resolve(&[Type::Dragon, Type::Flying]);
        let b = Effectiveness::resolve(&[Type::Dragon, Type::Flying]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_effectiveness_shorthand() {
        let types = [Type::Grass, Type::Poison];
        assert_eq!(resolve_effectiveness(&types), Effectiveness::resolve(&types));
        assert_eq!(resolve_effectiveness(&[]), Effectiveness::default());
    }

    #[test]
    fn test_resolve_names() {
        let e = Effectiveness::resolve_names(["ICE", "ground"]);
        assert_eq!(e, Effectiveness::resolve(&[Type::Ice, Type::Ground]));

        let unknown = Effectiveness::resolve_names(["shadow"]);
        assert_eq!(unknown, Effectiveness::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_camel_case() {
        let e = Effectiveness::resolve(&[Type::Ice, Type::Ground]);
        let value = serde_json::to_value(e).unwrap();
        assert_eq!(value["doubleWeaknesses"], serde_json::json!([]));
        assert_eq!(value["immunities"], serde_json::json!(["electric"]));
    }
}
