//! Pokemon type system and defensive type chart

use std::fmt;

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types, in chart order
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Parse a type identifier (case-insensitive, surrounding whitespace ignored)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Parse every identifier that names a known type.
    ///
    /// Unknown identifiers have no chart entry, so they are dropped rather than
    /// reported. Duplicates are kept out; input order is preserved.
    pub fn parse_all<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Type> {
        let mut types = Vec::new();
        for name in names {
            match Type::parse(name) {
                Some(t) if !types.contains(&t) => types.push(t),
                Some(_) => {}
                None => tracing::trace!(identifier = name, "dropping unknown type identifier"),
            }
        }
        types
    }

    /// Canonical (lowercase) identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }

    /// Chart entry describing how this type takes hits
    pub fn chart(self) -> &'static TypeChartEntry {
        &TYPE_CHART[self as usize]
    }

    /// Damage factor of an attacking type hitting this single defending type.
    ///
    /// Checked in chart order: weak (2x), then resist (0.5x), then immune (0x).
    pub fn factor_from(self, attacker: Type) -> f32 {
        let entry = self.chart();
        if entry.weak_to.contains(attacker) {
            2.0
        } else if entry.resistant_to.contains(attacker) {
            0.5
        } else if entry.immune_to.contains(attacker) {
            0.0
        } else {
            1.0
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Set of types backed by an 18-bit mask.
///
/// Iteration always yields types in chart order, so sets built from the same
/// inputs print and compare identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TypeSet(u32);

impl TypeSet {
    pub const EMPTY: TypeSet = TypeSet(0);

    /// Build a set from a slice (usable in `static` tables)
    pub const fn of(types: &[Type]) -> Self {
        let mut bits = 0u32;
        let mut i = 0;
        while i < types.len() {
            bits |= 1 << types[i] as u32;
            i += 1;
        }
        TypeSet(bits)
    }

    /// Whether `t` is in the set
    pub const fn contains(self, t: Type) -> bool {
        self.0 & (1 << t as u32) != 0
    }

    /// Add `t`; no-op if already present
    pub fn insert(&mut self, t: Type) {
        self.0 |= 1 << t as u32;
    }

    /// Drop `t`; no-op if absent
    pub fn remove(&mut self, t: Type) {
        self.0 &= !(1 << t as u32);
    }

    /// Types in either set
    pub const fn union(self, other: TypeSet) -> TypeSet {
        TypeSet(self.0 | other.0)
    }

    /// Types in both sets
    pub const fn intersection(self, other: TypeSet) -> TypeSet {
        TypeSet(self.0 & other.0)
    }

    /// Types in `self` but not in `other`
    pub const fn difference(self, other: TypeSet) -> TypeSet {
        TypeSet(self.0 & !other.0)
    }

    /// Whether the set holds no types
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of types in the set
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate in chart order
    pub fn iter(self) -> impl Iterator<Item = Type> {
        Type::ALL.into_iter().filter(move |t| self.contains(*t))
    }

    /// Collect into a vector in chart order
    pub fn to_vec(self) -> Vec<Type> {
        self.iter().collect()
    }
}

impl FromIterator<Type> for TypeSet {
    fn from_iter<I: IntoIterator<Item = Type>>(iter: I) -> Self {
        let mut set = TypeSet::EMPTY;
        for t in iter {
            set.insert(t);
        }
        set
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|t| t.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TypeSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let types = <Vec<Type> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(types.into_iter().collect())
    }
}

/// How a single defending type takes hits from each attacking type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeChartEntry {
    /// Attacking types dealing double damage
    pub weak_to: TypeSet,
    /// Attacking types dealing half damage
    pub resistant_to: TypeSet,
    /// Attacking types dealing no damage
    pub immune_to: TypeSet,
}

const fn entry(weak_to: &[Type], resistant_to: &[Type], immune_to: &[Type]) -> TypeChartEntry {
    TypeChartEntry {
        weak_to: TypeSet::of(weak_to),
        resistant_to: TypeSet::of(resistant_to),
        immune_to: TypeSet::of(immune_to),
    }
}

use Type::*;

/// Defensive type chart, indexed by `Type as usize`.
/// Row = defending type; each set lists attacking types.
#[rustfmt::skip]
pub static TYPE_CHART: [TypeChartEntry; 18] = [
    // Normal defending
    entry(&[Fighting], &[], &[Ghost]),
    // Fire defending
    entry(&[Water, Ground, Rock], &[Fire, Grass, Ice, Bug, Steel, Fairy], &[]),
    // Water defending
    entry(&[Electric, Grass], &[Fire, Water, Ice, Steel], &[]),
    // Electric defending
    entry(&[Ground], &[Electric, Flying, Steel], &[]),
    // Grass defending
    entry(&[Fire, Ice, Poison, Flying, Bug], &[Water, Electric, Grass, Ground], &[]),
    // Ice defending
    entry(&[Fire, Fighting, Rock, Steel], &[Ice], &[]),
    // Fighting defending
    entry(&[Flying, Psychic, Fairy], &[Bug, Rock, Dark], &[]),
    // Poison defending
    entry(&[Ground, Psychic], &[Grass, Fighting, Poison, Bug, Fairy], &[]),
    // Ground defending
    entry(&[Water, Grass, Ice], &[Poison, Rock], &[Electric]),
    // Flying defending
    entry(&[Electric, Ice, Rock], &[Grass, Fighting, Bug], &[Ground]),
    // Psychic defending
    entry(&[Bug, Ghost, Dark], &[Fighting, Psychic], &[]),
    // Bug defending
    entry(&[Fire, Flying, Rock], &[Grass, Fighting, Ground], &[]),
    // Rock defending
    entry(&[Water, Grass, Fighting, Ground, Steel], &[Normal, Fire, Poison, Flying], &[]),
    // Ghost defending
    entry(&[Ghost, Dark], &[Poison, Bug], &[Normal, Fighting]),
    // Dragon defending
    entry(&[Ice, Dragon, Fairy], &[Fire, Water, Electric, Grass], &[]),
    // Dark defending
    entry(&[Fighting, Bug, Fairy], &[Ghost, Dark], &[Psychic]),
    // Steel defending
    entry(&[Fire, Fighting, Ground], &[Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy], &[Poison]),
    // Fairy defending
    entry(&[Poison, Steel], &[Fighting, Bug, Dark], &[Dragon]),
];
