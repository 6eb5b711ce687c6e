//! Individual catches as supplied by the run tracker

use serde::{Deserialize, Serialize};

/// Whether a pair is still usable in the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LifeStatus {
    #[default]
    Alive,
    Dead,
}

/// One player's catch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: String,

    /// Display name (nickname or species)
    pub name: String,

    /// Species key used by the species clause
    pub species_key: String,

    /// Primary type as entered; required by the type clause
    #[serde(default)]
    pub primary_type: Option<String>,

    #[serde(default)]
    pub secondary_type: Option<String>,

    /// Fan game or custom variant
    #[serde(default)]
    pub custom: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Pokemon {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        species_key: impl Into<String>,
        primary_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species_key: species_key.into(),
            primary_type: Some(primary_type.into()),
            secondary_type: None,
            custom: false,
            notes: None,
        }
    }

    pub fn with_secondary_type(mut self, secondary: impl Into<String>) -> Self {
        self.secondary_type = Some(secondary.into());
        self
    }

    pub fn without_primary_type(mut self) -> Self {
        self.primary_type = None;
        self
    }

    pub fn as_custom(mut self) -> Self {
        self.custom = true;
        self
    }

    /// Lowercased primary type; blank counts as missing
    pub fn primary_type_key(&self) -> Option<String> {
        normalize(self.primary_type.as_deref())
    }

    /// Lowercased types in slot order, blanks skipped
    pub fn type_keys(&self) -> Vec<String> {
        [self.primary_type.as_deref(), self.secondary_type.as_deref()]
            .into_iter()
            .filter_map(normalize)
            .collect()
    }
}

fn normalize(t: Option<&str>) -> Option<String> {
    t.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty())
}
