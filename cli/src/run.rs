//! Run files exported by the tracker

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use soullink_team::{ConstraintSet, Pair};

/// Pairs and saved constraints of one run
#[derive(Debug, Deserialize)]
pub struct RunFile {
    pub pairs: Vec<Pair>,
    #[serde(default)]
    pub constraints: ConstraintSet,
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read run file {}", path.display()))?;
        let run: RunFile = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse run file {}", path.display()))?;
        tracing::debug!(path = %path.display(), pairs = run.pairs.len(), "loaded run file");
        Ok(run)
    }
}
