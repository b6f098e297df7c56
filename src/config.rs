//! Extraction plans: several block queries against one file, read from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::lines::read_lines;
use crate::data::loader::{extract_from_lines, BlockQuery};
use crate::data::model::Block;
use crate::error::{BlockError, Result};

/// A list of named blocks to pull out of the same file.
///
/// ```json
/// {
///   "blocks": [
///     { "name": "absorbance", "marker": "ABSORBANCE", "skip": 1 },
///     { "marker": "SCAN", "instance": 2 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionPlan {
    pub blocks: Vec<PlanEntry>,
}

/// One entry of an [`ExtractionPlan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Label for the output. Defaults to the marker.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub query: BlockQuery,
}

impl PlanEntry {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.query.marker)
    }
}

impl ExtractionPlan {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| BlockError::io(path, e))?;
        Self::from_json(&text).map_err(|source| BlockError::Plan {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply every entry to `data`, reading it once.
    ///
    /// Results keep plan order; absent blocks are `None`.
    pub fn run(&self, data: &Path) -> Result<Vec<(String, Option<Block>)>> {
        let lines = read_lines(data)?;
        Ok(self
            .blocks
            .iter()
            .map(|entry| {
                log::debug!("plan entry {:?}", entry.label());
                (entry.label().to_string(), extract_from_lines(&lines, &entry.query))
            })
            .collect())
    }
}
