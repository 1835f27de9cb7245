use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::upskill::field::Field;

/// Copy of `data/upskill_db.json` compiled into the binary.
const EMBEDDED_DB: &str = include_str!("../../data/upskill_db.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpskillBundle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

/// Static upskill content keyed by field name. Loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct UpskillDb {
    bundles: HashMap<String, UpskillBundle>,
}

impl UpskillDb {
    pub fn from_json(json: &str) -> Result<Self> {
        let bundles = serde_json::from_str(json).context("Invalid upskill table JSON")?;
        Ok(Self { bundles })
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DB)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read upskill table at {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Loads the table from `path`, falling back to the embedded copy.
    pub fn load_or_embedded(path: &Path) -> Result<Self> {
        match Self::from_file(path) {
            Ok(db) => {
                info!("Loaded {} upskill bundles from {}", db.len(), path.display());
                Ok(db)
            }
            Err(e) => {
                warn!("{e:#}; using embedded upskill table");
                Self::embedded()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Bundle for `field`, else the `generic` bundle, else an empty one.
    pub fn bundle(&self, field: Field) -> UpskillBundle {
        self.bundles
            .get(field.key())
            .or_else(|| self.bundles.get(Field::Generic.key()))
            .cloned()
            .unwrap_or_default()
    }
}
