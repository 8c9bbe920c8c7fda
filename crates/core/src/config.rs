//! Match configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::Color;
use crate::error::Result;
use crate::game::{standard_setup, Placement};

/// How the board is populated when a match starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SetupConfig {
    #[default]
    Standard,
    Custom { pieces: Vec<Placement> },
}

impl SetupConfig {
    pub fn placements(&self) -> Vec<Placement> {
        match self {
            SetupConfig::Standard => standard_setup(),
            SetupConfig::Custom { pieces } => pieces.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub first_player: Color,
    pub setup: SetupConfig,
}

impl MatchConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
