use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RandresError;
use crate::parse::DEFAULT_RESOLUTIONS;
use crate::select::{pick, SelectionResult};

/// Inputs of a resolution pick.
///
/// Every field is optional in a config file; missing fields take the
/// [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Newline separated `WIDTHxHEIGHT[:WEIGHT]` list.
    pub resolutions_text: String,
    /// Swap width and height of the pick.
    pub invert: bool,
    /// Seed for the selection generator.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolutions_text: DEFAULT_RESOLUTIONS.to_string(),
            invert: false,
            seed: 0,
        }
    }
}

impl Config {
    /// Parse a config from JSON text.
    pub fn from_json(s: &str) -> Result<Self, RandresError> {
        serde_json::from_str(s).map_err(|e| RandresError::Config(e.to_string()))
    }

    /// Load a JSON config file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RandresError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Run the pick described by this config.
    pub fn pick(&self) -> SelectionResult {
        pick(&self.resolutions_text, self.invert, self.seed)
    }
}
