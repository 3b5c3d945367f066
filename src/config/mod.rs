//! TOML configuration for the presentation side.
//!
//! ```toml
//! [display]
//! grouping = true
//!
//! [keys]
//! "=" = "evaluate"
//! "Escape" = "clear"
//! ```
//!
//! Every section is optional; missing values fall back to defaults.

mod error;

pub use error::ConfigError;

use crate::display::DisplayOptions;
use crate::keymap::Keymap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use stillwater::validation::Validation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    /// Key name -> action text, layered over the default keymap
    pub keys: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub grouping: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { grouping: true }
    }
}

impl Config {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            grouping: self.display.grouping,
        }
    }

    /// Default keymap with the configured bindings layered on top.
    pub fn keymap(&self) -> Result<Keymap, ConfigError> {
        match Keymap::default().with_bindings(&self.keys) {
            Validation::Success(keymap) => Ok(keymap),
            Validation::Failure(errors) => Err(ConfigError::InvalidBindings(
                errors.iter().cloned().collect(),
            )),
        }
    }
}
