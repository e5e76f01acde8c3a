//! The generation request handed to the engine by the CLI layer.

use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Capability, Error, Result};

/// What to generate: the element type, the output package and the requested
/// capabilities.
///
/// Built from command-line flags or loaded from a TOML file:
///
/// ```toml
/// type = "chan float64"
/// pkg = "examples"
/// map = ["int"]
/// filter = true
/// reduce = ["int"]
/// array = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationRequest {
    /// Element type token, optionally package qualified (`os:*os.File`).
    #[serde(rename = "type")]
    pub raw_type: String,
    /// Package clause of the generated file.
    pub pkg: String,
    /// Map result types, one conversion function each.
    #[serde(default)]
    pub map: Vec<String>,
    #[serde(default)]
    pub filter: bool,
    #[serde(default)]
    pub all: bool,
    #[serde(default)]
    pub some: bool,
    #[serde(default, rename = "foreach")]
    pub for_each: bool,
    #[serde(default)]
    pub concat: bool,
    #[serde(default)]
    pub find: bool,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub splice: bool,
    /// Reduce accumulator types, one reducer function each.
    #[serde(default)]
    pub reduce: Vec<String>,
    #[serde(default)]
    pub array: bool,
}

impl GenerationRequest {
    /// Create a request with no capabilities enabled.
    pub fn new(raw_type: impl Into<String>, pkg: impl Into<String>) -> Self {
        Self {
            raw_type: raw_type.into(),
            pkg: pkg.into(),
            ..Self::default()
        }
    }

    /// Load a request from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            Box::new(Error::ReadConfig {
                path: path.to_path_buf(),
                source,
            })
        })?;
        content.parse().map_err(|source| {
            Box::new(Error::Config {
                path: path.to_path_buf(),
                source,
            })
        })
    }

    /// Whether the given capability was asked for.
    pub fn requests(&self, capability: Capability) -> bool {
        match capability {
            Capability::Map => !self.map.is_empty(),
            Capability::Filter => self.filter,
            Capability::All => self.all,
            Capability::Some => self.some,
            Capability::ForEach => self.for_each,
            Capability::Concat => self.concat,
            Capability::Find => self.find,
            Capability::Reverse => self.reverse,
            Capability::Splice => self.splice,
            Capability::Reduce => !self.reduce.is_empty(),
            Capability::Array => self.array,
        }
    }
}

impl FromStr for GenerationRequest {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
