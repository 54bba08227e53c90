//! Groups configuration model
//!
//! Configuration is TOML with an ordered `[[groups]]` array; order is
//! significant because resolution is first-match-wins. A default
//! configuration covering hiragana, katakana, fullwidth punctuation and the
//! ASCII range is embedded in the binary.

use crate::error::{BuildError, ConfigError};
use crate::group::CharGroups;
use serde::{Deserialize, Serialize};

/// The embedded default configuration.
pub const DEFAULT_GROUPS_TOML: &str = include_str!("../configs/default_groups.toml");

/// One configured group: a name and a single-character pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSpec {
    pub name: String,
    pub pattern: String,
}

/// Deserialized groups configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupsConfig {
    /// Whether the host should redirect its word commands to this module
    #[serde(default = "default_true")]
    pub command_intercept: bool,

    /// Groups in resolution order
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

fn default_true() -> bool {
    true
}

impl GroupsConfig {
    /// Parses a configuration document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Compiles this configuration into a registry snapshot.
    ///
    /// Fails on the first non-compiling pattern, reporting the group name;
    /// no partial registry is produced.
    pub fn build(&self) -> Result<CharGroups, BuildError> {
        let groups = CharGroups::build(
            self.groups
                .iter()
                .map(|spec| (spec.name.as_str(), spec.pattern.as_str())),
        )?;
        Ok(groups.with_command_intercept(self.command_intercept))
    }
}

impl Default for GroupsConfig {
    /// The embedded default configuration.
    fn default() -> Self {
        Self::from_toml_str(DEFAULT_GROUPS_TOML).expect("embedded default groups config is valid")
    }
}
