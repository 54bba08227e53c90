//! Error types for registry construction and configuration loading

use thiserror::Error;

/// Error from building a character group registry.
///
/// A build fails as a whole: no partially compiled registry is ever returned,
/// and callers holding a previous registry keep using it.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A group pattern failed to compile
    #[error("character group `{group}` has an invalid pattern: {source}")]
    Pattern {
        group: String,
        #[source]
        source: Box<regex::Error>,
    },
}

impl BuildError {
    /// Name of the group whose pattern failed to compile.
    pub fn group(&self) -> &str {
        match self {
            BuildError::Pattern { group, .. } => group,
        }
    }
}

/// Error from loading a groups configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid TOML
    #[error("failed to parse groups configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but a group pattern did not compile
    #[error(transparent)]
    Build(#[from] BuildError),
}
