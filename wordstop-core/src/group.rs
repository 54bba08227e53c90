//! Character group registry
//!
//! Groups partition characters by script so the classifier can detect
//! transitions: hiragana vs. punctuation vs. ASCII vs. everything else.
//! Resolution walks the groups in declaration order and the first matching
//! pattern wins, so overlapping patterns are legal and order is part of the
//! configuration's meaning.

use crate::error::BuildError;
use arc_swap::ArcSwap;
use regex::Regex;
use std::sync::Arc;

/// Implicit group for characters matching no configured pattern.
pub const OTHERS: &str = "others";

/// One named group: a single-character match predicate.
#[derive(Debug, Clone)]
pub struct CharGroup {
    name: String,
    pattern: Regex,
}

impl CharGroup {
    /// Compiles `pattern` into a group named `name`.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, BuildError> {
        let name = name.into();
        let pattern = match Regex::new(pattern) {
            Ok(pattern) => pattern,
            Err(source) => {
                return Err(BuildError::Pattern {
                    group: name,
                    source: Box::new(source),
                })
            }
        };
        Ok(Self { name, pattern })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tests the predicate against exactly one character.
    pub fn matches(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.pattern.is_match(ch.encode_utf8(&mut buf))
    }
}

/// An immutable snapshot of the configured character groups.
///
/// Built atomically: either every pattern compiles and a complete registry is
/// returned, or the first failure aborts the whole build and nothing changes
/// for the caller. The snapshot also carries the `command_intercept` flag for
/// integrations; nothing in the core reads it.
#[derive(Debug, Clone)]
pub struct CharGroups {
    groups: Vec<CharGroup>,
    command_intercept: bool,
}

impl CharGroups {
    /// Builds a registry from ordered `(name, pattern)` pairs.
    pub fn build<I, N, P>(specs: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: AsRef<str>,
    {
        let mut groups = Vec::new();
        for (name, pattern) in specs {
            groups.push(CharGroup::new(name, pattern.as_ref())?);
        }
        Ok(Self {
            groups,
            command_intercept: true,
        })
    }

    /// A registry with no configured groups: every character is `"others"`.
    pub fn empty() -> Self {
        Self {
            groups: Vec::new(),
            command_intercept: true,
        }
    }

    pub fn with_command_intercept(mut self, intercept: bool) -> Self {
        self.command_intercept = intercept;
        self
    }

    /// Whether the host should redirect its word commands to this module.
    pub fn command_intercept(&self) -> bool {
        self.command_intercept
    }

    /// Name of the first group whose predicate matches `ch`.
    pub fn resolve(&self, ch: char) -> &str {
        self.groups
            .iter()
            .find(|group| group.matches(ch))
            .map(CharGroup::name)
            .unwrap_or(OTHERS)
    }

    /// Like [`resolve`](Self::resolve), with the out-of-range sentinel
    /// resolving to `"others"`.
    pub fn resolve_opt(&self, ch: Option<char>) -> &str {
        match ch {
            Some(ch) => self.resolve(ch),
            None => OTHERS,
        }
    }

    /// Configured group names, in resolution order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(CharGroup::name)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl Default for CharGroups {
    fn default() -> Self {
        Self::empty()
    }
}

/// Shared handle to the active registry snapshot.
///
/// Classification runs against whatever snapshot `load` returns; a reload
/// builds a complete new registry first and publishes it with one atomic
/// store, so in-flight calls see either the old or the new registry, never a
/// mix. A failed rebuild publishes nothing.
#[derive(Debug)]
pub struct GroupsHandle {
    current: ArcSwap<CharGroups>,
}

impl GroupsHandle {
    pub fn new(groups: CharGroups) -> Self {
        Self {
            current: ArcSwap::from_pointee(groups),
        }
    }

    /// The active snapshot.
    pub fn load(&self) -> Arc<CharGroups> {
        self.current.load_full()
    }

    /// Replaces the active snapshot with an already-built registry.
    pub fn replace(&self, groups: CharGroups) {
        self.current.store(Arc::new(groups));
    }

    /// Builds a registry from `specs` and publishes it on success.
    ///
    /// On failure the active snapshot is left untouched.
    pub fn rebuild<I, N, P>(&self, specs: I) -> Result<(), BuildError>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: AsRef<str>,
    {
        let next = CharGroups::build(specs)?;
        self.current.store(Arc::new(next));
        Ok(())
    }
}

impl Default for GroupsHandle {
    fn default() -> Self {
        Self::new(CharGroups::empty())
    }
}
