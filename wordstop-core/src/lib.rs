//! Unicode-aware word boundary classification for editor text
//!
//! Editors classify a caret position with an ASCII-oriented bitmask: word
//! starts and ends, punctuation runs, line boundaries. That model breaks
//! down on scripts written without spaces between words, where an entire
//! sentence becomes one native "word". This crate refines the native mask by
//! partitioning characters into configurable groups (hiragana, katakana,
//! fullwidth punctuation, the ASCII range, everything else) and deriving
//! word, punctuation and sub-word boundaries from group transitions.
//!
//! # Architecture
//!
//! - [`attrs`]: the attribute bitmask and its debug formatter
//! - [`group`]: the character group registry and its atomic snapshot handle
//! - [`config`]: the TOML configuration model with embedded defaults
//! - [`source`]: the text access trait and a reference implementation
//! - [`classifier`]: the boundary classification algorithm
//! - [`scan`]: directional stop search and word region construction
//!
//! # Example
//!
//! ```rust
//! use wordstop_core::{classify, word_region, BoundaryAttrs, Granularity, GroupsConfig, PlainText};
//!
//! let groups = GroupsConfig::default().build().unwrap();
//! let text = PlainText::new("abcひらがな、漢字");
//!
//! // The gap between "abc" and "ひらがな" both ends and starts a word.
//! let attrs = classify(&text, &groups, 3);
//! assert!(attrs.contains(BoundaryAttrs::WORD_START | BoundaryAttrs::WORD_END));
//!
//! // Double-clicking inside the Kanji run selects exactly that run.
//! let region = word_region(&text, &groups, 8, Granularity::Words);
//! assert_eq!(text.slice(region.start, region.end), "漢字");
//! ```

pub mod attrs;
pub mod classifier;
pub mod config;
pub mod error;
pub mod group;
pub mod scan;
pub mod source;

pub use attrs::{explain, BoundaryAttrs};
pub use classifier::classify;
pub use config::{GroupSpec, GroupsConfig, DEFAULT_GROUPS_TOML};
pub use error::{BuildError, ConfigError};
pub use group::{CharGroup, CharGroups, GroupsHandle, OTHERS};
pub use scan::{find_stop, word_region, Granularity, Motion, WordRegion};
pub use source::{PlainText, TextSource};
