//! Boundary attribute masks
//!
//! A position in a document is the gap between two adjacent characters, and
//! its classification is a set of attribute bits, not a single variant: a gap
//! can simultaneously end one word and start another. The bit values match
//! the host editor's native classification constants so native masks and
//! refined masks can be combined freely.

use bitflags::bitflags;
use core::fmt;

bitflags! {
    /// Classification of a gap between two adjacent characters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct BoundaryAttrs: u16 {
        /// A word begins at this position
        const WORD_START = 1;
        /// A word ends at this position
        const WORD_END = 1 << 1;
        /// A punctuation run begins at this position
        const PUNCTUATION_START = 1 << 2;
        /// A punctuation run ends at this position
        const PUNCTUATION_END = 1 << 3;
        /// A sub-word begins at this position
        const SUB_WORD_START = 1 << 4;
        /// A sub-word ends at this position
        const SUB_WORD_END = 1 << 5;
        /// Position is at the start of a line
        const LINE_START = 1 << 6;
        /// Position is at the end of a line
        const LINE_END = 1 << 7;
        /// Position is on an empty line
        const EMPTY_LINE = 1 << 8;
    }
}

/// Label table in the editor's canonical order.
const LABELS: [(&str, BoundaryAttrs); 9] = [
    ("WORD_START", BoundaryAttrs::WORD_START),
    ("WORD_END", BoundaryAttrs::WORD_END),
    ("PUNCTUATION_START", BoundaryAttrs::PUNCTUATION_START),
    ("PUNCTUATION_END", BoundaryAttrs::PUNCTUATION_END),
    ("SUB_WORD_START", BoundaryAttrs::SUB_WORD_START),
    ("SUB_WORD_END", BoundaryAttrs::SUB_WORD_END),
    ("LINE_START", BoundaryAttrs::LINE_START),
    ("LINE_END", BoundaryAttrs::LINE_END),
    ("EMPTY_LINE", BoundaryAttrs::EMPTY_LINE),
];

/// Renders a raw attribute mask as a comma-joined list of symbol names.
///
/// Bits with no known symbol are appended as one binary literal, so masks
/// coming back from the host with undocumented bits stay inspectable.
/// An all-zero mask renders as `"(none)"`.
pub fn explain(raw: u16) -> String {
    let attrs = BoundaryAttrs::from_bits_retain(raw);

    let mut parts: Vec<String> = LABELS
        .iter()
        .filter(|(_, flag)| attrs.contains(*flag))
        .map(|(name, _)| (*name).to_string())
        .collect();

    let unknown = raw & !BoundaryAttrs::all().bits();
    if unknown != 0 {
        parts.push(format!("{unknown:#b}"));
    }

    if parts.is_empty() {
        "(none)".to_string()
    } else {
        parts.join(", ")
    }
}

impl fmt::Display for BoundaryAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", explain(self.bits()))
    }
}
