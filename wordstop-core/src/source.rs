//! Text access primitives required from the host buffer
//!
//! The classifier needs exactly three things from a document: its length, a
//! character at an offset, and the host's native classification for a
//! position. Modeling these as a trait keeps the core independent of any
//! concrete buffer and lets tests substitute fakes.

use crate::attrs::BoundaryAttrs;

/// Read access to a document, in character offsets.
///
/// Positions denote gaps: position `pos` sits between character `pos - 1`
/// and character `pos`, so valid positions run from `0` to `len()`
/// inclusive.
pub trait TextSource {
    /// Document length in characters.
    fn len(&self) -> usize;

    /// True when the document contains no characters.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character at `pos`, or `None` outside `0..len()`.
    ///
    /// The `None` sentinel compares unequal to every real character and
    /// matches no configured group.
    fn char_at(&self, pos: usize) -> Option<char>;

    /// The host's native classification of `pos`.
    ///
    /// This baseline encodes line boundaries and the ASCII-oriented word and
    /// punctuation boundaries; the classifier refines it, never replaces it.
    fn native_classify(&self, pos: usize) -> BoundaryAttrs;
}

/// Coarse native character classes mirroring the host editor's view of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NativeClass {
    Word,
    Space,
    Punct,
}

impl NativeClass {
    fn from_char(ch: char) -> Self {
        if ch.is_alphanumeric() || ch == '_' {
            NativeClass::Word
        } else if ch.is_whitespace() {
            NativeClass::Space
        } else {
            NativeClass::Punct
        }
    }
}

/// An in-memory document with the reference native classifier.
///
/// Reproduces the host's ASCII-era semantics: alphanumerics and `_` are word
/// characters, whitespace separates, everything else is punctuation. Every
/// non-separator script therefore forms one long native word, which is
/// exactly the behavior the group-transition rules exist to refine.
#[derive(Debug, Clone, Default)]
pub struct PlainText {
    chars: Vec<char>,
}

impl PlainText {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// The characters in `start..end`, collected back into a string.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }
}

impl From<&str> for PlainText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl TextSource for PlainText {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    fn native_classify(&self, pos: usize) -> BoundaryAttrs {
        let left = pos.checked_sub(1).and_then(|p| self.char_at(p));
        let right = self.char_at(pos);

        let mut attrs = BoundaryAttrs::empty();

        let line_start = matches!(left, None | Some('\n'));
        let line_end = matches!(right, None | Some('\n'));
        if line_start {
            attrs |= BoundaryAttrs::LINE_START;
        }
        if line_end {
            attrs |= BoundaryAttrs::LINE_END;
        }
        if line_start && line_end {
            attrs |= BoundaryAttrs::EMPTY_LINE;
        }

        let lclass = left.map(NativeClass::from_char);
        let rclass = right.map(NativeClass::from_char);

        let left_word = lclass == Some(NativeClass::Word);
        let right_word = rclass == Some(NativeClass::Word);
        let left_punct = lclass == Some(NativeClass::Punct);
        let right_punct = rclass == Some(NativeClass::Punct);

        if right_word && !left_word {
            attrs |= BoundaryAttrs::WORD_START;
        }
        if left_word && !right_word {
            attrs |= BoundaryAttrs::WORD_END;
        }
        if right_punct && !left_punct {
            attrs |= BoundaryAttrs::PUNCTUATION_START;
        }
        if left_punct && !right_punct {
            attrs |= BoundaryAttrs::PUNCTUATION_END;
        }

        attrs
    }
}
