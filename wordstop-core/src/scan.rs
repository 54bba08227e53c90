//! Directional stop search and word region construction
//!
//! A scan walks one position at a time away from its origin until it finds a
//! position whose classification intersects the caller's stop mask, clamping
//! at the document edges. Word regions are built from two such scans with
//! direction-specific stop masks.

use crate::attrs::BoundaryAttrs;
use crate::classifier::classify;
use crate::group::CharGroups;
use crate::source::TextSource;

/// Line boundaries stop every scan regardless of the requested kind.
const LINE_STOPS: BoundaryAttrs = BoundaryAttrs::LINE_START
    .union(BoundaryAttrs::LINE_END)
    .union(BoundaryAttrs::EMPTY_LINE);

/// Half-open `[start, end)` span of a selectable word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRegion {
    pub start: usize,
    pub end: usize,
}

impl WordRegion {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when `pos` falls inside the half-open span.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}

/// Region granularity: whether sub-word boundaries count as region edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Words,
    Subwords,
}

/// Caret motion kinds and their stop criteria.
///
/// Moving by `Words` stops where words or punctuation runs begin; the
/// `WordEnds` variant stops where they end. The sub-word variants add the
/// corresponding sub-word bit on top, so they stop everywhere the coarser
/// motion would and at script transitions besides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Words,
    WordEnds,
    Subwords,
    SubwordEnds,
}

impl Motion {
    /// The stop mask for this motion; line boundaries always stop.
    pub fn stop_mask(self) -> BoundaryAttrs {
        let mut mask = LINE_STOPS;
        match self {
            Motion::Words => {
                mask |= BoundaryAttrs::WORD_START | BoundaryAttrs::PUNCTUATION_START;
            }
            Motion::WordEnds => {
                mask |= BoundaryAttrs::WORD_END | BoundaryAttrs::PUNCTUATION_END;
            }
            Motion::Subwords => {
                mask |= BoundaryAttrs::SUB_WORD_START
                    | BoundaryAttrs::WORD_START
                    | BoundaryAttrs::PUNCTUATION_START;
            }
            Motion::SubwordEnds => {
                mask |= BoundaryAttrs::SUB_WORD_END
                    | BoundaryAttrs::WORD_END
                    | BoundaryAttrs::PUNCTUATION_END;
            }
        }
        mask
    }
}

/// Finds the nearest position in the given direction whose classification
/// intersects `stopper`.
///
/// The scan pre-steps before testing, so the origin itself never matches.
/// Stepping past either edge of the document returns the clamped edge
/// position instead; the scan is O(distance to the nearest stop).
pub fn find_stop<T: TextSource + ?Sized>(
    text: &T,
    groups: &CharGroups,
    pos: usize,
    forward: bool,
    stopper: BoundaryAttrs,
) -> usize {
    let mut pos = pos;
    loop {
        if forward {
            pos += 1;
            if pos >= text.len() {
                return text.len();
            }
        } else {
            match pos.checked_sub(1) {
                Some(prev) => pos = prev,
                None => return 0,
            }
        }

        if classify(text, groups, pos).intersects(stopper) {
            return pos;
        }
    }
}

/// The word region enclosing `point` at the requested granularity.
///
/// A point carrying WORD_END but not WORD_START sits just past a word, in
/// the gap before whatever comes next; it is moved one position left so the
/// preceding word is the one selected. The backward scan then starts at
/// `point + 1` to compensate for the scanner's pre-step, letting a boundary
/// exactly at `point` terminate it.
pub fn word_region<T: TextSource + ?Sized>(
    text: &T,
    groups: &CharGroups,
    point: usize,
    granularity: Granularity,
) -> WordRegion {
    let mut point = point;

    let attrs = classify(text, groups, point);
    if attrs.contains(BoundaryAttrs::WORD_END) && !attrs.contains(BoundaryAttrs::WORD_START) {
        point = point.saturating_sub(1);
    }

    let mut backward_stop = LINE_STOPS | BoundaryAttrs::WORD_START | BoundaryAttrs::PUNCTUATION_START;
    let mut frontward_stop = LINE_STOPS | BoundaryAttrs::WORD_END | BoundaryAttrs::PUNCTUATION_END;
    if granularity == Granularity::Subwords {
        backward_stop |= BoundaryAttrs::SUB_WORD_START;
        frontward_stop |= BoundaryAttrs::SUB_WORD_END;
    }

    let start = find_stop(text, groups, point + 1, false, backward_stop);
    let end = find_stop(text, groups, point, true, frontward_stop);

    WordRegion::new(start, end)
}
