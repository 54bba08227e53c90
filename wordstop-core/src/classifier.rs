//! Position classification
//!
//! Combines the host's native baseline with group-transition refinement. The
//! native classifier already handles line boundaries and ASCII word and
//! punctuation boundaries; this module adds the boundaries it cannot see,
//! the ones inside unspaced scripts, by comparing the character groups on
//! either side of a position.

use crate::attrs::BoundaryAttrs;
use crate::group::CharGroups;
use crate::source::TextSource;

/// Upper bound of the range the native classifier fully understands.
const NATIVE_RANGE_MAX: u32 = 0xFF;

/// Buckets the decision table is keyed on.
///
/// Group names are free-form, but the refinement rules distinguish exactly
/// four kinds: the unspaced script (`"slip"` by convention), punctuation
/// (`"punct"`), the ASCII fallback (`"ascii"`), and any other group,
/// configured or implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Slip,
    Punct,
    Ascii,
    Other,
}

impl Bucket {
    fn from_group(name: &str) -> Self {
        match name {
            "slip" => Bucket::Slip,
            "punct" => Bucket::Punct,
            "ascii" => Bucket::Ascii,
            _ => Bucket::Other,
        }
    }
}

/// The sentinel counts as in-range so document edges stay on the fast path.
fn native_range(ch: Option<char>) -> bool {
    ch.map_or(true, |ch| (ch as u32) <= NATIVE_RANGE_MAX)
}

/// Classifies the gap at `pos`, `0 <= pos <= text.len()`.
///
/// Starts from `native_classify` and refines it:
///
/// - if both neighbors are in the native range, the baseline is final;
/// - if both neighbors resolve to the same group, the baseline is final
///   (no boundary inside a homogeneous run);
/// - otherwise the gap is at least a sub-word boundary, and word and
///   punctuation bits are added according to the transition between the two
///   groups.
///
/// The guards against double-marking read the mask as accumulated so far,
/// so a bit contributed by the baseline (or by an earlier rule in the same
/// call) suppresses the corresponding addition. Space checks are against
/// the literal ASCII space only.
pub fn classify<T: TextSource + ?Sized>(text: &T, groups: &CharGroups, pos: usize) -> BoundaryAttrs {
    let mut attrs = text.native_classify(pos);

    let left = pos.checked_sub(1).and_then(|p| text.char_at(p));
    let right = text.char_at(pos);

    // Most gaps sit between two native-range characters; skip group
    // resolution entirely there.
    if native_range(left) && native_range(right) {
        return attrs;
    }

    let lgroup = groups.resolve_opt(left);
    let rgroup = groups.resolve_opt(right);
    if lgroup == rgroup {
        return attrs;
    }

    // A group transition is always at least a sub-word boundary.
    attrs |= BoundaryAttrs::SUB_WORD_START | BoundaryAttrs::SUB_WORD_END;

    let left_space = left == Some(' ');
    let right_space = right == Some(' ');
    // A WORD_END on the left is suppressed next to an existing punctuation
    // end or line start; symmetrically for WORD_START on the right.
    let leftward_block = BoundaryAttrs::PUNCTUATION_END | BoundaryAttrs::LINE_START;
    let rightward_block = BoundaryAttrs::PUNCTUATION_START | BoundaryAttrs::LINE_END;

    match (Bucket::from_group(rgroup), Bucket::from_group(lgroup)) {
        // Right side is the unspaced script.
        (Bucket::Slip, Bucket::Slip) => {}
        (Bucket::Slip, Bucket::Punct) => {
            attrs |= BoundaryAttrs::WORD_START | BoundaryAttrs::PUNCTUATION_END;
        }
        (Bucket::Slip, Bucket::Ascii) => {
            attrs |= BoundaryAttrs::WORD_START;
            if !left_space && !attrs.intersects(leftward_block) {
                attrs |= BoundaryAttrs::WORD_END;
            }
        }
        (Bucket::Slip, Bucket::Other) => {}

        // Right side is punctuation.
        (Bucket::Punct, lbucket) => {
            attrs |= BoundaryAttrs::PUNCTUATION_START;
            match lbucket {
                Bucket::Slip => attrs |= BoundaryAttrs::WORD_END,
                Bucket::Punct => {}
                Bucket::Ascii => {
                    if !left_space && !attrs.intersects(leftward_block) {
                        attrs |= BoundaryAttrs::WORD_END;
                    }
                }
                Bucket::Other => attrs |= BoundaryAttrs::WORD_END,
            }
        }

        // Right side is ASCII.
        (Bucket::Ascii, Bucket::Slip) | (Bucket::Ascii, Bucket::Other) => {
            attrs |= BoundaryAttrs::WORD_END;
            if !right_space && !attrs.intersects(rightward_block) {
                attrs |= BoundaryAttrs::WORD_START;
            }
        }
        (Bucket::Ascii, Bucket::Punct) => {
            attrs |= BoundaryAttrs::PUNCTUATION_END;
            if !right_space && !attrs.intersects(rightward_block) {
                attrs |= BoundaryAttrs::WORD_START;
            }
        }
        (Bucket::Ascii, Bucket::Ascii) => {}

        // Right side is any other script.
        (Bucket::Other, lbucket) => {
            attrs |= BoundaryAttrs::WORD_START;
            match lbucket {
                Bucket::Slip => attrs |= BoundaryAttrs::WORD_END,
                Bucket::Punct => attrs |= BoundaryAttrs::PUNCTUATION_END,
                Bucket::Ascii => {
                    if !left_space && !attrs.intersects(leftward_block) {
                        attrs |= BoundaryAttrs::WORD_END;
                    }
                }
                Bucket::Other => attrs |= BoundaryAttrs::WORD_END,
            }
        }
    }

    attrs
}
