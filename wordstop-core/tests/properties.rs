//! Property tests for the classification and scanning invariants.

use proptest::prelude::*;
use wordstop_core::{
    classify, find_stop, word_region, BoundaryAttrs, CharGroups, Granularity, Motion, PlainText,
    TextSource,
};

fn groups() -> CharGroups {
    CharGroups::build([
        ("slip", r"[\u{3041}-\u{309F}]"),
        ("punct", "[、。]"),
        ("ascii", r"[\u{0000}-\u{00FF}]"),
        ("kata", r"[\u{30A1}-\u{30FA}\u{30FC}]"),
    ])
    .unwrap()
}

/// Mixed-script documents drawn from every group plus whitespace.
fn mixed_text() -> impl Strategy<Value = String> {
    const ALPHABET: [char; 19] = [
        'a', 'Z', '_', '7', ',', '.', ' ', '\t', '\n', 'ひ', 'ら', 'な', 'カ', 'ナ', 'ー', '漢',
        '字', '、', '。',
    ];

    proptest::collection::vec(proptest::sample::select(ALPHABET.to_vec()), 0..32)
        .prop_map(|chars| chars.into_iter().collect())
}

fn any_motion() -> impl Strategy<Value = Motion> {
    prop_oneof![
        Just(Motion::Words),
        Just(Motion::WordEnds),
        Just(Motion::Subwords),
        Just(Motion::SubwordEnds),
    ]
}

proptest! {
    #[test]
    fn ascii_gaps_match_the_native_baseline(text in mixed_text(), pos in 0usize..33) {
        let doc = PlainText::new(&text);
        let pos = pos.min(doc.len());
        let groups = groups();

        let left = pos.checked_sub(1).and_then(|p| doc.char_at(p));
        let right = doc.char_at(pos);
        let ascii = |ch: Option<char>| ch.map_or(true, |c| (c as u32) <= 0xFF);

        if ascii(left) && ascii(right) {
            prop_assert_eq!(classify(&doc, &groups, pos), doc.native_classify(pos));
        }
    }

    #[test]
    fn same_group_gaps_match_the_native_baseline(text in mixed_text(), pos in 0usize..33) {
        let doc = PlainText::new(&text);
        let pos = pos.min(doc.len());
        let groups = groups();

        if groups.resolve_opt(pos.checked_sub(1).and_then(|p| doc.char_at(p)))
            == groups.resolve_opt(doc.char_at(pos))
        {
            prop_assert_eq!(classify(&doc, &groups, pos), doc.native_classify(pos));
        }
    }

    #[test]
    fn cross_group_gaps_carry_subword_bits(text in mixed_text(), pos in 0usize..33) {
        let doc = PlainText::new(&text);
        let pos = pos.min(doc.len());
        let groups = groups();

        let left = pos.checked_sub(1).and_then(|p| doc.char_at(p));
        let right = doc.char_at(pos);
        let ascii = |ch: Option<char>| ch.map_or(true, |c| (c as u32) <= 0xFF);

        if !(ascii(left) && ascii(right))
            && groups.resolve_opt(left) != groups.resolve_opt(right)
        {
            let attrs = classify(&doc, &groups, pos);
            prop_assert!(attrs.contains(BoundaryAttrs::SUB_WORD_START));
            prop_assert!(attrs.contains(BoundaryAttrs::SUB_WORD_END));
            prop_assert!(attrs.contains(doc.native_classify(pos)));
        }
    }

    #[test]
    fn find_stop_is_monotonic_and_clamped(
        text in mixed_text(),
        pos in 0usize..33,
        motion in any_motion(),
        forward in any::<bool>(),
    ) {
        let doc = PlainText::new(&text);
        let pos = pos.min(doc.len());
        let stop = find_stop(&doc, &groups(), pos, forward, motion.stop_mask());

        prop_assert!(stop <= doc.len());
        if forward {
            prop_assert!(stop >= pos.min(doc.len()));
            prop_assert!(stop > pos || pos == doc.len());
        } else {
            prop_assert!(stop <= pos);
            prop_assert!(stop < pos || pos == 0);
        }

        // Anything short of the document edge must actually be a stopper.
        if stop != 0 && stop != doc.len() {
            prop_assert!(classify(&doc, &groups(), stop).intersects(motion.stop_mask()));
        }
    }

    #[test]
    fn word_region_is_ordered_and_bounded(
        text in mixed_text(),
        point in 0usize..33,
        subwords in any::<bool>(),
    ) {
        let doc = PlainText::new(&text);
        let point = point.min(doc.len());
        let granularity = if subwords { Granularity::Subwords } else { Granularity::Words };

        let region = word_region(&doc, &groups(), point, granularity);
        prop_assert!(region.start <= region.end);
        prop_assert!(region.end <= doc.len());
    }

    #[test]
    fn word_region_edges_are_boundaries(
        text in mixed_text(),
        point in 0usize..33,
        subwords in any::<bool>(),
    ) {
        let doc = PlainText::new(&text);
        let point = point.min(doc.len());
        let groups = groups();
        let granularity = if subwords { Granularity::Subwords } else { Granularity::Words };

        let region = word_region(&doc, &groups, point, granularity);

        let line = BoundaryAttrs::LINE_START | BoundaryAttrs::LINE_END | BoundaryAttrs::EMPTY_LINE;
        let mut starters = line | BoundaryAttrs::WORD_START | BoundaryAttrs::PUNCTUATION_START;
        let mut enders = line | BoundaryAttrs::WORD_END | BoundaryAttrs::PUNCTUATION_END;
        if granularity == Granularity::Subwords {
            starters |= BoundaryAttrs::SUB_WORD_START;
            enders |= BoundaryAttrs::SUB_WORD_END;
        }

        prop_assert!(classify(&doc, &groups, region.start).intersects(starters));
        prop_assert!(classify(&doc, &groups, region.end).intersects(enders));
    }

    #[test]
    fn word_region_is_stable_inside_whitespace_free_regions(
        text in mixed_text(),
        point in 0usize..33,
        subwords in any::<bool>(),
    ) {
        let doc = PlainText::new(&text);
        let point = point.min(doc.len());
        let groups = groups();
        let granularity = if subwords { Granularity::Subwords } else { Granularity::Words };

        let region = word_region(&doc, &groups, point, granularity);
        if doc.slice(region.start, region.end).chars().any(char::is_whitespace) {
            return Ok(());
        }

        for inner in region.start + 1..region.end {
            prop_assert_eq!(
                word_region(&doc, &groups, inner, granularity),
                region,
                "re-query at {} diverged",
                inner
            );
        }
    }
}
