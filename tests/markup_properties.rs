//! Integration tests for the invariants every markup operation upholds

use caption_markup::{
    clean, decode_special, encode_special, get_start_tags, is_well_formed, join, lines,
    remove_format, slice, split, visible_length, MarkupKind,
};
use pretty_assertions::assert_eq;

/// Inputs covering nesting, out-of-order closes, strays and entities
const SAMPLES: &[&str] = &[
    "",
    "plain text",
    "<b><i>hello</b>world</i>",
    "<b>Amazing <i>grace</i></b>, how <u>sweet\nthe</u> sound",
    "a</b>b",
    "<sup>x<sub>y</sup>z",
    "<b>1 &lt; 2 &amp;&amp; 3 &gt; 2</b>",
    "<S>strike<s>again</S>",
    "<i>\n\n</i>line\n<b>bold\n</b>",
    "x<font color=red>y</font>z",
    "<u><b><i>deep\nnest</u></b>ed</i>",
    "&<b></b>lt;",
    "a&b",
];

#[test]
fn test_encode_decode_round_trip() {
    for s in ["", "<b>", "Tom & Jerry", "&amp;lt;", "<<>>&&", "1 < 2 > 0"] {
        assert_eq!(decode_special(&encode_special(s)), s);
    }
}

#[test]
fn test_clean_idempotent() {
    for sample in SAMPLES {
        let once = clean(sample);
        assert_eq!(clean(&once), once, "sample: {sample:?}");
        assert!(is_well_formed(&once));
    }
}

#[test]
fn test_clean_preserves_visible_length() {
    for sample in SAMPLES {
        assert_eq!(visible_length(&clean(sample)), visible_length(sample), "sample: {sample:?}");
    }
}

#[test]
fn test_out_of_order_close_balance() {
    assert_eq!(clean("<b><i>hello</b>world</i>"), "<b><i>hello</i></b><i>world</i>");
}

#[test]
fn test_unmatched_closer_is_dropped() {
    assert_eq!(clean("a</b>b"), "ab");
}

#[test]
fn test_slice_bounds() {
    for sample in SAMPLES {
        let len = visible_length(sample);
        for a in 0..=len + 1 {
            for b in a..=len + 2 {
                let sliced = slice(sample, a..b);
                let expected = b.min(len).saturating_sub(a);
                assert_eq!(visible_length(&sliced), expected, "sample: {sample:?} {a}..{b}");
                assert!(is_well_formed(&sliced), "sample: {sample:?} {a}..{b} -> {sliced:?}");
            }
        }
    }
}

#[test]
fn test_slices_concatenate_to_plain_text() {
    for sample in SAMPLES {
        let len = visible_length(sample);
        for cut in 0..=len {
            let left = slice(sample, ..cut);
            let right = slice(sample, cut..);
            let rejoined = format!("{}{}", remove_format(&left), remove_format(&right));
            assert_eq!(rejoined, remove_format(&clean(sample)), "sample: {sample:?} cut {cut}");
        }
    }
}

#[test]
fn test_split_rejoin_preserves_content() {
    for sample in SAMPLES {
        for delimiter in ["\n", " ", "<", "ee", ";", "amp", "lt"] {
            let pieces = split(sample, delimiter);
            for piece in &pieces {
                assert!(is_well_formed(piece), "piece {piece:?} of {sample:?}");
            }
            let rejoined = join(&pieces, delimiter);
            assert_eq!(
                visible_length(&rejoined),
                visible_length(sample),
                "sample: {sample:?} delimiter {delimiter:?}"
            );
            assert_eq!(remove_format(&rejoined), remove_format(&clean(sample)));
        }
    }
}

#[test]
fn test_split_matches_visible_characters() {
    assert_eq!(split("x &amp; y", ";"), vec!["x &amp; y"]);
    assert_eq!(split("a&lt;b", "lt"), vec!["a&lt;b"]);
    assert_eq!(split("Tom &amp; Jerry", "amp"), vec!["Tom &amp; Jerry"]);
}

#[test]
fn test_bare_ampersand_is_escaped() {
    assert_eq!(clean("a&b"), "a&amp;b");
    assert_eq!(clean("&<b></b>lt;"), "&amp;lt;");
    assert_eq!(remove_format(&clean("&<b></b>lt;")), remove_format("&<b></b>lt;"));
}

#[test]
fn test_lines_carry_formatting() {
    let pieces = lines("<b>Amazing <i>grace\nhow</b> sweet</i>");
    assert_eq!(pieces, vec!["<b>Amazing <i>grace</i></b>", "<b><i>how</i></b><i> sweet</i>"]);
    assert_eq!(
        get_start_tags(&pieces[1]),
        vec![MarkupKind::Bold, MarkupKind::Italic]
    );
}

#[test]
fn test_unknown_tags_are_literal() {
    let text = "x<font>y";
    assert_eq!(visible_length(text), 8);
    assert_eq!(clean(text), "x&lt;font&gt;y");
    assert_eq!(slice(text, 1..7), "&lt;font&gt;");
}

#[test]
fn test_normalization_snapshots() {
    insta::assert_snapshot!(clean("<u><b><i>deep</u></b>ed</i>"), @"<u><b><i>deep</i></b></u><i>ed</i>");
    insta::assert_snapshot!(clean("<B>one<b>two"), @"<b>one</b><b>two</b>");
    insta::assert_snapshot!(slice("<sup>x<sub>y</sup>z", 1..3), @"<sup><sub>y</sub></sup><sub>z</sub>");
}
