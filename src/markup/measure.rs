//! Visible length, offset-addressed slicing and plain-text extraction

use std::ops::{Bound, RangeBounds};

use super::clean::clean;
use super::entity::{decode_special, visible_units};
use super::lexer::{lex, segments, Segment, Token};
use super::stack::TagStack;

/// Number of visible characters in `text`
///
/// Tags are zero-width and each named entity counts as one character.
/// Unrecognized tag-like fragments are literal text and count in full.
pub fn visible_length(text: &str) -> usize {
    segments(text)
        .map(|segment| match segment {
            Segment::Literal(literal) => visible_units(&literal).count(),
            Segment::Tag(_) => 0,
        })
        .sum()
}

/// Extract the visible range `range` of `text` as well-formed markup
///
/// Tags active at the start of the range are reopened and tags still open
/// at its end are closed. Offsets clamp to the visible length; an empty or
/// inverted range yields an empty string. A fully unbounded range (`..`)
/// returns `text` untouched.
pub fn slice(text: &str, range: impl RangeBounds<usize>) -> String {
    if let (Bound::Unbounded, Bound::Unbounded) = (range.start_bound(), range.end_bound()) {
        return text.to_string();
    }
    let (from, to) = clamp_range(&range, visible_length(text));
    if from >= to {
        return String::new();
    }

    let mut out = String::new();
    let mut stack = TagStack::new();
    let mut pos = 0;
    let mut started = false;
    'walk: for segment in segments(text) {
        match segment {
            Segment::Tag(tag) if started => stack.emit(tag, &mut out),
            Segment::Tag(tag) => stack.apply(tag),
            Segment::Literal(literal) => {
                for unit in visible_units(&literal) {
                    if pos >= to {
                        break 'walk;
                    }
                    if pos >= from {
                        if !started {
                            stack.write_opens(&mut out);
                            started = true;
                        }
                        out.push_str(unit);
                    }
                    pos += 1;
                }
                if pos >= to {
                    break 'walk;
                }
            }
        }
    }
    stack.close_all(&mut out);
    clean(&out)
}

/// Resolve `range` to `(from, to)` offsets clamped to `len`
pub(crate) fn clamp_range(range: &impl RangeBounds<usize>, len: usize) -> (usize, usize) {
    let from = match range.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let to = match range.end_bound() {
        Bound::Included(&n) => n.saturating_add(1),
        Bound::Excluded(&n) => n,
        Bound::Unbounded => len,
    };
    (from.min(len), to.min(len))
}

/// Strip every tag and decode entities, yielding plain text
pub fn remove_format(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    for (token, _) in lex(text) {
        match token {
            Token::Text(literal) => plain.push_str(&decode_special(literal)),
            Token::Unknown(raw) => plain.push_str(raw),
            Token::Tag(_) => {}
        }
    }
    plain
}
