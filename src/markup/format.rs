//! Editing helpers built on top of slicing and cleaning

use std::ops::RangeBounds;

use super::clean::clean;
use super::kind::MarkupKind;
use super::lexer::{segments, Segment};
use super::measure::{clamp_range, slice, visible_length};

/// True if `text` is already in normalized, well-formed shape
pub fn is_well_formed(text: &str) -> bool {
    clean(text) == text
}

/// Wrap the visible range `range` of `text` in `kind`
pub fn apply_format(text: &str, range: impl RangeBounds<usize>, kind: MarkupKind) -> String {
    let len = visible_length(text);
    let (from, to) = clamp_range(&range, len);
    if from >= to {
        return clean(text);
    }

    let mut out = slice(text, 0..from);
    out.push_str(kind.open_tag());
    out.push_str(&slice(text, from..to));
    out.push_str(kind.close_tag());
    out.push_str(&slice(text, to..len));
    clean(&out)
}

/// Remove every tag of `kind`, leaving other formatting intact
pub fn strip_kind(text: &str, kind: MarkupKind) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in segments(text) {
        match segment {
            Segment::Literal(literal) => out.push_str(&literal),
            Segment::Tag(tag) if tag.kind() == kind => {}
            Segment::Tag(tag) => out.push_str(tag.as_str()),
        }
    }
    clean(&out)
}
