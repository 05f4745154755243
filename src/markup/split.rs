//! Delimiter-based splitting that keeps every piece well-formed

use regex::Regex;

use super::clean::clean;
use super::entity::{decode_special, encode_special};
use super::kind::MarkupKind;
use super::lexer::{segments, Segment};
use super::stack::TagStack;

/// Split `text` on a literal delimiter
///
/// The delimiter is matched against the visible characters of literal text,
/// so `"<"` matches `&lt;` and `";"` never cuts an entity apart. Each piece
/// reopens the tags active where it starts and closes whatever is still
/// open where it ends. An empty delimiter returns the input as the only
/// piece.
pub fn split(text: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![text.to_string()];
    }
    split_with(text, |plain| plain.split(delimiter).collect())
}

/// Split `text` wherever `pattern` matches the visible characters of
/// literal text
pub fn split_pattern(text: &str, pattern: &Regex) -> Vec<String> {
    split_with(text, |plain| pattern.split(plain).collect())
}

/// Split `text` into lines
pub fn lines(text: &str) -> Vec<String> {
    split(text, "\n")
}

/// Rejoin pieces with a literal delimiter
pub fn join<S: AsRef<str>>(pieces: &[S], delimiter: &str) -> String {
    let delimiter = encode_special(delimiter);
    let joined = pieces
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(&delimiter);
    clean(&joined)
}

fn split_with<F>(text: &str, mut split_literal: F) -> Vec<String>
where
    F: FnMut(&str) -> Vec<&str>,
{
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut stack = TagStack::new();
    for segment in segments(text) {
        match segment {
            Segment::Tag(tag) => stack.emit(tag, &mut current),
            Segment::Literal(literal) => {
                // Match on decoded text, re-escape each part
                let plain = decode_special(&literal);
                let mut parts = split_literal(&plain).into_iter();
                if let Some(first) = parts.next() {
                    current.push_str(&encode_special(first));
                }
                for part in parts {
                    stack.write_closes(&mut current);
                    pieces.push(clean(&current));
                    current.clear();
                    stack.write_opens(&mut current);
                    current.push_str(&encode_special(part));
                }
            }
        }
    }
    stack.close_all(&mut current);
    pieces.push(clean(&current));
    pieces
}

/// Kinds open before the first visible character, outermost first
///
/// Used to carry formatting context across a pagination boundary.
pub fn get_start_tags(text: &str) -> Vec<MarkupKind> {
    let mut stack = TagStack::new();
    for segment in segments(text) {
        match segment {
            Segment::Tag(tag) => stack.apply(tag),
            Segment::Literal(literal) if literal.is_empty() => {}
            Segment::Literal(_) => break,
        }
    }
    stack.into_kinds()
}
