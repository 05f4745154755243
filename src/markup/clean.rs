//! Normalization of arbitrary input into well-formed markup

use super::kind::Tag;
use super::lexer::{segments, Segment};
use super::stack::TagStack;

/// Rebuild `text` as well-formed markup
///
/// Stray closers are dropped, a repeated opener restarts its tag, tags
/// closed out of order are closed and reopened around the removal, and
/// anything left open at the end is closed. Unrecognized tag-like
/// fragments and bare ampersands become escaped literal text. Tag pairs
/// that end up wrapping nothing (or only newlines) are removed.
pub fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut stack = TagStack::new();
    for segment in segments(text) {
        match segment {
            Segment::Literal(literal) => out.push_str(&literal),
            Segment::Tag(tag) => stack.emit(tag, &mut out),
        }
    }
    stack.close_all(&mut out);
    remove_empty_pairs(&out)
}

enum Piece {
    Text(String),
    Tag(Tag),
}

fn push_text(pieces: &mut Vec<Piece>, text: &str) {
    if text.is_empty() {
        return;
    }
    match pieces.last_mut() {
        Some(Piece::Text(last)) => last.push_str(text),
        _ => pieces.push(Piece::Text(text.to_string())),
    }
}

fn is_newlines(text: &str) -> bool {
    text.chars().all(|c| c == '\n' || c == '\r')
}

/// Drop open/close pairs of one kind with nothing but newlines between them
///
/// Input must already be properly nested. Removal cascades outward, so
/// `<b><i></i></b>` disappears entirely.
fn remove_empty_pairs(markup: &str) -> String {
    let mut pieces: Vec<Piece> = Vec::new();
    for segment in segments(markup) {
        match segment {
            Segment::Literal(text) => push_text(&mut pieces, &text),
            Segment::Tag(Tag::Close(kind)) => {
                // Some(kept newlines) when the close ends an empty pair
                let empty = match pieces.as_slice() {
                    [.., Piece::Tag(Tag::Open(k))] if *k == kind => Some(String::new()),
                    [.., Piece::Tag(Tag::Open(k)), Piece::Text(t)] if *k == kind && is_newlines(t) => {
                        Some(t.clone())
                    }
                    _ => None,
                };
                match empty {
                    Some(newlines) => {
                        if !newlines.is_empty() {
                            pieces.pop();
                        }
                        pieces.pop();
                        push_text(&mut pieces, &newlines);
                    }
                    None => pieces.push(Piece::Tag(Tag::Close(kind))),
                }
            }
            Segment::Tag(tag) => pieces.push(Piece::Tag(tag)),
        }
    }

    let mut out = String::with_capacity(markup.len());
    for piece in &pieces {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Tag(tag) => out.push_str(tag.as_str()),
        }
    }
    out
}
