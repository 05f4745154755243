//! Tokenizer for rich strings using logos

use std::borrow::Cow;

use logos::Logos;

use super::entity::{encode_special, escape_bare_ampersands};
use super::kind::{MarkupKind, Tag};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawToken {
    // Longest match wins, so a terminated bracket beats the unterminated form
    #[regex(r"<[^<>]*>")]
    Bracketed,
    #[regex(r"<[^<>]*")]
    Unterminated,
    #[token(">")]
    StrayGreater,
    #[regex(r"[^<>]+")]
    Text,
}

/// A token of a rich string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// Literal text, entities still encoded
    Text(&'a str),
    /// A recognized open or close tag
    Tag(Tag),
    /// A tag-like fragment outside the vocabulary; treated as literal text
    Unknown(&'a str),
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token<'_>, Span)> + '_ {
    RawToken::lexer(input).spanned().map(move |(raw, span)| {
        let slice = &input[span.clone()];
        let token = match raw {
            Ok(RawToken::Text) => Token::Text(slice),
            Ok(RawToken::Bracketed) => Tag::parse(slice).map_or(Token::Unknown(slice), Token::Tag),
            Ok(RawToken::Unterminated) | Ok(RawToken::StrayGreater) | Err(_) => {
                Token::Unknown(slice)
            }
        };
        (token, span)
    })
}

/// Kind named by a raw tag token, with brackets and the closing slash stripped
pub fn tag_kind(raw: &str) -> Option<MarkupKind> {
    let name = raw.strip_prefix('<').unwrap_or(raw);
    let name = name.strip_suffix('>').unwrap_or(name);
    let name = name.strip_prefix('/').unwrap_or(name);
    MarkupKind::from_name(name)
}

/// True if `raw` is a complete open or close tag of a known kind
pub fn is_valid_tag(raw: &str) -> bool {
    Tag::parse(raw).is_some()
}

/// Token stream with unknown fragments folded into encoded literal text
///
/// Literal text comes out fully escaped: a bare `&` becomes `&amp;`, so it
/// cannot merge with neighbouring text into a different entity.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Segment<'a> {
    Literal(Cow<'a, str>),
    Tag(Tag),
}

pub(crate) fn segments(input: &str) -> impl Iterator<Item = Segment<'_>> + '_ {
    lex(input).map(|(token, _)| match token {
        Token::Text(text) => Segment::Literal(escape_bare_ampersands(text)),
        Token::Tag(tag) => Segment::Tag(tag),
        Token::Unknown(raw) => Segment::Literal(Cow::Owned(encode_special(raw))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token<'_>> {
        lex(input).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_text_and_tags() {
        assert_eq!(
            tokens("a<b>bold</B>c"),
            vec![
                Token::Text("a"),
                Token::Tag(Tag::Open(MarkupKind::Bold)),
                Token::Text("bold"),
                Token::Tag(Tag::Close(MarkupKind::Bold)),
                Token::Text("c"),
            ]
        );
    }

    #[test]
    fn test_unknown_fragments() {
        assert_eq!(
            tokens("<font>x<y"),
            vec![Token::Unknown("<font>"), Token::Text("x"), Token::Unknown("<y")]
        );
        assert_eq!(
            tokens("a>b"),
            vec![Token::Text("a"), Token::Unknown(">"), Token::Text("b")]
        );
    }

    #[test]
    fn test_nested_open_bracket_splits() {
        assert_eq!(
            tokens("<<i>"),
            vec![Token::Unknown("<"), Token::Tag(Tag::Open(MarkupKind::Italic))]
        );
    }

    #[test]
    fn test_spans_cover_input() {
        let spans: Vec<_> = lex("x<sub>2</sub>").map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..1, 1..6, 6..7, 7..13]);
    }

    #[test]
    fn test_tag_kind_strips_syntax() {
        assert_eq!(tag_kind("</U>"), Some(MarkupKind::Underline));
        assert_eq!(tag_kind("sup"), Some(MarkupKind::Superscript));
        assert_eq!(tag_kind("<span>"), None);
    }

    #[test]
    fn test_is_valid_tag() {
        assert!(is_valid_tag("<s>"));
        assert!(is_valid_tag("</S>"));
        assert!(!is_valid_tag("s"));
        assert!(!is_valid_tag("<strong>"));
    }

    #[test]
    fn test_segments_encode_unknown() {
        let segs: Vec<_> = segments("<x>").collect();
        assert_eq!(segs, vec![Segment::Literal(Cow::Owned("&lt;x&gt;".to_string()))]);
    }

    #[test]
    fn test_segments_escape_bare_ampersand() {
        let segs: Vec<_> = segments("&<b>lt;").collect();
        assert_eq!(
            segs,
            vec![
                Segment::Literal(Cow::Owned("&amp;".to_string())),
                Segment::Tag(Tag::Open(MarkupKind::Bold)),
                Segment::Literal(Cow::Borrowed("lt;")),
            ]
        );
    }
}
