//! The closed vocabulary of inline markup kinds

use std::fmt;

/// One of the six supported inline style kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Subscript,
    Superscript,
}

impl MarkupKind {
    /// Every kind, in declaration order
    pub const ALL: [MarkupKind; 6] = [
        MarkupKind::Bold,
        MarkupKind::Italic,
        MarkupKind::Underline,
        MarkupKind::Strikethrough,
        MarkupKind::Subscript,
        MarkupKind::Superscript,
    ];

    /// Canonical (lowercase) tag name
    pub fn name(self) -> &'static str {
        match self {
            MarkupKind::Bold => "b",
            MarkupKind::Italic => "i",
            MarkupKind::Underline => "u",
            MarkupKind::Strikethrough => "s",
            MarkupKind::Subscript => "sub",
            MarkupKind::Superscript => "sup",
        }
    }

    /// Look up a kind by tag name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            MarkupKind::Bold => "<b>",
            MarkupKind::Italic => "<i>",
            MarkupKind::Underline => "<u>",
            MarkupKind::Strikethrough => "<s>",
            MarkupKind::Subscript => "<sub>",
            MarkupKind::Superscript => "<sup>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            MarkupKind::Bold => "</b>",
            MarkupKind::Italic => "</i>",
            MarkupKind::Underline => "</u>",
            MarkupKind::Strikethrough => "</s>",
            MarkupKind::Subscript => "</sub>",
            MarkupKind::Superscript => "</sup>",
        }
    }
}

impl fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MarkupKind::Bold => "bold",
            MarkupKind::Italic => "italic",
            MarkupKind::Underline => "underline",
            MarkupKind::Strikethrough => "strikethrough",
            MarkupKind::Subscript => "subscript",
            MarkupKind::Superscript => "superscript",
        };
        f.write_str(label)
    }
}

/// A recognized tag token in one of its two syntactic forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Open(MarkupKind),
    Close(MarkupKind),
}

impl Tag {
    pub fn kind(self) -> MarkupKind {
        match self {
            Tag::Open(kind) | Tag::Close(kind) => kind,
        }
    }

    /// Canonical source text of the tag
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Open(kind) => kind.open_tag(),
            Tag::Close(kind) => kind.close_tag(),
        }
    }

    /// Parse a full bracketed tag such as `<B>` or `</sup>`
    pub fn parse(raw: &str) -> Option<Self> {
        let inner = raw.strip_prefix('<')?.strip_suffix('>')?;
        match inner.strip_prefix('/') {
            Some(name) => MarkupKind::from_name(name).map(Tag::Close),
            None => MarkupKind::from_name(inner).map(Tag::Open),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(MarkupKind::from_name("B"), Some(MarkupKind::Bold));
        assert_eq!(MarkupKind::from_name("SuP"), Some(MarkupKind::Superscript));
        assert_eq!(MarkupKind::from_name("font"), None);
        assert_eq!(MarkupKind::from_name(""), None);
    }

    #[test]
    fn test_tag_strings_round_trip() {
        for kind in MarkupKind::ALL {
            assert_eq!(Tag::parse(kind.open_tag()), Some(Tag::Open(kind)));
            assert_eq!(Tag::parse(kind.close_tag()), Some(Tag::Close(kind)));
        }
    }

    #[test]
    fn test_parse_rejects_partial_tags() {
        assert_eq!(Tag::parse("<b"), None);
        assert_eq!(Tag::parse("b>"), None);
        assert_eq!(Tag::parse("<//b>"), None);
        assert_eq!(Tag::parse("< b>"), None);
    }

    #[test]
    fn test_display_uses_long_names() {
        assert_eq!(MarkupKind::Strikethrough.to_string(), "strikethrough");
    }
}
