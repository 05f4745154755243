//! Escaping of the three structurally significant characters

use std::borrow::Cow;

const ENTITIES: [(&str, char); 3] = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>')];

/// Escape `&`, `<` and `>` so plain text can live inside a rich string
///
/// The ampersand is replaced first so entities produced for `<` and `>`
/// are not escaped a second time.
pub fn encode_special(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Turn the three named entities back into raw characters
pub fn decode_special(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find('&') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Split literal text into visible units
///
/// A unit is one of the named entities or a single character; every unit
/// has a visible width of one.
pub(crate) fn visible_units(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        let ch = rest.chars().next()?;
        let len = if ch == '&' {
            ENTITIES
                .iter()
                .find(|(entity, _)| rest.starts_with(entity))
                .map_or(1, |(entity, _)| entity.len())
        } else {
            ch.len_utf8()
        };
        let (unit, tail) = rest.split_at(len);
        rest = tail;
        Some(unit)
    })
}

/// Escape every `&` that does not already start a named entity
pub(crate) fn escape_bare_ampersands(text: &str) -> Cow<'_, str> {
    if !visible_units(text).any(|unit| unit == "&") {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        visible_units(text)
            .map(|unit| if unit == "&" { "&amp;" } else { unit })
            .collect(),
    )
}
