//! Substitution of `{name}` and `{name:fallback}` placeholders
//!
//! Names and fallbacks may themselves carry markup. Tags found inside a
//! placeholder are kept in the output as-is so that a tag opened or closed
//! across the placeholder boundary stays balanced with its partner outside.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::DataError;
use crate::markup::{decode_special, encode_special, lex, Token};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^{}\n]*\}").expect("placeholder pattern should compile"));

/// A flat record of plain string values looked up by name
pub trait PlaceholderData {
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl PlaceholderData for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl PlaceholderData for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Non-string JSON values count as missing
impl PlaceholderData for serde_json::Map<String, serde_json::Value> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(serde_json::Value::as_str)
    }
}

/// Replace every placeholder in `text` with its value from `data`
///
/// A present, non-blank value replaces the placeholder (escaped), followed
/// by any tags written inside it. Otherwise the fallback is used when one
/// was given, and failing that the placeholder is left untouched.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use caption_markup::data_replace;
///
/// let mut data = HashMap::new();
/// data.insert("name".to_string(), "Ann".to_string());
/// assert_eq!(data_replace("Hi {name:Guest}!", &data), "Hi Ann!");
/// assert_eq!(data_replace("Hi {name:Guest}!", &HashMap::<String, String>::new()), "Hi Guest!");
/// ```
pub fn data_replace<D: PlaceholderData + ?Sized>(text: &str, data: &D) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| resolve(&caps[0], data))
        .into_owned()
}

/// Like [`data_replace`], for a record that arrives as untyped JSON
pub fn data_replace_json(text: &str, data: &serde_json::Value) -> Result<String, DataError> {
    match data.as_object() {
        Some(map) => Ok(data_replace(text, map)),
        None => Err(DataError::not_an_object(data)),
    }
}

fn resolve<D: PlaceholderData + ?Sized>(expr: &str, data: &D) -> String {
    let inner = &expr[1..expr.len() - 1];
    let (name_expr, fallback_expr) = match inner.split_once(':') {
        Some((name, fallback)) => (name, Some(fallback)),
        None => (inner, None),
    };

    let (name, name_tags) = separate_tags(name_expr);
    let name = name.trim();

    if let Some(value) = data.lookup(name).filter(|v| !v.trim().is_empty()) {
        let fallback_tags = fallback_expr
            .map(|fallback| separate_tags(fallback).1)
            .unwrap_or_default();
        return format!("{}{}{}", encode_special(value), name_tags, fallback_tags);
    }

    match fallback_expr {
        Some(fallback) => format!("{}{}", name_tags, fallback),
        None => {
            log::debug!("unresolved placeholder {expr}");
            expr.to_string()
        }
    }
}

/// Split an expression into its plain text and its tags, in source order
fn separate_tags(expr: &str) -> (String, String) {
    let mut plain = String::new();
    let mut tags = String::new();
    for (token, span) in lex(expr) {
        match token {
            Token::Text(text) => plain.push_str(&decode_special(text)),
            Token::Unknown(raw) => plain.push_str(raw),
            Token::Tag(_) => tags.push_str(&expr[span]),
        }
    }
    (plain, tags)
}
