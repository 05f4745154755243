//! Inline markup engine
//!
//! Rich strings are plain `&str` values holding literal text interleaved
//! with `<b>`, `<i>`, `<u>`, `<s>`, `<sub>` and `<sup>` tags. Literal `<`,
//! `>` and `&` are stored as entities. Every operation here takes rich
//! strings by reference and returns new, well-formed ones.

mod clean;
mod entity;
mod format;
mod kind;
pub mod lexer;
mod measure;
mod split;
mod stack;

pub use clean::clean;
pub use entity::{decode_special, encode_special};
pub use format::{apply_format, is_well_formed, strip_kind};
pub use kind::{MarkupKind, Tag};
pub use lexer::{is_valid_tag, lex, tag_kind, Token};
pub use measure::{remove_format, slice, visible_length};
pub use split::{get_start_tags, join, lines, split, split_pattern};
pub use stack::TagStack;
