//! Caption Markup - an inline markup engine for captions and lyrics
//!
//! Captions are stored as plain strings carrying a small tag vocabulary
//! (`<b>`, `<i>`, `<u>`, `<s>`, `<sub>`, `<sup>`). This library measures,
//! slices, splits and paginates such strings, repairs malformed markup and
//! fills in `{name:fallback}` placeholders, always returning well-formed
//! markup.
//!
//! # Example
//!
//! ```rust
//! use caption_markup::{clean, distribute_lines, slice, visible_length};
//!
//! let text = clean("<b><i>hello</b>world</i>");
//! assert_eq!(text, "<b><i>hello</i></b><i>world</i>");
//! assert_eq!(visible_length(&text), 10);
//! assert_eq!(slice(&text, 3..7), "<b><i>lo</i></b><i>wo</i>");
//!
//! let parts = distribute_lines("a\nb\nc\nd\ne", 4, false);
//! assert_eq!(parts, vec!["a\nb\nc", "d\ne"]);
//! ```

pub mod error;
pub mod markup;
pub mod paginate;
pub mod placeholder;
pub mod settings;

pub use error::DataError;
pub use markup::{
    apply_format, clean, decode_special, encode_special, get_start_tags, is_valid_tag,
    is_well_formed, join, lines, remove_format, slice, split, split_pattern, strip_kind, tag_kind,
    visible_length, MarkupKind, Tag,
};
pub use paginate::{distribute_lines, paginate, split_lines, PaginationConfig};
pub use placeholder::{data_replace, data_replace_json, PlaceholderData};
pub use settings::{ConfigError, Settings};
