//! Distribution of caption lines across a bounded number of slides

mod config;

pub use config::PaginationConfig;

use crate::markup::{join, lines, remove_format};

/// Group the lines of `text` into parts of at most `max_lines` lines
///
/// Parts are balanced rather than filled greedily: five lines with a limit
/// of four become parts of three and two, not four and one. With
/// `trim_end`, trailing blank lines are dropped first (one line is always
/// kept). A limit of 0, or text that already fits, yields a single part.
pub fn distribute_lines(text: &str, max_lines: usize, trim_end: bool) -> Vec<String> {
    let mut lines = lines(text);
    if trim_end {
        while lines.len() > 1 && lines.last().is_some_and(|line| is_blank(line)) {
            lines.pop();
        }
    }

    if max_lines == 0 || lines.len() <= max_lines {
        return vec![join(&lines, "\n")];
    }

    let parts = lines.len().div_ceil(max_lines);
    let per_part = lines.len().div_ceil(parts);
    log::debug!(
        "distributing {} lines into {} parts of up to {} lines",
        lines.len(),
        parts,
        per_part
    );
    lines.chunks(per_part).map(|chunk| join(chunk, "\n")).collect()
}

/// Split `text` into the lines before `line_index` and the lines from it on
///
/// An index past the last line returns the text unchanged as the only part.
pub fn split_lines(text: &str, line_index: usize) -> Vec<String> {
    let lines = lines(text);
    if line_index >= lines.len() {
        return vec![text.to_string()];
    }
    let (before, after) = lines.split_at(line_index);
    vec![join(before, "\n"), join(after, "\n")]
}

/// [`distribute_lines`] driven by a [`PaginationConfig`]
pub fn paginate(text: &str, config: &PaginationConfig) -> Vec<String> {
    distribute_lines(text, config.max_lines, config.trim_end)
}

fn is_blank(line: &str) -> bool {
    remove_format(line).trim().is_empty()
}
