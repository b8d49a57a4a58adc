use once_cell::sync::Lazy;
use regex::Regex;

use crate::comments::HIDDEN_NEWLINE;

static NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}_][\p{L}\p{N}_.\-]*$").expect("name pattern is valid")
});

fn is_line_break(c: char) -> bool {
    c == '\n' || c == HIDDEN_NEWLINE
}

/// 1-based line and column (in characters) of a byte offset in `src`.
///
/// Newlines hidden by comment removal count as line breaks.
pub fn line_col(src: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(src.len());
    let before = &src[..offset];
    let line = before.chars().filter(|&c| is_line_break(c)).count() + 1;
    let line_start = before
        .char_indices()
        .rev()
        .find(|&(_, c)| is_line_break(c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Whether `name` can be used as a key, constant name or struct field.
///
/// Keys end up as XML element names, so the accepted set is a letter or `_`
/// followed by letters, digits, `_`, `-` or `.`.
pub fn is_valid_name(name: &str) -> bool {
    NAME.is_match(name)
}
