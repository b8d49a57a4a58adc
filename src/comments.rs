//! Comment removal.
//!
//! Two comment forms exist: `\` starts a comment that runs to the end of the
//! line, `/* ... */` is a block comment that may span lines and does not nest.
//! Line comments are removed first, block comments afterwards, and neither
//! marker is recognised inside an `@"..."` string.

use std::iter::Peekable;
use std::str::Chars;

/// Stands in for each newline of a removed block comment.
///
/// It is whitespace, so the parser skips it, but it is not `'\n'`, so it never
/// ends a statement. [`crate::utils::line_col`] counts it as a line break.
pub const HIDDEN_NEWLINE: char = '\u{2028}';

/// Strip all comments from `text`.
///
/// Every newline inside a removed block comment becomes [`HIDDEN_NEWLINE`],
/// so line numbers of the remaining text still match the original input.
pub fn strip_comments(text: &str) -> String {
    strip_block_comments(&strip_line_comments(text))
}

/// Copies a `@"..."` string through its closing quote (or end of input).
fn copy_string(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    // opening quote
    if let Some(q) = chars.next() {
        out.push(q);
    }
    for ch in chars.by_ref() {
        out.push(ch);
        if ch == '"' {
            break;
        }
    }
}

fn strip_line_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '@' if chars.peek() == Some(&'"') => {
                out.push(c);
                copy_string(&mut chars, &mut out);
            }
            '\\' => {
                while let Some(&ch) = chars.peek() {
                    if ch == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            _ => out.push(c),
        }
    }

    out
}

fn strip_block_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '@' if chars.peek() == Some(&'"') => {
                out.push(c);
                copy_string(&mut chars, &mut out);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for ch in chars.by_ref() {
                    if ch == '\n' {
                        out.push(HIDDEN_NEWLINE);
                    }
                    if prev == '*' && ch == '/' {
                        break;
                    }
                    prev = ch;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment_removed_newline_kept() {
        let input = "port = 8080 \\ web port\nhost = @\"x\"";
        assert_eq!(strip_comments(input), "port = 8080 \nhost = @\"x\"");
    }

    #[test]
    fn test_block_comment_single_line() {
        assert_eq!(strip_comments("a = /* note */ 1"), "a =  1");
    }

    #[test]
    fn test_block_comment_keeps_line_count() {
        let input = "/* first\nsecond\nthird */a = 1";
        let out = strip_comments(input);
        assert_eq!(out, "\u{2028}\u{2028}a = 1");
    }

    #[test]
    fn test_block_comment_newlines_do_not_end_lines() {
        let out = strip_comments("a = /* note\n continues */ 1");
        assert_eq!(out, "a = \u{2028} 1");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        assert_eq!(strip_comments("/* a /* b */ c */"), " c */");
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        assert_eq!(strip_comments("a = 1\n/* open\nb = 2"), "a = 1\n\u{2028}");
    }

    #[test]
    fn test_markers_inside_strings_survive() {
        let input = r#"path = @"C:\dir /* not a comment */""#;
        assert_eq!(strip_comments(input), input);
    }

    #[test]
    fn test_line_comments_are_stripped_before_block_comments() {
        // The `\` hides the closing marker, so the block comment runs on
        // into the next line.
        let input = "/* a \\ */\nb = 1 */ c = 2";
        assert_eq!(strip_comments(input), "\u{2028} c = 2");
    }
}
