//! Splits comment-free text into top-level statements.
//!
//! A newline ends a statement only when no `{`, `<<`, `[` or `@"` span is
//! open, so struct and array literals can be written across several lines.

use tracing::trace;

use crate::utils::line_col;
use crate::CfgError;

/// One top-level statement and where it starts in the preprocessed text.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub text: String,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Open {
    Brace,
    Array,
    Bracket,
}

impl Open {
    fn describe(self) -> &'static str {
        match self {
            Open::Brace => "'{'",
            Open::Array => "'<<'",
            Open::Bracket => "'['",
        }
    }
}

pub fn segment(text: &str) -> Result<Vec<Statement>, CfgError> {
    let mut statements = Vec::new();
    let mut stack: Vec<(Open, usize)> = Vec::new();
    let mut string_start: Option<usize> = None;
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if string_start.is_some() {
            if c == '"' {
                string_start = None;
            }
            continue;
        }

        match c {
            '@' if matches!(chars.peek(), Some((_, '"'))) => {
                chars.next();
                string_start = Some(i);
            }
            '{' => stack.push((Open::Brace, i)),
            '[' => stack.push((Open::Bracket, i)),
            '<' if matches!(chars.peek(), Some((_, '<'))) => {
                chars.next();
                stack.push((Open::Array, i));
            }
            '}' => close(&mut stack, Open::Brace),
            ']' => close(&mut stack, Open::Bracket),
            '>' if matches!(chars.peek(), Some((_, '>'))) => {
                if stack.last().map(|(o, _)| *o) == Some(Open::Array) {
                    chars.next();
                    stack.pop();
                }
            }
            '\n' if stack.is_empty() => {
                push_statement(&mut statements, text, start, i);
                start = i + 1;
            }
            _ => {}
        }
    }

    if let Some(offset) = string_start {
        let (line, column) = line_col(text, offset);
        return Err(CfgError::SyntaxError {
            message: "Unclosed string literal".into(),
            line,
            column,
            hint: Some("Close the string with '\"'".into()),
            code: Some(101),
        });
    }

    if let Some((open, offset)) = stack.first() {
        let (line, column) = line_col(text, *offset);
        return Err(CfgError::SyntaxError {
            message: format!("Unclosed {}", open.describe()),
            line,
            column,
            hint: Some("Every '{', '<<' and '[' needs a matching '}', '>>' or ']'".into()),
            code: Some(102),
        });
    }

    push_statement(&mut statements, text, start, text.len());
    Ok(statements)
}

fn close(stack: &mut Vec<(Open, usize)>, kind: Open) {
    if stack.last().map(|(o, _)| *o) == Some(kind) {
        stack.pop();
    }
}

fn push_statement(statements: &mut Vec<Statement>, text: &str, start: usize, end: usize) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let offset = start + (raw.len() - raw.trim_start().len());
    trace!(offset, statement = trimmed, "segmented statement");
    statements.push(Statement {
        text: trimmed.to_string(),
        offset,
    });
}
