use tracing::debug;

use super::*;
use crate::comments::strip_comments;
use crate::segment::{segment, Statement};
use crate::utils::is_valid_name;

pub(super) fn parse_document(parser: &mut Parser, input: &str) -> Result<Document, CfgError> {
    let text = strip_comments(input);
    let statements = segment(&text)?;
    debug!(statements = statements.len(), "parsing document");

    let mut items = Vec::new();
    for statement in &statements {
        parse_statement(parser, &text, statement, &mut items)?;
    }

    Ok(Document { items })
}

fn parse_statement(
    parser: &mut Parser,
    src: &str,
    statement: &Statement,
    items: &mut Vec<(String, Value)>,
) -> Result<(), CfgError> {
    let text = statement.text.as_str();
    let end = statement.offset + text.len();

    if let Some(rest) = strip_set_keyword(text) {
        let rest_offset = statement.offset + (text.len() - rest.len());
        let (name, value_offset) = split_assignment(src, statement, rest, rest_offset)?;
        check_name(src, statement, name, "constant name", 203)?;

        let mut cursor = Cursor::new(src, value_offset, end);
        let value = value::parse_complete_value(&mut cursor, &parser.env)?;
        debug!(name, kind = value.kind_name(), "declared constant");
        parser.env.declare(name, value);
    } else {
        let (key, value_offset) = split_assignment(src, statement, text, statement.offset)?;
        check_name(src, statement, key, "key", 202)?;

        let mut cursor = Cursor::new(src, value_offset, end);
        let value = value::parse_complete_value(&mut cursor, &parser.env)?;
        debug!(key, kind = value.kind_name(), "parsed entry");
        items.push((key.to_string(), value));
    }

    Ok(())
}

/// `set` only counts as the keyword when whitespace follows it.
fn strip_set_keyword(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("set")?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

/// Splits `name = value` and returns the trimmed name and the source offset
/// just past the `=`.
fn split_assignment<'s>(
    src: &str,
    statement: &Statement,
    text: &'s str,
    text_offset: usize,
) -> Result<(&'s str, usize), CfgError> {
    match text.find('=') {
        Some(eq) => Ok((text[..eq].trim(), text_offset + eq + 1)),
        None => Err(statement_error(
            src,
            statement,
            format!("Syntax error: {}", statement.text),
            "Statements are written as `key = value` or `set name = value`",
            201,
        )),
    }
}

fn check_name(
    src: &str,
    statement: &Statement,
    name: &str,
    what: &str,
    code: u32,
) -> Result<(), CfgError> {
    if is_valid_name(name) {
        return Ok(());
    }
    Err(statement_error(
        src,
        statement,
        format!("Invalid {}: {}", what, name),
        "Names start with a letter or '_' and contain letters, digits, '_', '-' or '.'",
        code,
    ))
}

fn statement_error(
    src: &str,
    statement: &Statement,
    message: String,
    hint: &str,
    code: u32,
) -> CfgError {
    Cursor::new(src, statement.offset, statement.offset).syntax_error(
        statement.offset,
        message,
        Some(hint),
        code,
    )
}
