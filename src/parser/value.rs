use super::*;
use crate::ast::Number;

/// Parse one value that must fill the rest of the cursor's range.
pub(super) fn parse_complete_value(cursor: &mut Cursor, env: &Environment) -> Result<Value, CfgError> {
    cursor.skip_whitespace();
    let start = cursor.pos();
    let raw = cursor.rest().trim_end();

    let value = parse_value(cursor, env)?;

    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        return Err(cursor.syntax_error(
            start,
            format!("Unknown value: {}", raw),
            Some("Unexpected text after the value"),
            210,
        ));
    }
    Ok(value)
}

pub(super) fn parse_value(cursor: &mut Cursor, env: &Environment) -> Result<Value, CfgError> {
    cursor.skip_whitespace();

    if cursor.starts_with("@\"") {
        parse_string_value(cursor)
    } else if cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
        parse_number_value(cursor)
    } else if cursor.starts_with("<<") {
        array::parse_array(cursor, env)
    } else if starts_with_struct_keyword(cursor) {
        structure::parse_struct(cursor, env)
    } else if cursor.starts_with("[") {
        parse_constant_reference(cursor, env)
    } else {
        Err(unknown_value(cursor))
    }
}

fn starts_with_struct_keyword(cursor: &Cursor) -> bool {
    cursor
        .rest()
        .strip_prefix("struct")
        .is_some_and(|after| after.starts_with(|c: char| c.is_whitespace() || c == '{'))
}

fn parse_string_value(cursor: &mut Cursor) -> Result<Value, CfgError> {
    let start = cursor.pos();
    cursor.eat("@\"");

    let text = cursor.take_while(|c| c != '"');
    if cursor.bump() != Some('"') {
        return Err(cursor.syntax_error(
            start,
            "Unclosed string literal".into(),
            Some("Close the string with '\"'"),
            101,
        ));
    }

    Ok(Value::String(text.to_string()))
}

fn parse_number_value(cursor: &mut Cursor) -> Result<Value, CfgError> {
    let start = cursor.pos();
    let digits = cursor.take_while(|c| c.is_ascii_digit());

    // `12abc`, `1.5` or `1[n]` is not a number followed by something else
    if cursor.peek().is_some_and(|c| !is_value_boundary(c)) {
        let rest = cursor.take_while(|c| !is_value_boundary(c));
        return Err(cursor.syntax_error(
            start,
            format!("Unknown value: {}{}", digits, rest),
            Some("Numbers are unsigned decimal integers"),
            211,
        ));
    }

    Number::from_digits(digits)
        .map(Value::Number)
        .ok_or_else(|| cursor.syntax_error(start, format!("Unknown value: {}", digits), None, 211))
}

fn parse_constant_reference(cursor: &mut Cursor, env: &Environment) -> Result<Value, CfgError> {
    let start = cursor.pos();
    cursor.eat("[");

    let name = cursor.take_while(|c| c != ']' && c != '\n');
    if cursor.bump() != Some(']') {
        return Err(cursor.syntax_error(
            start,
            format!("Unknown value: [{}", name),
            Some("Constant references are written as [name]"),
            212,
        ));
    }

    let (line, column) = cursor.location(start);
    env.resolve(name.trim(), line, column)
}

/// Characters that end a bare token inside arrays and structs.
fn is_value_boundary(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '}' || c == '>'
}

fn unknown_value(cursor: &mut Cursor) -> CfgError {
    let start = cursor.pos();
    let token = cursor.take_while(|c| !is_value_boundary(c));
    if token.is_empty() {
        cursor.syntax_error(
            start,
            "Unknown value: ".into(),
            Some("Expected a string, number, array, struct or [constant]"),
            213,
        )
    } else {
        cursor.syntax_error(start, format!("Unknown value: {}", token), None, 213)
    }
}
