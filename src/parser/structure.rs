use indexmap::IndexMap;

use super::*;
use crate::utils::is_valid_name;

/// `struct { key = value, key = value }`.
///
/// Members are separated by commas at the struct's own nesting level; empty
/// members are skipped. A repeated key overwrites the earlier value but keeps
/// its position.
pub(super) fn parse_struct(cursor: &mut Cursor, env: &Environment) -> Result<Value, CfgError> {
    let start = cursor.pos();
    cursor.eat("struct");
    cursor.skip_whitespace();

    if cursor.bump() != Some('{') {
        return Err(cursor.syntax_error(
            start,
            "Expected '{' after struct".into(),
            Some("Structs are written as struct { key = value, ... }"),
            215,
        ));
    }

    let mut fields = IndexMap::new();

    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            Some('}') => {
                cursor.bump();
                break;
            }
            Some(',') => {
                cursor.bump();
                continue;
            }
            None => {
                return Err(cursor.syntax_error(
                    start,
                    "Unclosed struct literal".into(),
                    Some("Structs end with '}'"),
                    216,
                ));
            }
            Some(_) => {}
        }

        let (key, value) = parse_member(cursor, env)?;
        fields.insert(key, value);

        cursor.skip_whitespace();
        match cursor.peek() {
            Some(',') | Some('}') => {}
            None => {
                return Err(cursor.syntax_error(
                    start,
                    "Unclosed struct literal".into(),
                    Some("Structs end with '}'"),
                    216,
                ));
            }
            Some(_) => {
                let at = cursor.pos();
                let rest = cursor.take_while(|c| c != ',' && c != '}');
                return Err(cursor.syntax_error(
                    at,
                    format!("Invalid struct item: {}", rest.trim()),
                    Some("Separate struct members with ','"),
                    218,
                ));
            }
        }
    }

    Ok(Value::Struct(fields))
}

fn parse_member(cursor: &mut Cursor, env: &Environment) -> Result<(String, Value), CfgError> {
    let item_start = cursor.pos();
    let key = cursor.take_while(|c| c != '=' && c != ',' && c != '}');

    if cursor.peek() != Some('=') {
        return Err(cursor.syntax_error(
            item_start,
            format!("Invalid struct item: {}", key.trim()),
            Some("Struct members are written as key = value"),
            217,
        ));
    }
    cursor.bump();

    let key = key.trim();
    if !is_valid_name(key) {
        return Err(cursor.syntax_error(
            item_start,
            format!("Invalid field name: {}", key),
            Some("Names start with a letter or '_' and contain letters, digits, '_', '-' or '.'"),
            219,
        ));
    }

    let value = value::parse_value(cursor, env)?;
    Ok((key.to_string(), value))
}
