use super::*;

/// `<< item item, item >>`: items are separated by whitespace and/or commas
/// and may themselves be arrays or structs.
pub(super) fn parse_array(cursor: &mut Cursor, env: &Environment) -> Result<Value, CfgError> {
    let start = cursor.pos();
    cursor.eat("<<");
    let mut items = Vec::new();

    loop {
        cursor.skip_separators();
        if cursor.starts_with(">>") {
            cursor.eat(">>");
            break;
        }
        if cursor.is_at_end() {
            return Err(cursor.syntax_error(
                start,
                "Unclosed array literal".into(),
                Some("Arrays end with '>>'"),
                214,
            ));
        }
        items.push(value::parse_value(cursor, env)?);
    }

    Ok(Value::Array(items))
}
