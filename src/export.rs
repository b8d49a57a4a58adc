use std::fs;

use serde_json::json;

use crate::ast::{Document, Value};
use crate::parser::Parser;
use crate::tree::TreeNode;
use crate::CfgError;

/// Export a parsed document to JSON.
///
/// - Strings → JSON strings
/// - Numbers → JSON numbers, or decimal strings when they do not fit in `u64`
/// - Arrays → JSON arrays
/// - Structs → JSON objects in field order
///
/// Entries keep their declaration order. A key declared twice at top level
/// appears once, with the later value.
pub fn export_document_to_json(doc: &Document) -> Result<String, CfgError> {
    let top = doc
        .items
        .iter()
        .map(|(k, v)| (k.clone(), value_to_json(v)))
        .collect::<serde_json::Map<_, _>>();

    serde_json::to_string_pretty(&serde_json::Value::Object(top)).map_err(json_error)
}

pub fn value_to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::String(s) => json!(s),
        Value::Number(n) => match n.as_u64() {
            Some(small) => json!(small),
            None => json!(n.as_str()),
        },
        Value::Array(arr) => json!(arr.iter().map(value_to_json).collect::<Vec<_>>()),
        Value::Struct(fields) => serde_json::Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}

/// Dump the intermediate tree (labels, kinds, text) as JSON.
pub fn export_tree_to_json(root: &TreeNode) -> Result<String, CfgError> {
    serde_json::to_string_pretty(root).map_err(json_error)
}

/// Reads, parses and exports a file in one call.
///
/// # Errors
/// Returns error if the file can't be read or contains invalid syntax.
pub fn export_file(path: &str) -> Result<String, CfgError> {
    let input = fs::read_to_string(path).map_err(|e| CfgError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })?;

    let doc = Parser::new().parse_document(&input)?;
    export_document_to_json(&doc)
}

fn json_error(e: serde_json::Error) -> CfgError {
    CfgError::RenderError {
        message: e.to_string(),
        hint: None,
        code: Some(502),
    }
}
