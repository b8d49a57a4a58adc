//! Generic labeled tree built from parsed values; the XML writer renders it.

use serde::Serialize;

use crate::ast::{Document, Value};

/// Label of the root node produced by [`build_document`].
pub const ROOT_LABEL: &str = "config";

/// Label of every array element node.
pub const ITEM_LABEL: &str = "item";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Number,
    Array,
    Struct,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Array => "array",
            Kind::Struct => "struct",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        TreeNode {
            label: label.into(),
            kind: None,
            children: Vec::new(),
            text: None,
        }
    }

    /// First child with the given label.
    pub fn child(&self, label: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.label == label)
    }
}

/// Builds the node for `key = value`.
pub fn build(key: &str, value: &Value) -> TreeNode {
    let mut node = TreeNode::new(key);
    match value {
        Value::Array(items) => {
            node.kind = Some(Kind::Array);
            node.children = items.iter().map(|item| build(ITEM_LABEL, item)).collect();
        }
        Value::Struct(fields) => {
            node.kind = Some(Kind::Struct);
            node.children = fields.iter().map(|(name, v)| build(name, v)).collect();
        }
        Value::String(s) => {
            node.kind = Some(Kind::String);
            node.text = Some(s.clone());
        }
        Value::Number(n) => {
            node.kind = Some(Kind::Number);
            node.text = Some(n.to_string());
        }
    }
    node
}

/// Builds the `config` root with one child per document entry.
pub fn build_document(doc: &Document) -> TreeNode {
    let mut root = TreeNode::new(ROOT_LABEL);
    root.children = doc.items.iter().map(|(k, v)| build(k, v)).collect();
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Number;
    use indexmap::IndexMap;

    #[test]
    fn test_scalar_leaves() {
        let node = build("port", &Value::Number(Number::from(8080)));
        assert_eq!(node.kind, Some(Kind::Number));
        assert_eq!(node.text.as_deref(), Some("8080"));
        assert!(node.children.is_empty());

        let node = build("name", &Value::String("Иван".into()));
        assert_eq!(node.kind, Some(Kind::String));
        assert_eq!(node.text.as_deref(), Some("Иван"));
    }

    #[test]
    fn test_array_children_are_items() {
        let value = Value::Array(vec![
            Value::String("a".into()),
            Value::Number(Number::from(1)),
        ]);
        let node = build("xs", &value);
        assert_eq!(node.kind, Some(Kind::Array));
        assert_eq!(node.text, None);
        let labels: Vec<&str> = node.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["item", "item"]);
        assert_eq!(node.children[1].kind, Some(Kind::Number));
    }

    #[test]
    fn test_struct_children_follow_field_order() {
        let mut fields = IndexMap::new();
        fields.insert("zeta".to_string(), Value::Number(Number::from(1)));
        fields.insert("alpha".to_string(), Value::String("x".into()));
        let node = build("user", &Value::Struct(fields));

        assert_eq!(node.kind, Some(Kind::Struct));
        assert_eq!(node.children[0].label, "zeta");
        assert_eq!(node.children[1].label, "alpha");
        assert_eq!(node.child("alpha").and_then(|c| c.text.as_deref()), Some("x"));
    }

    #[test]
    fn test_document_root() {
        let doc = Document {
            items: vec![
                ("b".into(), Value::Number(Number::from(2))),
                ("a".into(), Value::Number(Number::from(1))),
            ],
        };
        let root = build_document(&doc);
        assert_eq!(root.label, ROOT_LABEL);
        assert_eq!(root.kind, None);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].label, "b");
    }
}
