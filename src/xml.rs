//! XML rendering of a [`TreeNode`] tree.

use std::fmt;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::tree::TreeNode;
use crate::CfgError;

/// Output settings for [`to_string`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlOptions {
    /// Pretty-print with this many spaces per level; compact when `None`.
    pub indent: Option<usize>,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the root.
    pub declaration: bool,
}

impl XmlOptions {
    pub fn pretty(indent: usize) -> Self {
        XmlOptions {
            indent: Some(indent),
            ..Self::default()
        }
    }
}

/// Render `root` and its descendants as XML text.
///
/// Every node becomes an element named by its label with a `type` attribute
/// when it has a kind. Text is escaped by the writer; an element without text
/// or children is written self-closing.
pub fn to_string(root: &TreeNode, options: &XmlOptions) -> Result<String, CfgError> {
    let bytes = match options.indent {
        Some(size) => {
            let mut writer = Writer::new_with_indent(Vec::new(), b' ', size);
            write_document(&mut writer, root, options)?;
            writer.into_inner()
        }
        None => {
            let mut writer = Writer::new(Vec::new());
            write_document(&mut writer, root, options)?;
            writer.into_inner()
        }
    };

    String::from_utf8(bytes).map_err(render_error)
}

fn write_document<W: Write>(
    writer: &mut Writer<W>,
    root: &TreeNode,
    options: &XmlOptions,
) -> Result<(), CfgError> {
    if options.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(render_error)?;
    }
    write_node(writer, root)
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &TreeNode) -> Result<(), CfgError> {
    let mut start = BytesStart::new(node.label.as_str());
    if let Some(kind) = node.kind {
        start.push_attribute(("type", kind.as_str()));
    }

    let text = node.text.as_deref().filter(|t| !t.is_empty());
    if text.is_none() && node.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(render_error);
    }

    writer.write_event(Event::Start(start)).map_err(render_error)?;
    if let Some(text) = text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(render_error)?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.label.as_str())))
        .map_err(render_error)
}

fn render_error(e: impl fmt::Display) -> CfgError {
    CfgError::RenderError {
        message: e.to_string(),
        hint: None,
        code: Some(501),
    }
}
