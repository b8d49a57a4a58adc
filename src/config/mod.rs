use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::ast::{Document, Value};
use crate::env::Environment;
use crate::parser::Parser;
use crate::tree::{build_document, TreeNode};
use crate::xml::{self, XmlOptions};
use crate::export;
use crate::CfgError;

mod access;
mod conversion;

/// A parsed configuration: its entries, the constants it declared and the
/// source text it came from.
#[derive(Debug, Clone)]
pub struct Config {
    document: Document,
    constants: Environment,
    raw_content: String,
}

impl Config {
    /// Read and parse a configuration file.
    ///
    /// # Example
    /// ```ignore
    /// let config = Config::from_file("app.cfg")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CfgError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CfgError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        info!(path = %path.display(), bytes = content.len(), "loaded config file");
        Self::parse(&content)
    }

    /// Parse configuration text (no file I/O).
    pub fn parse(content: &str) -> Result<Self, CfgError> {
        let mut parser = Parser::new();
        let document = parser.parse_document(content)?;

        Ok(Self {
            document,
            constants: parser.env().clone(),
            raw_content: content.to_string(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Constants declared with `set`, in declaration order.
    pub fn constants(&self) -> &Environment {
        &self.constants
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    pub fn to_tree(&self) -> TreeNode {
        build_document(&self.document)
    }

    pub fn to_xml(&self, options: &XmlOptions) -> Result<String, CfgError> {
        xml::to_string(&self.to_tree(), options)
    }

    pub fn to_json(&self) -> Result<String, CfgError> {
        export::export_document_to_json(&self.document)
    }

    /// The whole document as one struct value (later duplicates win).
    pub fn root_value(&self) -> Value {
        Value::Struct(self.document.items.iter().cloned().collect())
    }
}

impl FromStr for Config {
    type Err = CfgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests;
