use crate::ast::{Document, Value};
use crate::env::Environment;
use crate::CfgError;

use cursor::Cursor;

mod array;
mod cursor;
mod document;
mod structure;
mod value;

/// Parses configuration text into a [`Document`].
///
/// The parser owns the constant environment. Constants declared by one call
/// to [`Parser::parse_document`] stay visible to later calls on the same
/// parser; use a fresh parser for an independent parse.
#[derive(Debug, Default)]
pub struct Parser {
    env: Environment,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of constants.
    pub fn with_environment(env: Environment) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn parse_document(&mut self, input: &str) -> Result<Document, CfgError> {
        document::parse_document(self, input)
    }

    /// Parse a single value such as `@"text"`, `42`, `<< 1 2 >>`,
    /// `struct { a = 1 }` or `[name]` against the current constants.
    pub fn parse_value(&self, raw: &str) -> Result<Value, CfgError> {
        let mut cursor = Cursor::new(raw, 0, raw.len());
        value::parse_complete_value(&mut cursor, &self.env)
    }
}
