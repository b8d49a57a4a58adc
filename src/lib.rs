//! Translates a small configuration language into XML.
//!
//! ```text
//! \ line comment
//! /* block comment */
//! set defaultAge = 25
//! name = @"Иван Иванов"
//! user = struct {
//!     age = [defaultAge],
//!     hobbies = << @"чтение" @"путешествия" >>
//! }
//! ```
//!
//! becomes
//!
//! ```text
//! <config><name type="string">Иван Иванов</name><user type="struct">...</user></config>
//! ```

pub mod ast;
pub mod comments;
pub mod config;
pub mod env;
pub mod error;
pub mod export;
pub mod parser;
pub mod segment;
pub mod tree;
pub mod utils;
pub mod xml;

use std::path::Path;

pub use ast::{Document, Number, Value};
pub use config::Config;
pub use env::Environment;
pub use error::CfgError;
pub use parser::Parser;
pub use tree::{Kind, TreeNode};
pub use xml::XmlOptions;

/// Parse `input` and render it as XML in one call.
pub fn convert_str(input: &str, options: &XmlOptions) -> Result<String, CfgError> {
    Config::parse(input)?.to_xml(options)
}

/// Read, parse and render a file as XML.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &XmlOptions) -> Result<String, CfgError> {
    Config::from_file(path)?.to_xml(options)
}
