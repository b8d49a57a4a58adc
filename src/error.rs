use std::fmt;

/// The main error type for cfgml parsing and rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum CfgError {
    /// Malformed statement, struct member or value.
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when `[name]` refers to a constant that has not been declared (yet).
    UndefinedConstant {
        name: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when the XML or JSON writer fails.
    RenderError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for CfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfgError::SyntaxError { message, line, column, hint, code } =>
                write!(f, "Syntax error at {}:{}: {}{}",
                    line, column, message, suffix(hint, code)),
            CfgError::UndefinedConstant { name, line, column, hint, code } =>
                write!(f, "Undefined constant: {} at {}:{}{}",
                    name, line, column, suffix(hint, code)),
            CfgError::TypeError { message, hint, code } =>
                write!(f, "Type error: {}{}", message, suffix(hint, code)),
            CfgError::FileError { message, path, hint, code } =>
                write!(f, "File error '{}': {}{}", path, message, suffix(hint, code)),
            CfgError::RenderError { message, hint, code } =>
                write!(f, "Render error: {}{}", message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for CfgError {}

impl CfgError {
    /// Numeric error code, if the error carries one.
    pub fn code(&self) -> Option<u32> {
        match self {
            CfgError::SyntaxError { code, .. }
            | CfgError::UndefinedConstant { code, .. }
            | CfgError::TypeError { code, .. }
            | CfgError::FileError { code, .. }
            | CfgError::RenderError { code, .. } => *code,
        }
    }
}
