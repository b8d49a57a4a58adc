use std::fmt;

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(Number),
    Array(Vec<Value>),
    Struct(IndexMap<String, Value>),
}

/// Non-negative integer of any length, kept as its canonical decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Builds a number from a run of ASCII digits, dropping leading zeros.
    ///
    /// Returns `None` if `digits` is empty or contains anything but `0-9`.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Some(Number("0".into()))
        } else {
            Some(Number(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as `u64`, or `None` when it does not fit.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number(n.to_string())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The document entries produced by one parse, in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub items: Vec<(String, Value)>,
}

impl Value {
    /// Name of the variant as used in the `type` attribute of the output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
            Value::Struct(_) => "struct",
        }
    }

    pub fn as_struct(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Struct(fields) = self {
            Some(fields)
        } else {
            None
        }
    }
}

impl Document {
    /// First top-level entry named `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}
