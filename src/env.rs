use indexmap::IndexMap;

use crate::ast::Value;
use crate::CfgError;

/// Constants declared with `set`, in declaration order.
///
/// A name only becomes visible once its `set` statement has been parsed;
/// redeclaring a name replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    constants: IndexMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: impl Into<String>, value: Value) {
        self.constants.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    /// Looks up `name`, failing with `UndefinedConstant` at `line:column`.
    pub fn resolve(&self, name: &str, line: usize, column: usize) -> Result<Value, CfgError> {
        self.constants
            .get(name)
            .cloned()
            .ok_or_else(|| CfgError::UndefinedConstant {
                name: name.to_string(),
                line,
                column,
                hint: Some("Declare it with `set` before it is used".into()),
                code: Some(220),
            })
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.constants.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Number;

    #[test]
    fn test_declare_and_resolve() {
        let mut env = Environment::new();
        env.declare("port", Value::Number(Number::from(8080)));
        assert_eq!(
            env.resolve("port", 1, 1),
            Ok(Value::Number(Number::from(8080)))
        );
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_later_declaration_wins_and_keeps_position() {
        let mut env = Environment::new();
        env.declare("a", Value::String("first".into()));
        env.declare("b", Value::String("other".into()));
        env.declare("a", Value::String("second".into()));

        let names: Vec<&String> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(env.get("a"), Some(&Value::String("second".into())));
    }

    #[test]
    fn test_undefined_constant() {
        let env = Environment::new();
        match env.resolve("missing", 3, 7) {
            Err(CfgError::UndefinedConstant { name, line, column, .. }) => {
                assert_eq!(name, "missing");
                assert_eq!((line, column), (3, 7));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
