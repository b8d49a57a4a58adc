use std::collections::HashMap;

use indexmap::IndexMap;

use crate::ast::Number;
use crate::{CfgError, Value};

fn type_error(expected: &str, value: &Value, code: u32) -> CfgError {
    CfgError::TypeError {
        message: format!("Expected {}, got {}", expected, value.kind_name()),
        hint: Some(format!("Use a {} value in your config", expected)),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value, 401)),
        }
    }
}

impl TryFrom<Value> for Number {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err(type_error("number", &value, 402)),
        }
    }
}

macro_rules! impl_try_from_number {
    ($($t:ty),*) => {
        $(
            impl TryFrom<Value> for $t {
                type Error = CfgError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = Number::try_from(value)?;
                    n.as_str().parse::<$t>().map_err(|_| CfgError::TypeError {
                        message: format!("Number {} is out of range for {}", n, stringify!($t)),
                        hint: None,
                        code: Some(403),
                    })
                }
            }
        )*
    };
}

impl_try_from_number!(u8, u16, u32, u64, u128, usize, i32, i64);

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = CfgError>,
{
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items.into_iter().map(T::try_from).collect(),
            _ => Err(type_error("array", &value, 404)),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Struct(fields) => Ok(fields),
            _ => Err(type_error("struct", &value, 405)),
        }
    }
}

impl TryFrom<Value> for HashMap<String, String> {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Struct(fields) => fields
                .into_iter()
                .map(|(k, v)| String::try_from(v).map(|s| (k, s)))
                .collect(),
            _ => Err(type_error("struct", &value, 405)),
        }
    }
}
