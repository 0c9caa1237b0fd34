use super::{parse_timestamp, Value};
use crate::{Error, Result};
use std::{fmt, str::FromStr};

/// A declared field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Single-line string
    String,

    /// Multi-line string
    Text,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point number
    F64,

    /// Calendar date, stored as a point in time
    Date,

    /// Time of day, stored as a point in time
    Time,
}

impl Type {
    /// Returns `true` for types whose values are points in time.
    pub fn is_date_time(&self) -> bool {
        matches!(self, Self::Date | Self::Time)
    }

    /// Coerces `value` into this type the way a record setter does.
    ///
    /// Integers widen to floats, integral floats narrow to integers, numeric
    /// strings parse, and date strings parse into timestamps. `Null` is a
    /// member of every type and passes through.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        Ok(match (self, value) {
            (Self::Bool, value @ Value::Bool(_)) => value,
            (Self::String | Self::Text, value @ Value::String(_)) => value,
            (Self::I64, value @ Value::I64(_)) => value,
            (Self::I64, Value::F64(v)) if v.fract() == 0.0 && in_i64_range(v) => {
                Value::I64(v as i64)
            }
            (Self::I64, Value::String(v)) => match v.trim().parse() {
                Ok(v) => Value::I64(v),
                Err(_) => return Err(Error::type_coercion(Value::String(v), self.to_string())),
            },
            (Self::F64, value @ Value::F64(_)) => value,
            (Self::F64, Value::I64(v)) => Value::F64(v as f64),
            (Self::F64, Value::String(v)) => match v.trim().parse() {
                Ok(v) => Value::F64(v),
                Err(_) => return Err(Error::type_coercion(Value::String(v), self.to_string())),
            },
            (Self::Date | Self::Time, value @ Value::Timestamp(_)) => value,
            (Self::Date | Self::Time, Value::String(v)) => Value::Timestamp(parse_timestamp(&v)?),
            (_, value) => return Err(Error::type_coercion(value, self.to_string())),
        })
    }
}

fn in_i64_range(v: f64) -> bool {
    v >= i64::MIN as f64 && v < i64::MAX as f64
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::String => f.write_str("string"),
            Self::Text => f.write_str("text"),
            Self::I64 => f.write_str("int"),
            Self::F64 => f.write_str("float"),
            Self::Date => f.write_str("date"),
            Self::Time => f.write_str("time"),
        }
    }
}

/// Parses a declared type name. `integer`, `double` and `boolean` are
/// accepted as synonyms of `int`, `float` and `bool`.
impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "string" => Self::String,
            "text" => Self::Text,
            "date" => Self::Date,
            "time" => Self::Time,
            "int" | "integer" => Self::I64,
            "float" | "double" => Self::F64,
            "bool" | "boolean" => Self::Bool,
            _ => return Err(Error::unknown_type(s)),
        })
    }
}
