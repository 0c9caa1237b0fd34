use super::{Value, ValueMap};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::F64(v) => serializer.serialize_f64(*v),
            Self::I64(v) => serializer.serialize_i64(*v),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Null => serializer.serialize_none(),
            Self::String(v) => serializer.serialize_str(v),
            Self::Timestamp(v) => serializer.serialize_str(&v.to_rfc3339()),
        }
    }
}

/// Converts a JSON payload, e.g. the output of a rendered form, into a
/// [`Value`]. Numbers that fit an `i64` become [`Value::I64`]; all other
/// numbers become [`Value::F64`].
impl From<serde_json::Value> for Value {
    fn from(src: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match src {
            Json::Null => Self::Null,
            Json::Bool(v) => Self::Bool(v),
            Json::Number(v) => match v.as_i64() {
                Some(v) => Self::I64(v),
                None => v.as_f64().map(Self::F64).unwrap_or(Self::Null),
            },
            Json::String(v) => Self::String(v),
            Json::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Json::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect::<ValueMap>(),
            ),
        }
    }
}
