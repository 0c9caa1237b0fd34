use crate::stmt::{Value, ValueMap};

/// Free-form per-field options.
///
/// Keys are arbitrary. A nested map stored under a well-known key (`form` by
/// default) carries the field's form overrides, e.g. `section` or
/// `picker_type`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    entries: ValueMap,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the nested map stored under `key`, if the option exists and
    /// is a map.
    pub fn map(&self, key: &str) -> Option<&ValueMap> {
        self.get(key).and_then(Value::as_map)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Sets `name` inside the nested map stored under `key`, creating the map
    /// if needed. A non-map value already stored under `key` is replaced.
    pub fn insert_nested(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        let entry = self
            .entries
            .entry(key.into())
            .or_insert_with(|| Value::Map(ValueMap::new()));

        if !entry.is_map() {
            *entry = Value::Map(ValueMap::new());
        }

        entry
            .as_map_mut()
            .and_then(|map| map.insert(name.into(), value.into()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for FieldOptions {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
