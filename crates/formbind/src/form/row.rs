use crate::{epoch, Config, Widget};
use formbind_core::{
    schema::app::Field,
    stmt::{Value, ValueMap},
};
use serde::Serialize;
use std_util::str;

/// One editable unit of a form.
///
/// A row is an ordered map of attributes. Rows generated from a field carry
/// `key`, `title`, `type`, `placeholder` and `value`, followed by any form
/// overrides declared on the field. Literal rows (e.g. a submit button)
/// carry whatever the caller put in them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    attrs: ValueMap,
}

impl Row {
    pub const KEY: &'static str = "key";
    pub const TITLE: &'static str = "title";
    pub const TYPE: &'static str = "type";
    pub const PLACEHOLDER: &'static str = "placeholder";
    pub const VALUE: &'static str = "value";

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute and returns the row.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attrs.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// The bound field name. Literal rows have none.
    pub fn key(&self) -> Option<&str> {
        self.get(Self::KEY).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get(Self::TITLE).and_then(Value::as_str)
    }

    /// The widget kind, e.g. `date` or, for literal rows, `submit`.
    pub fn widget(&self) -> Option<&str> {
        self.get(Self::TYPE).and_then(Value::as_str)
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.get(Self::PLACEHOLDER).and_then(Value::as_str)
    }

    /// The current value. A row without one reads as `Null`.
    pub fn value(&self) -> &Value {
        static NULL: Value = Value::Null;
        self.get(Self::VALUE).unwrap_or(&NULL)
    }

    pub fn attrs(&self) -> &ValueMap {
        &self.attrs
    }

    /// Applies overrides on top of the row's attributes.
    ///
    /// Each override replaces the attribute of the same name outright, keeping
    /// its position; nested maps are not merged. New names are appended.
    pub fn merge(&mut self, overrides: &ValueMap) {
        for (name, value) in overrides {
            self.attrs.insert(name.clone(), value.clone());
        }
    }
}

impl From<ValueMap> for Row {
    fn from(attrs: ValueMap) -> Self {
        Self { attrs }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attrs: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Builds the row for `field` holding `value`.
///
/// Relation fields have no widget, so their rows carry no `type`.
pub(crate) fn build(config: &Config, field: &Field, value: Value) -> Row {
    let value = if field.is_date_time() {
        epoch::encode(value)
    } else {
        value
    };

    let label = str::humanize(&field.name);

    let mut row = Row::new()
        .with(Row::KEY, field.name.as_str())
        .with(Row::TITLE, label.as_str());

    if let Some(widget) = Widget::for_field(field) {
        row.insert(Row::TYPE, widget.as_str());
    }

    row.insert(Row::PLACEHOLDER, label);
    row.insert(Row::VALUE, value);

    if let Some(overrides) = field.options.map(&config.form_options_key) {
        row.merge(overrides);
    }

    row
}
