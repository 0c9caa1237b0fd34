use super::Record;
use crate::{
    schema::app::{FieldTy, Model},
    stmt::Value,
    Error, Result,
};
use std::sync::Arc;

/// A record whose fields are stored as [`Value`]s, one slot per model field.
///
/// Primitive fields are coerced on assignment with [`Type::cast`]. Relation
/// fields accept any value unchanged.
///
/// [`Type::cast`]: crate::stmt::Type::cast
#[derive(Debug, Clone)]
pub struct DynRecord {
    model: Arc<Model>,
    values: Vec<Value>,
}

impl DynRecord {
    /// Creates a record with every field set to `Null`.
    pub fn new(model: Arc<Model>) -> Self {
        let values = vec![Value::Null; model.fields.len()];
        Self { model, values }
    }

    /// Creates a record and assigns each `(field, value)` pair through the
    /// regular setter.
    pub fn with_values<'a, V>(
        model: Arc<Model>,
        values: impl IntoIterator<Item = (&'a str, V)>,
    ) -> Result<Self>
    where
        V: Into<Value>,
    {
        let mut record = Self::new(model);
        for (field, value) in values {
            record.set(field, value.into())?;
        }
        Ok(record)
    }

    fn index_of(&self, field: &str) -> Result<usize> {
        self.model
            .field_index(field)
            .ok_or_else(|| Error::unknown_field(self.model.display_name(), field))
    }
}

impl Record for DynRecord {
    fn model(&self) -> &Model {
        &self.model
    }

    fn get(&self, field: &str) -> Result<Value> {
        let index = self.index_of(field)?;
        Ok(self.values[index].clone())
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        let index = self.index_of(field)?;

        let value = match &self.model.fields[index].ty {
            FieldTy::Primitive(primitive) => primitive.ty.cast(value)?,
            _ => value,
        };

        self.values[index] = value;
        Ok(())
    }
}
