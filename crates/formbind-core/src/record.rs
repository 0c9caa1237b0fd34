mod dyn_record;
pub use dyn_record::DynRecord;

use crate::{schema::app::Model, stmt::Value, Result};

/// A live instance of a model.
///
/// This is the seam between form mapping and whatever stores records. The
/// mapper only reads the schema, reads field values, and writes field values
/// back through [`Record::set`], so any coercion the record performs still
/// applies.
pub trait Record {
    /// The schema of the record's model.
    fn model(&self) -> &Model;

    /// Returns the current value of the named field.
    fn get(&self, field: &str) -> Result<Value>;

    /// Assigns the named field, coercing `value` into the field's type.
    ///
    /// Fails with a type coercion error if the value cannot be stored.
    fn set(&mut self, field: &str, value: Value) -> Result<()>;
}

impl<R: Record + ?Sized> Record for &mut R {
    fn model(&self) -> &Model {
        (**self).model()
    }

    fn get(&self, field: &str) -> Result<Value> {
        (**self).get(field)
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        (**self).set(field, value)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn model(&self) -> &Model {
        (**self).model()
    }

    fn get(&self, field: &str) -> Result<Value> {
        (**self).get(field)
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        (**self).set(field, value)
    }
}
