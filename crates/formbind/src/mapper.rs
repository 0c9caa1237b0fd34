use crate::{bind, form, Config, Filter, FormDescriptor, FormOptions, Layout, Row};
use formbind_core::{
    schema::app::{Field, Model},
    stmt::{Value, ValueMap},
    Record, Result,
};

/// Maps records to form descriptors and form output back to records.
///
/// A mapper holds only naming conventions. Every per-form setting travels in
/// the call's options, so one mapper can serve any number of concurrent
/// builds.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: Config,
}

impl Mapper {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fields of `model` that automatic forms include, in declaration order.
    pub fn eligible_fields<'a>(
        &'a self,
        model: &'a Model,
        expose_audit_fields: bool,
    ) -> Vec<&'a Field> {
        Filter::new(&self.config, expose_audit_fields)
            .eligible(model)
            .collect()
    }

    /// Builds the row for a single field holding `value`.
    pub fn build_row(&self, field: &Field, value: Value) -> Row {
        form::build_row(&self.config, field, value)
    }

    /// Builds a form from the record's schema.
    pub fn build_form<R>(&self, record: &R, options: &FormOptions) -> Result<FormDescriptor>
    where
        R: Record + ?Sized,
    {
        form::build_auto(&self.config, record, options)
    }

    /// Builds a form from a caller-authored layout.
    pub fn build_layout<R>(&self, record: &R, layout: &Layout) -> Result<FormDescriptor>
    where
        R: Record + ?Sized,
    {
        form::build_layout(&self.config, record, layout)
    }

    /// Writes form output back into `record`, treating audit fields as
    /// hidden.
    pub fn bind<R>(&self, record: &mut R, data: &ValueMap) -> Result<()>
    where
        R: Record + ?Sized,
    {
        bind::bind(&self.config, record, data, false)
    }

    /// Writes form output back into `record`, using the same field selection
    /// as a form built with `options`.
    pub fn bind_with<R>(&self, record: &mut R, data: &ValueMap, options: &FormOptions) -> Result<()>
    where
        R: Record + ?Sized,
    {
        bind::bind(&self.config, record, data, options.expose_audit_fields)
    }
}
