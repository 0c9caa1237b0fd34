use crate::Config;
use formbind_core::schema::app::{Field, Model};

/// Selects the fields that take part in automatic form generation.
///
/// A field is eligible unless it is the identity field, an audit timestamp
/// (when audit fields are hidden), or a relation to another model.
#[derive(Debug, Clone, Copy)]
pub struct Filter<'a> {
    config: &'a Config,
    expose_audit_fields: bool,
}

impl<'a> Filter<'a> {
    pub fn new(config: &'a Config, expose_audit_fields: bool) -> Self {
        Self {
            config,
            expose_audit_fields,
        }
    }

    pub fn is_eligible(&self, field: &Field) -> bool {
        if self.config.is_identity(field) {
            return false;
        }

        if !self.expose_audit_fields && self.config.is_audit(field) {
            return false;
        }

        !field.is_relation()
    }

    /// Eligible fields of `model`, in declaration order.
    pub fn eligible<'m>(&self, model: &'m Model) -> impl Iterator<Item = &'m Field> + 'm
    where
        'a: 'm,
    {
        let filter = *self;
        model
            .fields
            .iter()
            .filter(move |field| filter.is_eligible(field))
    }
}
