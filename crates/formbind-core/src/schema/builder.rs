use super::app::{Field, Model, SectionMeta};
use super::Name;
use crate::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Builds a [`Model`] from field and section declarations.
#[derive(Debug)]
pub struct Builder {
    name: Name,
    fields: Vec<Field>,
    sections: Vec<(String, SectionMeta)>,
}

impl Builder {
    pub fn new(name: &str) -> Self {
        Self {
            name: Name::new(name),
            fields: vec![],
            sections: vec![],
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Declares a named form section. Sections appear in generated forms in
    /// the order they are declared, after the default section.
    pub fn section(mut self, id: impl Into<String>, meta: SectionMeta) -> Self {
        self.sections.push((id.into(), meta));
        self
    }

    pub fn build(self) -> Result<Model> {
        let model_name = self.name.upper_camel_case();

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "field with empty name on model `{model_name}`"
                )));
            }

            if !seen.insert(field.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate field `{}` on model `{model_name}`",
                    field.name
                )));
            }
        }

        let mut sections = IndexMap::with_capacity(self.sections.len());
        for (id, meta) in self.sections {
            if sections.contains_key(&id) {
                return Err(Error::invalid_schema(format!(
                    "duplicate section `{id}` on model `{model_name}`"
                )));
            }
            sections.insert(id, meta);
        }

        Ok(Model {
            name: self.name,
            fields: self.fields,
            sections,
        })
    }
}
