use super::{Field, Name, SectionMeta};
use crate::schema::Builder;
use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct Model {
    /// Name of the model
    pub name: Name,

    /// Fields contained by the model, in declaration order
    pub fields: Vec<Field>,

    /// Named form sections, in declaration order
    pub sections: IndexMap<String, SectionMeta>,
}

impl Model {
    pub fn builder(name: &str) -> Builder {
        Builder::new(name)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Position of the named field in declaration order.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Returns `true` if the named field is a relation to another model.
    /// Unknown fields are not relations.
    pub fn is_relation_field(&self, name: &str) -> bool {
        self.field_by_name(name).is_some_and(Field::is_relation)
    }

    pub fn section(&self, id: &str) -> Option<&SectionMeta> {
        self.sections.get(id)
    }

    /// The model name as written in messages, e.g. `ModelWithOptions`.
    pub fn display_name(&self) -> String {
        self.name.upper_camel_case()
    }
}
