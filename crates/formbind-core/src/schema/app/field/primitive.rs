use crate::stmt;

#[derive(Debug, Clone)]
pub struct FieldPrimitive {
    /// The field's declared type
    pub ty: stmt::Type,
}

impl From<FieldPrimitive> for super::FieldTy {
    fn from(value: FieldPrimitive) -> Self {
        Self::Primitive(value)
    }
}
