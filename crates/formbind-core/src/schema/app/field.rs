mod primitive;
pub use primitive::FieldPrimitive;

use super::{BelongsTo, FieldOptions, HasMany, HasOne};
use crate::stmt::{self, Value};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// The field name, unique within the containing model.
    pub name: String,

    /// Primitive or relation
    pub ty: FieldTy,

    /// True if the field identifies the record
    pub primary_key: bool,

    /// Per-field options, including form overrides
    pub options: FieldOptions,
}

#[derive(Clone)]
pub enum FieldTy {
    Primitive(FieldPrimitive),
    BelongsTo(BelongsTo),
    HasMany(HasMany),
    HasOne(HasOne),
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<FieldTy>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            primary_key: false,
            options: FieldOptions::default(),
        }
    }

    /// A field holding a value of the given declared type.
    pub fn primitive(name: impl Into<String>, ty: stmt::Type) -> Self {
        Self::new(name, FieldPrimitive { ty })
    }

    pub fn belongs_to(name: impl Into<String>, target: &str) -> Self {
        Self::new(name, BelongsTo::new(target))
    }

    pub fn has_many(name: impl Into<String>, target: &str) -> Self {
        Self::new(name, HasMany::new(target))
    }

    pub fn has_one(name: impl Into<String>, target: &str) -> Self {
        Self::new(name, HasOne::new(target))
    }

    /// Marks the field as the record's identity.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Sets a top-level option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Sets an option inside the nested map stored under `key`.
    pub fn nested_option(
        mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.options.insert_nested(key, name, value);
        self
    }

    /// Gets the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the type.
    pub fn ty(&self) -> &FieldTy {
        &self.ty
    }

    pub fn is_relation(&self) -> bool {
        self.ty.is_relation()
    }

    /// The declared type of a primitive field. Relations have none.
    pub fn primitive_ty(&self) -> Option<&stmt::Type> {
        self.ty.as_primitive().map(|primitive| &primitive.ty)
    }

    /// Returns `true` if the field stores a point in time.
    pub fn is_date_time(&self) -> bool {
        self.primitive_ty().is_some_and(stmt::Type::is_date_time)
    }
}

impl FieldTy {
    pub fn as_primitive(&self) -> Option<&FieldPrimitive> {
        match self {
            Self::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    pub fn is_relation(&self) -> bool {
        matches!(
            self,
            Self::BelongsTo(..) | Self::HasMany(..) | Self::HasOne(..)
        )
    }
}

impl fmt::Display for FieldTy {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(primitive) => fmt::Display::fmt(&primitive.ty, fmt),
            Self::BelongsTo(_) => fmt.write_str("belongs_to"),
            Self::HasMany(_) => fmt.write_str("has_many"),
            Self::HasOne(_) => fmt.write_str("has_one"),
        }
    }
}

impl fmt::Debug for FieldTy {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => ty.fmt(fmt),
            Self::BelongsTo(ty) => ty.fmt(fmt),
            Self::HasMany(ty) => ty.fmt(fmt),
            Self::HasOne(ty) => ty.fmt(fmt),
        }
    }
}
