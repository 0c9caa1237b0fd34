use super::Error;
use crate::stmt::Value;

/// Error when a record setter cannot coerce a value into the field's type.
#[derive(Debug)]
pub(super) struct TypeCoercionError {
    value: Value,
    to_type: Box<str>,
}

impl std::error::Error for TypeCoercionError {}

impl core::fmt::Display for TypeCoercionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot convert {} to {}",
            self.value.kind_name(),
            self.to_type
        )
    }
}

impl Error {
    /// Creates a type coercion error.
    pub fn type_coercion(value: Value, to_type: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeCoercion(TypeCoercionError {
            value,
            to_type: to_type.into().into(),
        }))
    }

    /// Returns `true` if this error is a type coercion error.
    pub fn is_type_coercion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeCoercion(_))
    }
}
