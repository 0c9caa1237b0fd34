use super::Error;

/// Error when a declared type name does not resolve to a known type.
///
/// This is a configuration error. It surfaces while a schema is declared,
/// before any form is built.
#[derive(Debug)]
pub(super) struct UnknownTypeError {
    ty: Box<str>,
}

impl std::error::Error for UnknownTypeError {}

impl core::fmt::Display for UnknownTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown field type `{}`", self.ty)
    }
}

impl Error {
    /// Creates an unknown type error.
    pub fn unknown_type(ty: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::UnknownType(UnknownTypeError {
            ty: ty.to_string().into(),
        }))
    }

    /// Returns `true` if this error is an unknown type error.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownType(_))
    }
}
