use super::*;

#[derive(Debug, Clone)]
pub struct HasMany {
    /// Associated model
    pub target: Name,
}

impl HasMany {
    pub fn new(target: &str) -> Self {
        Self {
            target: Name::new(target),
        }
    }
}

impl From<HasMany> for FieldTy {
    fn from(value: HasMany) -> Self {
        Self::HasMany(value)
    }
}
