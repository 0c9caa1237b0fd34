use super::*;

#[derive(Debug, Clone)]
pub struct HasOne {
    /// Associated model
    pub target: Name,
}

impl HasOne {
    pub fn new(target: &str) -> Self {
        Self {
            target: Name::new(target),
        }
    }
}

impl From<HasOne> for FieldTy {
    fn from(value: HasOne) -> Self {
        Self::HasOne(value)
    }
}
