use super::*;

#[derive(Debug, Clone)]
pub struct BelongsTo {
    /// Name of the model that owns the relation
    pub target: Name,
}

impl BelongsTo {
    pub fn new(target: &str) -> Self {
        Self {
            target: Name::new(target),
        }
    }
}

impl From<BelongsTo> for FieldTy {
    fn from(value: BelongsTo) -> Self {
        Self::BelongsTo(value)
    }
}
