mod field;
pub use field::{Field, FieldPrimitive, FieldTy};

mod model;
pub use model::Model;

mod options;
pub use options::FieldOptions;

mod relation;
pub use relation::{BelongsTo, HasMany, HasOne};

mod section;
pub use section::SectionMeta;

use super::Name;
