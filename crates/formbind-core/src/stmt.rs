mod timestamp;
pub use timestamp::parse_timestamp;

mod ty;
pub use ty::Type;

mod value;
pub use value::{Value, ValueMap};

mod value_serde;
