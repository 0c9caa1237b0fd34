mod error;
pub use error::Error;

pub mod record;
pub use record::{DynRecord, Record};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses Formbind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
