pub mod app;

mod builder;
pub use builder::Builder;

mod name;
pub use name::Name;
