mod bind;

mod config;
pub use config::Config;

pub mod epoch;

mod filter;
pub use filter::Filter;

pub mod form;
pub use form::{FormDescriptor, FormOptions, Layout, Row, RowSpec, SectionDescriptor, SectionSpec};

mod mapper;
pub use mapper::Mapper;

mod widget;
pub use widget::Widget;

pub use formbind_core::{
    bail, err,
    schema::{self, app::Model},
    stmt::{self, Value, ValueMap},
    DynRecord, Error, Record, Result,
};
