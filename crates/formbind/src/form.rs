mod auto;
pub use auto::FormOptions;

mod layout;
pub use layout::{Layout, RowSpec, SectionSpec};

mod row;
pub use row::Row;

mod section;
pub use section::SectionDescriptor;

pub(crate) use auto::build as build_auto;
pub(crate) use layout::build as build_layout;
pub(crate) use row::build as build_row;

use serde::Serialize;

/// A form ready to be rendered: an ordered list of sections, each holding an
/// ordered list of rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub sections: Vec<SectionDescriptor>,
}

impl FormDescriptor {
    /// All rows across all sections, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }

    /// The row bound to the named field, if any.
    pub fn row(&self, key: &str) -> Option<&Row> {
        self.rows().find(|row| row.key() == Some(key))
    }
}
