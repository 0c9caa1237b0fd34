use super::Row;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub rows: Vec<Row>,
}

impl SectionDescriptor {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            rows: vec![],
        }
    }

    /// Keys of the rows bound to fields, in order. Literal rows without a key
    /// are skipped.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().filter_map(Row::key)
    }
}
