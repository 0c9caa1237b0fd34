use super::{build_row, FormDescriptor, Row, SectionDescriptor};
use crate::Config;
use formbind_core::{Error, Record, Result};
use log::debug;

/// A caller-authored form layout.
///
/// Sections and rows appear exactly in the order given. No default section is
/// added and no field is filtered out, so audit and identity fields can be
/// listed explicitly.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Form title
    pub title: Option<String>,

    pub sections: Vec<SectionSpec>,
}

#[derive(Debug, Clone, Default)]
pub struct SectionSpec {
    /// Section title
    pub title: Option<String>,

    pub rows: Vec<RowSpec>,
}

/// One entry of a [`SectionSpec`].
#[derive(Debug, Clone, PartialEq)]
pub enum RowSpec {
    /// A row generated from the named field and its current value
    Field(String),

    /// A row passed through as-is, e.g. a submit button
    Literal(Row),
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn section(mut self, section: SectionSpec) -> Self {
        self.sections.push(section);
        self
    }
}

impl SectionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            rows: vec![],
        }
    }

    /// Appends a row generated from the named field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.rows.push(RowSpec::Field(name.into()));
        self
    }

    /// Appends rows generated from each named field.
    pub fn fields<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.rows
            .extend(names.into_iter().map(|name| RowSpec::Field(name.into())));
        self
    }

    /// Appends a literal row.
    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(RowSpec::Literal(row));
        self
    }
}

impl From<&str> for RowSpec {
    fn from(name: &str) -> Self {
        Self::Field(name.to_string())
    }
}

impl From<String> for RowSpec {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

impl From<Row> for RowSpec {
    fn from(row: Row) -> Self {
        Self::Literal(row)
    }
}

pub(crate) fn build<R>(config: &Config, record: &R, layout: &Layout) -> Result<FormDescriptor>
where
    R: Record + ?Sized,
{
    let model = record.model();

    let mut sections = Vec::with_capacity(layout.sections.len());

    for spec in &layout.sections {
        let mut section = SectionDescriptor::new(spec.title.clone());

        for entry in &spec.rows {
            let row = match entry {
                RowSpec::Field(name) => {
                    let field = model
                        .field_by_name(name)
                        .ok_or_else(|| Error::unknown_field(model.display_name(), name))?;
                    build_row(config, field, record.get(name)?)
                }
                RowSpec::Literal(row) => row.clone(),
            };

            section.rows.push(row);
        }

        sections.push(section);
    }

    debug!(
        "built form from layout for model `{}`; sections={}",
        model.display_name(),
        sections.len()
    );

    Ok(FormDescriptor {
        title: layout.title.clone(),
        sections,
    })
}
