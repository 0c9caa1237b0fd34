use super::{build_row, FormDescriptor, SectionDescriptor};
use crate::{Config, Filter};
use formbind_core::{schema::app::Field, Record, Result};
use indexmap::IndexMap;
use log::debug;

/// Options for a single automatically generated form.
#[derive(Debug, Clone, Default)]
pub struct FormOptions {
    /// Form title
    pub title: Option<String>,

    /// Include the audit timestamp fields
    pub expose_audit_fields: bool,

    /// Title of the default section, unless the model declares one
    pub default_section_title: Option<String>,
}

impl FormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn expose_audit_fields(mut self, expose: bool) -> Self {
        self.expose_audit_fields = expose;
        self
    }

    pub fn default_section_title(mut self, title: impl Into<String>) -> Self {
        self.default_section_title = Some(title.into());
        self
    }
}

/// Builds a form holding every eligible field of `record`.
///
/// The default section is always first, even when empty. Sections declared on
/// the model follow in declaration order, then sections that are only named
/// by a field's `section` override, in order of first reference.
pub(crate) fn build<R>(config: &Config, record: &R, options: &FormOptions) -> Result<FormDescriptor>
where
    R: Record + ?Sized,
{
    let model = record.model();

    // Keyed by section id; iteration order is display order.
    let mut sections: IndexMap<&str, SectionDescriptor> = IndexMap::new();
    sections.insert(config.default_section.as_str(), SectionDescriptor::default());

    for (id, meta) in &model.sections {
        sections.entry(id.as_str()).or_default().title = meta.title.clone();
    }

    if let Some(default) = sections.get_mut(config.default_section.as_str()) {
        if default.title.is_none() {
            default.title = options.default_section_title.clone();
        }
    }

    let filter = Filter::new(config, options.expose_audit_fields);

    for field in filter.eligible(model) {
        let value = record.get(&field.name)?;
        let row = build_row(config, field, value);

        let target = section_override(config, field).unwrap_or(config.default_section.as_str());
        sections.entry(target).or_default().rows.push(row);
    }

    debug!(
        "built form for model `{}`; sections={} rows={}",
        model.display_name(),
        sections.len(),
        sections.values().map(|section| section.rows.len()).sum::<usize>()
    );

    Ok(FormDescriptor {
        title: options.title.clone(),
        sections: sections.into_values().collect(),
    })
}

/// The section a field asks to be placed in. Only string values route;
/// anything else falls back to the default section.
fn section_override<'a>(config: &Config, field: &'a Field) -> Option<&'a str> {
    field
        .options
        .map(&config.form_options_key)?
        .get("section")?
        .as_str()
}
