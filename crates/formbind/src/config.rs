use formbind_core::schema::{app::Field, Name};

/// Naming conventions used when mapping records to forms.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the field that identifies a record. Never shown in generated
    /// forms.
    pub identity_field: Name,

    /// Bookkeeping timestamp fields, hidden from generated forms unless a
    /// build asks for them.
    pub audit_fields: Vec<Name>,

    /// Identifier of the section that receives fields without a section
    /// override.
    pub default_section: String,

    /// Key under a field's options that holds its form overrides.
    pub form_options_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identity_field: Name::new("id"),
            audit_fields: vec![Name::new("created_at"), Name::new("updated_at")],
            default_section: "default".to_string(),
            form_options_key: "form".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identity field name
    pub fn identity_field(mut self, name: &str) -> Self {
        self.identity_field = Name::new(name);
        self
    }

    /// Replace the audit field names
    pub fn audit_fields<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.audit_fields = names.into_iter().map(Name::new).collect();
        self
    }

    /// Set the default section identifier
    pub fn default_section(mut self, id: impl Into<String>) -> Self {
        self.default_section = id.into();
        self
    }

    /// Set the options key holding per-field form overrides
    pub fn form_options_key(mut self, key: impl Into<String>) -> Self {
        self.form_options_key = key.into();
        self
    }

    pub(crate) fn is_identity(&self, field: &Field) -> bool {
        field.primary_key || self.identity_field.matches(&field.name)
    }

    pub(crate) fn is_audit(&self, field: &Field) -> bool {
        self.audit_fields.iter().any(|name| name.matches(&field.name))
    }
}
