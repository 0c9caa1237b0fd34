/// Model-level metadata for a named form section.
///
/// Declaring sections on a model fixes their order in generated forms and
/// lets them carry a title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionMeta {
    pub title: Option<String>,
}

impl SectionMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}
