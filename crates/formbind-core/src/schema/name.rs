use std_util::str;

/// An identifier split into its snake-case words.
///
/// Two names are equal when they spell the same words, so `createdAt` and
/// `created_at` compare equal.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = str::snake_case(src);
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn upper_camel_case(&self) -> String {
        str::upper_camel_case(&self.snake_case())
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    /// A display label, e.g. `Created at`.
    pub fn humanize(&self) -> String {
        str::humanize(&self.snake_case())
    }

    /// Returns `true` if `other` spells the same words as this name.
    pub fn matches(&self, other: &str) -> bool {
        *self == Name::new(other)
    }
}

impl From<&str> for Name {
    fn from(src: &str) -> Self {
        Name::new(src)
    }
}
