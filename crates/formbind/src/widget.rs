use formbind_core::{schema::app::Field, stmt::Type};
use std::fmt;

/// The kind of UI control a form row renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    String,
    Date,
    Number,
    Check,
    Text,
}

impl Widget {
    /// Maps a declared field type to its widget.
    ///
    /// | type         | widget   |
    /// |--------------|----------|
    /// | string       | `string` |
    /// | date, time   | `date`   |
    /// | int, float   | `number` |
    /// | bool         | `check`  |
    /// | text         | `text`   |
    pub fn for_type(ty: &Type) -> Widget {
        match ty {
            Type::String => Widget::String,
            Type::Date | Type::Time => Widget::Date,
            Type::I64 | Type::F64 => Widget::Number,
            Type::Bool => Widget::Check,
            Type::Text => Widget::Text,
        }
    }

    /// Maps a field to its widget. Relations have none.
    pub fn for_field(field: &Field) -> Option<Widget> {
        field.primitive_ty().map(Self::for_type)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Widget::String => "string",
            Widget::Date => "date",
            Widget::Number => "number",
            Widget::Check => "check",
            Widget::Text => "text",
        }
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
