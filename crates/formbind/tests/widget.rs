use formbind::{
    schema::app::Field,
    stmt::Type,
    Widget,
};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

#[test]
fn type_table() {
    let cases = [
        ("string", Widget::String),
        ("date", Widget::Date),
        ("time", Widget::Date),
        ("int", Widget::Number),
        ("integer", Widget::Number),
        ("float", Widget::Number),
        ("double", Widget::Number),
        ("bool", Widget::Check),
        ("boolean", Widget::Check),
        ("text", Widget::Text),
    ];

    for (name, expected) in cases {
        let ty: Type = assert_ok!(name.parse());
        assert_eq!(Widget::for_type(&ty), expected, "type={name}");
    }
}

#[test]
fn widget_names() {
    let names: Vec<_> = [
        Widget::String,
        Widget::Date,
        Widget::Number,
        Widget::Check,
        Widget::Text,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_eq!(names, ["string", "date", "number", "check", "text"]);
}

#[test]
fn unmapped_type_name() {
    let err = assert_err!("blob".parse::<Type>());
    assert!(err.is_unknown_type());
    assert_eq!(err.to_string(), "unknown field type `blob`");
}

#[test]
fn primitive_fields_use_their_type() {
    let field = Field::primitive("bio", Type::Text);
    assert_eq!(Widget::for_field(&field), Some(Widget::Text));
}

#[test]
fn relations_have_no_widget() {
    for field in [
        Field::belongs_to("owner", "User"),
        Field::has_many("comments", "Comment"),
        Field::has_one("cover", "Image"),
    ] {
        assert_eq!(Widget::for_field(&field), None, "field={}", field.name);
    }
}
