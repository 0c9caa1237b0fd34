#![allow(dead_code)]

use formbind::{
    schema::app::{Field, Model, SectionMeta},
    stmt::{Type, Value, ValueMap},
    DynRecord,
};
use std::sync::Arc;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An event with a date picker override, a field routed to the `address`
/// section, both audit timestamps and a has-many relation.
pub fn model_with_options() -> Arc<Model> {
    let model = Model::builder("ModelWithOptions")
        .field(Field::primitive("id", Type::I64).primary_key())
        .field(Field::primitive("name", Type::String))
        .field(
            Field::primitive("date", Type::Date).nested_option("form", "picker_type", "date_time"),
        )
        .field(
            Field::primitive("location", Type::String).nested_option("form", "section", "address"),
        )
        .field(Field::primitive("created_at", Type::Date))
        .field(Field::primitive("updated_at", Type::Date))
        .field(Field::has_many("related_models", "RelatedModel"))
        .section("address", SectionMeta::titled("Address"))
        .build()
        .unwrap();

    Arc::new(model)
}

pub fn get_together() -> DynRecord {
    DynRecord::with_values(
        model_with_options(),
        [
            ("id", Value::from(1)),
            ("name", Value::from("get together")),
            ("date", Value::from("2012-11-13 21:00:00 +0000")),
            ("location", Value::from("my house")),
            ("created_at", Value::from("2012-11-01T08:00:00Z")),
            ("updated_at", Value::from("2012-11-02T08:00:00Z")),
        ],
    )
    .unwrap()
}

pub fn data<const N: usize>(entries: [(&str, Value); N]) -> ValueMap {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
