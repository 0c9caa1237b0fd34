use formbind_core::{
    schema::app::{Field, Model},
    stmt::{Type, Value},
    DynRecord, Record,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std_util::prelude::*;

fn model() -> Arc<Model> {
    Arc::new(
        Model::builder("Event")
            .field(Field::primitive("name", Type::String))
            .field(Field::primitive("seats", Type::I64))
            .field(Field::primitive("date", Type::Date))
            .field(Field::has_many("guests", "Guest"))
            .build()
            .unwrap(),
    )
}

#[test]
fn starts_null() {
    let record = DynRecord::new(model());

    for field in record.model().fields() {
        assert_eq!(assert_ok!(record.get(&field.name)), Value::Null);
    }
}

#[test]
fn setter_coerces() {
    let record = assert_ok!(DynRecord::with_values(
        model(),
        [
            ("name", Value::from("launch")),
            ("seats", Value::from("12")),
            ("date", Value::from("2012-04-23 18:25:43 +0000")),
        ],
    ));

    assert_eq!(assert_ok!(record.get("seats")), Value::I64(12));
    assert_eq!(
        assert_ok!(record.get("date")).as_timestamp().unwrap().timestamp(),
        1_335_205_543
    );
}

#[test]
fn relations_store_anything() {
    let mut record = DynRecord::new(model());
    let guests = Value::from(vec![Value::from("ann"), Value::from("bo")]);

    assert_ok!(record.set("guests", guests.clone()));
    assert_eq!(assert_ok!(record.get("guests")), guests);
}

#[test]
fn unknown_field() {
    let mut record = DynRecord::new(model());

    let err = assert_err!(record.get("venue"));
    assert!(err.is_unknown_field());
    assert_eq!(err.to_string(), "unknown field `venue` on model `Event`");

    assert!(assert_err!(record.set("venue", Value::Null)).is_unknown_field());
}

#[test]
fn failed_set_keeps_old_value() {
    let mut record = assert_ok!(DynRecord::with_values(model(), [("seats", 3)]));

    let err = assert_err!(record.set("seats", Value::Bool(true)));
    assert!(err.is_type_coercion());
    assert_eq!(assert_ok!(record.get("seats")), Value::I64(3));
}

#[test]
fn through_a_mutable_reference() {
    fn rename(mut record: impl Record) {
        record.set("name", Value::from("renamed")).unwrap();
    }

    let mut record = DynRecord::new(model());
    rename(&mut record);
    assert_eq!(assert_ok!(record.get("name")), Value::from("renamed"));
}
