mod fixtures;

use fixtures::*;
use formbind::{stmt::Value, FormOptions, Layout, Mapper, Record, Row, SectionSpec};
use pretty_assertions::assert_eq;
use serde_json::json;
use std_util::prelude::*;

#[test]
fn form_serializes_to_json() {
    let form = assert_ok!(Mapper::default().build_form(
        &get_together(),
        &FormOptions::new()
            .title("Event")
            .default_section_title("Event"),
    ));

    let json = assert_ok!(serde_json::to_value(&form));

    assert_eq!(
        json,
        json!({
            "title": "Event",
            "sections": [
                {
                    "title": "Event",
                    "rows": [
                        {
                            "key": "name",
                            "title": "Name",
                            "type": "string",
                            "placeholder": "Name",
                            "value": "get together",
                        },
                        {
                            "key": "date",
                            "title": "Date",
                            "type": "date",
                            "placeholder": "Date",
                            "value": 1352840400.0,
                            "picker_type": "date_time",
                        },
                    ],
                },
                {
                    "title": "Address",
                    "rows": [
                        {
                            "key": "location",
                            "title": "Location",
                            "type": "string",
                            "placeholder": "Location",
                            "value": "my house",
                            "section": "address",
                        },
                    ],
                },
            ],
        })
    );
}

#[test]
fn untitled_form_omits_title() {
    let form = assert_ok!(Mapper::default().build_layout(
        &get_together(),
        &Layout::new().section(
            SectionSpec::new().row(Row::new().with("type", "submit")),
        ),
    ));

    let json = assert_ok!(serde_json::to_value(&form));
    assert_eq!(
        json,
        json!({ "sections": [{ "rows": [{ "type": "submit" }] }] })
    );
}

#[test]
fn binds_a_json_payload() {
    let mut record = get_together();
    let payload = json!({
        "name": "X",
        "date": 1358197323,
        "location": "Y",
        "id": 42,
    });

    let Value::Map(data) = Value::from(payload) else {
        panic!("expected a map");
    };

    assert_ok!(Mapper::default().bind(&mut record, &data));

    assert_eq!(record.get("name").unwrap(), Value::from("X"));
    assert_eq!(record.get("location").unwrap(), Value::from("Y"));
    assert_eq!(record.get("id").unwrap(), Value::from(1));
    assert_eq!(
        record.get("date").unwrap().as_timestamp().unwrap().to_rfc3339(),
        "2013-01-14T21:02:03+00:00"
    );
}

#[test]
fn timestamps_serialize_as_rfc3339() {
    let record = get_together();
    let json = assert_ok!(serde_json::to_value(record.get("date").unwrap()));
    assert_eq!(json, json!("2012-11-13T21:00:00+00:00"));
}
