use formbind_core::stmt::parse_timestamp;
use pretty_assertions::assert_eq;
use std_util::prelude::*;

const EXPECTED: i64 = 1_335_205_543;

#[test]
fn rfc3339() {
    let parsed = assert_ok!(parse_timestamp("2012-04-23T18:25:43Z"));
    assert_eq!(parsed.timestamp(), EXPECTED);

    let parsed = assert_ok!(parse_timestamp("2012-04-23T18:25:43.511Z"));
    assert_eq!(parsed.timestamp(), EXPECTED);
    assert_eq!(parsed.timestamp_subsec_millis(), 511);
}

#[test]
fn space_separated_with_offset() {
    let parsed = assert_ok!(parse_timestamp("2012-04-23 18:25:43 +0000"));
    assert_eq!(parsed.timestamp(), EXPECTED);

    let parsed = assert_ok!(parse_timestamp("2012-04-23 20:25:43 +0200"));
    assert_eq!(parsed.timestamp(), EXPECTED);
}

#[test]
fn without_offset_is_utc() {
    let parsed = assert_ok!(parse_timestamp("2012-04-23 18:25:43"));
    assert_eq!(parsed.timestamp(), EXPECTED);
}

#[test]
fn rejects_other_shapes() {
    let err = assert_err!(parse_timestamp("3/18/12 @ 7:00 PM"));
    assert!(err.is_parse());
    assert_eq!(
        err.to_string(),
        "failed to parse `3/18/12 @ 7:00 PM` as timestamp"
    );
}
