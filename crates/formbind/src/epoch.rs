//! Conversions between points in time and the floating-point count of
//! seconds since the Unix epoch (UTC) that forms exchange.

use chrono::{DateTime, Utc};
use formbind_core::{stmt::Value, Error, Result};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Seconds since the epoch, including the fractional part.
pub fn to_seconds(timestamp: &DateTime<Utc>) -> f64 {
    timestamp.timestamp() as f64 + f64::from(timestamp.timestamp_subsec_nanos()) / NANOS_PER_SEC
}

/// The point in time `seconds` after the epoch.
///
/// Fails with a type coercion error if `seconds` is not finite or falls
/// outside the representable range.
pub fn from_seconds(seconds: f64) -> Result<DateTime<Utc>> {
    let out_of_range = || Error::type_coercion(Value::F64(seconds), "timestamp");

    if !seconds.is_finite() {
        return Err(out_of_range());
    }

    let mut whole = seconds.floor();
    let mut nanos = ((seconds - whole) * NANOS_PER_SEC).round();
    if nanos >= NANOS_PER_SEC {
        whole += 1.0;
        nanos = 0.0;
    }

    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return Err(out_of_range());
    }

    DateTime::from_timestamp(whole as i64, nanos as u32).ok_or_else(out_of_range)
}

/// Exposes a stored value to a form: timestamps become seconds since the
/// epoch, everything else passes through.
pub(crate) fn encode(value: Value) -> Value {
    match value {
        Value::Timestamp(timestamp) => Value::F64(to_seconds(&timestamp)),
        value => value,
    }
}

/// Reads a form value back for a date or time field: numbers are seconds
/// since the epoch, everything else passes through for the record to coerce.
pub(crate) fn decode(value: Value) -> Result<Value> {
    Ok(match value {
        Value::F64(seconds) => Value::Timestamp(from_seconds(seconds)?),
        Value::I64(seconds) => Value::Timestamp(from_seconds(seconds as f64)?),
        value => value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_seconds_round_trip() {
        let timestamp = DateTime::from_timestamp(1_358_197_323, 0).unwrap();
        assert_eq!(to_seconds(&timestamp), 1_358_197_323.0);
        assert_eq!(from_seconds(1_358_197_323.0).unwrap(), timestamp);
    }

    #[test]
    fn fractional_seconds_keep_millis() {
        let timestamp = DateTime::from_timestamp(1_335_205_543, 511_000_000).unwrap();
        let back = from_seconds(to_seconds(&timestamp)).unwrap();
        assert_eq!(back.timestamp_millis(), timestamp.timestamp_millis());
    }

    #[test]
    fn before_epoch() {
        let back = from_seconds(-1.5).unwrap();
        assert_eq!(back.timestamp(), -2);
        assert_eq!(back.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(from_seconds(f64::NAN).unwrap_err().is_type_coercion());
        assert!(from_seconds(f64::INFINITY).unwrap_err().is_type_coercion());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(from_seconds(1e300).unwrap_err().is_type_coercion());
    }

    #[test]
    fn encode_passes_non_timestamps_through() {
        assert_eq!(encode(Value::Null), Value::Null);
        assert_eq!(encode(Value::from("x")), Value::from("x"));
    }

    #[test]
    fn decode_passes_strings_through() {
        let value = decode(Value::from("2012-04-23T18:25:43Z")).unwrap();
        assert_eq!(value, Value::from("2012-04-23T18:25:43Z"));
    }
}
