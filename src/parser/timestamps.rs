//! Timestamp normalizer: absolute date-times into a relative timeline.
//!
//! The first row is the baseline. If its timestamp cannot be read the whole
//! load fails with [`MotionError::TimestampBaseline`] instead of producing a
//! sequence of undefined times.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::TIMESTAMP_COLUMN;
use crate::error::{MotionError, MotionResult};
use crate::models::{CellValue, Frame, RawRow};

/// How purely numeric timestamp cells are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NumericUnit {
    /// Milliseconds since the Unix epoch
    #[default]
    Milliseconds,
    /// Seconds since the Unix epoch
    Seconds,
}

/// Offset-aware formats tried after RFC 3339 and RFC 2822.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Naive date-time formats, read as UTC.
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats, read as midnight UTC.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Frames produced by normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedFrames {
    /// Frames with relative timestamps, in input order
    pub frames: Vec<Frame>,
    /// Non-baseline rows dropped because their timestamp did not parse
    pub unparsed: usize,
}

fn parse_text_instant(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&midnight));
        }
    }
    None
}

/// Converts an epoch number to an instant.
///
/// The whole part goes through integer arithmetic so that two large epoch
/// values still differ by exactly their written difference.
#[allow(clippy::cast_possible_truncation)]
fn numeric_instant(value: f64, unit: NumericUnit) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let (whole, fraction) = (value.trunc(), value.fract());
    let (base, sub_nanos) = match unit {
        NumericUnit::Milliseconds => (
            DateTime::<Utc>::from_timestamp_millis(whole as i64)?,
            (fraction * 1e6).round() as i64,
        ),
        NumericUnit::Seconds => (
            DateTime::<Utc>::from_timestamp(whole as i64, 0)?,
            (fraction * 1e9).round() as i64,
        ),
    };
    base.checked_add_signed(TimeDelta::nanoseconds(sub_nanos))
}

/// Parses a timestamp cell into an absolute instant.
///
/// Returns `None` for null cells, out-of-range numbers, and text no
/// supported format accepts.
#[must_use]
pub fn parse_instant(value: &CellValue, unit: NumericUnit) -> Option<DateTime<Utc>> {
    match value {
        CellValue::Number(n) => numeric_instant(*n, unit),
        CellValue::Text(text) => parse_text_instant(text),
        CellValue::Null => None,
    }
}

/// Seconds from `t0` to `instant`, taken from the integer difference.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn seconds_between(t0: DateTime<Utc>, instant: DateTime<Utc>) -> f64 {
    let delta = instant.signed_duration_since(t0);
    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        // Spans beyond ~292 years overflow i64 nanoseconds
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}

fn timestamp_of(row: &RawRow) -> &CellValue {
    row.get(TIMESTAMP_COLUMN).unwrap_or(&CellValue::Null)
}

/// Rewrites every row's timestamp to seconds elapsed since the first row.
///
/// Row order is kept as is; the source is trusted to be time-ordered.
///
/// # Errors
///
/// Returns [`MotionError::TimestampBaseline`] when the first row's timestamp
/// cannot be parsed.
pub fn normalize_timestamps(rows: Vec<RawRow>, unit: NumericUnit) -> MotionResult<NormalizedFrames> {
    let Some(first) = rows.first() else {
        return Ok(NormalizedFrames::default());
    };

    let first_value = timestamp_of(first);
    let t0 = parse_instant(first_value, unit).ok_or_else(|| MotionError::TimestampBaseline {
            raw: first_value.to_string(),
        })?;

    let mut normalized = NormalizedFrames {
        frames: Vec::with_capacity(rows.len()),
        unparsed: 0,
    };

    for (row_idx, row) in rows.into_iter().enumerate() {
        match parse_instant(timestamp_of(&row), unit) {
            Some(instant) => normalized
                .frames
                .push(Frame::new(row, seconds_between(t0, instant))),
            None => {
                warn!(
                    row = row_idx,
                    timestamp = %timestamp_of(&row),
                    "dropping row with unparseable timestamp"
                );
                normalized.unparsed += 1;
            }
        }
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(timestamp: CellValue) -> RawRow {
        [
            ("timestamp", timestamp),
            ("value", CellValue::Number(1.0)),
        ]
        .into_iter()
        .collect()
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_parse_supported_formats() {
        let unit = NumericUnit::Milliseconds;
        let expected = 1_704_067_200; // 2024-01-01T00:00:00Z

        for input in [
            "2024-01-01T00:00:00Z",
            "2024-01-01T00:00:00+00:00",
            "2024-01-01T01:00:00+01:00",
            "Mon, 01 Jan 2024 00:00:00 +0000",
            "2024-01-01 00:00:00",
            "2024-01-01T00:00:00",
            "2024/01/01 00:00:00",
            "2024-01-01 00:00",
            "2024-01-01",
            "2024-01-01 00:00:00+00:00",
        ] {
            let parsed = parse_instant(&text(input), unit).map(|dt| dt.timestamp());
            assert_eq!(parsed, Some(expected), "format not accepted: {input}");
        }
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let parsed = parse_instant(&text("2024-01-01 00:00:00.250"), NumericUnit::Milliseconds).unwrap();
        assert_eq!(parsed.timestamp(), 1_704_067_200);
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_numeric_units() {
        let value = CellValue::Number(1500.0);
        let millis = parse_instant(&value, NumericUnit::Milliseconds).unwrap();
        assert_eq!(millis.timestamp_millis(), 1500);

        let seconds = parse_instant(&value, NumericUnit::Seconds).unwrap();
        assert_eq!(seconds.timestamp(), 1500);
        assert_eq!(seconds.timestamp_subsec_nanos(), 0);

        let fractional = parse_instant(&CellValue::Number(2.5), NumericUnit::Seconds).unwrap();
        assert_eq!(fractional.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_out_of_range_number_is_unparsed() {
        assert_eq!(parse_instant(&CellValue::Number(1e300), NumericUnit::Seconds), None);
    }

    #[test]
    fn test_millisecond_offsets_are_exact_on_current_dates() {
        let rows = vec![
            row(text("2024-03-05T12:30:45.000Z")),
            row(text("2024-03-05T12:30:45.123Z")),
            row(text("2024-03-05T12:30:46.001Z")),
        ];
        let normalized = normalize_timestamps(rows, NumericUnit::Milliseconds).unwrap();

        assert_eq!(normalized.frames[1].relative_time, 0.123);
        assert_eq!(normalized.frames[2].relative_time, 1.001);
        assert_eq!(
            normalized.frames[1].fields.get("timestamp").map(CellValue::to_csv_field),
            Some("0.123".to_string())
        );
    }

    #[test]
    fn test_epoch_millisecond_offsets_are_exact() {
        let rows = vec![
            row(CellValue::Number(1_709_641_845_000.0)),
            row(CellValue::Number(1_709_641_845_123.0)),
        ];
        let normalized = normalize_timestamps(rows, NumericUnit::Milliseconds).unwrap();
        assert_eq!(normalized.frames[1].relative_time, 0.123);
    }

    #[test]
    fn test_seconds_between_uses_integer_difference() {
        let t0 = parse_instant(&text("2024-03-05T12:30:45.000Z"), NumericUnit::Milliseconds).unwrap();
        let t1 = parse_instant(&text("2024-03-05T12:30:44.750Z"), NumericUnit::Milliseconds).unwrap();
        assert_eq!(seconds_between(t0, t0), 0.0);
        assert_eq!(seconds_between(t0, t1), -0.25);
    }

    #[test]
    fn test_parse_rejects_garbage_and_null() {
        assert_eq!(parse_instant(&text("yesterday"), NumericUnit::Milliseconds), None);
        assert_eq!(parse_instant(&CellValue::Null, NumericUnit::Milliseconds), None);
    }

    #[test]
    fn test_first_frame_is_exactly_zero() {
        let rows = vec![
            row(text("2024-03-05T12:30:45.123Z")),
            row(text("2024-03-05T12:30:45.623Z")),
        ];
        let normalized = normalize_timestamps(rows, NumericUnit::Milliseconds).unwrap();

        assert_eq!(normalized.frames[0].relative_time, 0.0);
        assert!((normalized.frames[1].relative_time - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_relative_times_are_non_decreasing_for_ordered_input() {
        let rows: Vec<RawRow> = (0..20)
            .map(|i| row(text(&format!("2024-01-01 00:00:{:02}.{}", i / 2, (i % 2) * 5))))
            .collect();
        let normalized = normalize_timestamps(rows, NumericUnit::Milliseconds).unwrap();

        assert_eq!(normalized.frames.len(), 20);
        assert!(normalized
            .frames
            .windows(2)
            .all(|pair| pair[0].relative_time <= pair[1].relative_time));
    }

    #[test]
    fn test_timestamp_field_holds_relative_seconds() {
        let rows = vec![row(CellValue::Number(10_000.0)), row(CellValue::Number(12_500.0))];
        let normalized = normalize_timestamps(rows, NumericUnit::Milliseconds).unwrap();

        assert_eq!(
            normalized.frames[1].fields.get("timestamp"),
            Some(&CellValue::Number(2.5))
        );
    }

    #[test]
    fn test_order_is_preserved_without_sorting() {
        let rows = vec![
            row(text("2024-01-01 00:00:05")),
            row(text("2024-01-01 00:00:03")),
        ];
        let normalized = normalize_timestamps(rows, NumericUnit::Milliseconds).unwrap();
        assert!((normalized.frames[1].relative_time + 2.0).abs() < 1e-9);
    }

    /// An unreadable first timestamp is reported as a baseline error rather
    /// than silently turning every relative time into NaN.
    #[test]
    fn test_bad_baseline_is_reported_not_propagated_as_nan() {
        let rows = vec![row(text("not a date")), row(text("2024-01-01 00:00:01"))];
        let err = normalize_timestamps(rows, NumericUnit::Milliseconds).unwrap_err();

        match err {
            MotionError::TimestampBaseline { raw } => assert_eq!(raw, "not a date"),
            other => panic!("expected baseline error, got {other:?}"),
        }
    }

    #[test]
    fn test_later_unparseable_rows_are_dropped() {
        let rows = vec![
            row(text("2024-01-01 00:00:00")),
            row(text("garbage")),
            row(text("2024-01-01 00:00:02")),
        ];
        let normalized = normalize_timestamps(rows, NumericUnit::Milliseconds).unwrap();

        assert_eq!(normalized.frames.len(), 2);
        assert_eq!(normalized.unparsed, 1);
        assert!(normalized.frames.iter().all(|f| f.relative_time.is_finite()));
    }

    #[test]
    fn test_empty_input_normalizes_to_nothing() {
        let normalized = normalize_timestamps(Vec::new(), NumericUnit::Milliseconds).unwrap();
        assert!(normalized.frames.is_empty());
    }
}
