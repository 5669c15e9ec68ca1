//! Row parser: CSV text into type-inferred rows.
//!
//! Parsing is permissive. Only a missing header aborts; records the reader
//! cannot make sense of are skipped, and degenerate rows (no timestamp, or a
//! single populated column, typically trailing blank lines) are filtered out.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::constants::TIMESTAMP_COLUMN;
use crate::error::{MotionError, MotionResult};
use crate::models::{CellValue, RawRow};

/// Decimal number, optionally signed, with optional fraction and exponent.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-+]?(\d+\.?\d*|\.\d+)([eE][-+]?\d+)?\s*$").expect("number pattern is valid")
});

/// Output of the row parser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRows {
    /// Header names in file order
    pub headers: Vec<String>,
    /// Rows that survived filtering, in file order
    pub rows: Vec<RawRow>,
    /// Rows dropped for lacking a timestamp or having a single populated column
    pub discarded: usize,
    /// Records the CSV reader rejected
    pub unreadable: usize,
}

/// Infers the type of a single cell.
///
/// Empty cells are null, numeric-looking cells are numbers, and everything
/// else stays text. Words like `NaN` or `inf` are kept as text.
#[must_use]
pub fn infer_cell(raw: &str) -> CellValue {
    if raw.is_empty() {
        return CellValue::Null;
    }
    if NUMBER_PATTERN.is_match(raw) {
        if let Ok(n) = raw.trim().parse::<f64>() {
            if n.is_finite() {
                return CellValue::Number(n);
            }
        }
    }
    CellValue::Text(raw.to_string())
}

/// Returns true when a row carries a timestamp and more than one populated column.
#[must_use]
pub fn is_usable_row(row: &RawRow) -> bool {
    let has_timestamp = row
        .get(TIMESTAMP_COLUMN)
        .is_some_and(|value| !value.is_null());
    has_timestamp && row.populated_count() > 1
}

/// Parses CSV text with a header row into filtered rows.
///
/// # Errors
///
/// Returns [`MotionError::Parse`] when the text is empty or the header row is
/// blank or cannot be read.
pub fn parse_rows(text: &str) -> MotionResult<ParsedRows> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(MotionError::parse("input is empty, expected a header row"));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| MotionError::parse(format!("cannot read header row: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(MotionError::parse("header row has no column names"));
    }

    let mut parsed = ParsedRows {
        headers,
        ..ParsedRows::default()
    };

    for (record_idx, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                // +2: one for the header, one for 1-based line numbers
                warn!(line = record_idx + 2, error = %e, "skipping unreadable CSV record");
                parsed.unreadable += 1;
                continue;
            }
        };

        let row: RawRow = parsed
            .headers
            .iter()
            .zip(record.iter())
            .map(|(name, cell)| (name.clone(), infer_cell(cell)))
            .collect();

        if is_usable_row(&row) {
            parsed.rows.push(row);
        } else {
            debug!(line = record_idx + 2, "discarding degenerate row");
            parsed.discarded += 1;
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_cell_types() {
        assert_eq!(infer_cell(""), CellValue::Null);
        assert_eq!(infer_cell("42"), CellValue::Number(42.0));
        assert_eq!(infer_cell("-1.5"), CellValue::Number(-1.5));
        assert_eq!(infer_cell(".5"), CellValue::Number(0.5));
        assert_eq!(infer_cell("1e3"), CellValue::Number(1000.0));
        assert_eq!(infer_cell(" 7 "), CellValue::Number(7.0));
        assert_eq!(
            infer_cell("2024-01-01 10:00:00"),
            CellValue::Text("2024-01-01 10:00:00".to_string())
        );
        assert_eq!(infer_cell("NaN"), CellValue::Text("NaN".to_string()));
        assert_eq!(infer_cell("inf"), CellValue::Text("inf".to_string()));
        assert_eq!(infer_cell(" "), CellValue::Text(" ".to_string()));
    }

    #[test]
    fn test_parse_basic_rows() {
        let csv = "timestamp,KeypointType.NOSE_x,KeypointType.NOSE_y\n\
                   2024-01-01T00:00:00Z,10,20\n\
                   2024-01-01T00:00:01Z,11,21\n";
        let parsed = parse_rows(csv).unwrap();

        assert_eq!(
            parsed.headers,
            vec!["timestamp", "KeypointType.NOSE_x", "KeypointType.NOSE_y"]
        );
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(
            parsed.rows[0].get("KeypointType.NOSE_x"),
            Some(&CellValue::Number(10.0))
        );
        assert_eq!(parsed.discarded, 0);
    }

    #[test]
    fn test_timestamp_only_row_is_discarded() {
        let csv = "timestamp,a\n2024-01-01T00:00:00Z,\n2024-01-01T00:00:01Z,5\n";
        let parsed = parse_rows(csv).unwrap();

        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].get("a"), Some(&CellValue::Number(5.0)));
        assert_eq!(parsed.discarded, 1);
    }

    #[test]
    fn test_row_without_timestamp_is_discarded() {
        let csv = "timestamp,a,b\n,1,2\n2024-01-01T00:00:00Z,1,2\n";
        let parsed = parse_rows(csv).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.discarded, 1);
    }

    #[test]
    fn test_missing_timestamp_column_yields_no_rows() {
        let csv = "time,a\n1,2\n3,4\n";
        let parsed = parse_rows(csv).unwrap();
        assert!(parsed.rows.is_empty());
        assert_eq!(parsed.discarded, 2);
    }

    #[test]
    fn test_trailing_blank_line_is_harmless() {
        let csv = "timestamp,a\n2024-01-01T00:00:00Z,1\n\n";
        let parsed = parse_rows(csv).unwrap();
        assert_eq!(parsed.rows.len(), 1);
    }

    #[test]
    fn test_short_record_keeps_present_columns_only() {
        let csv = "timestamp,a,b\n2024-01-01T00:00:00Z,1\n";
        let parsed = parse_rows(csv).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].len(), 2);
        assert_eq!(parsed.rows[0].get("b"), None);
    }

    #[test]
    fn test_extra_cells_are_ignored() {
        let csv = "timestamp,a\n2024-01-01T00:00:00Z,1,99\n";
        let parsed = parse_rows(csv).unwrap();
        assert_eq!(parsed.rows[0].len(), 2);
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let csv = "\u{feff}timestamp,a\n2024-01-01T00:00:00Z,1\n";
        let parsed = parse_rows(csv).unwrap();
        assert_eq!(parsed.headers[0], "timestamp");
        assert_eq!(parsed.rows.len(), 1);
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        assert!(matches!(parse_rows(""), Err(MotionError::Parse(_))));
        assert!(matches!(parse_rows("  \n\n"), Err(MotionError::Parse(_))));
    }

    #[test]
    fn test_header_only_file_yields_empty_rows() {
        let parsed = parse_rows("timestamp,a\n").unwrap();
        assert!(parsed.rows.is_empty());
        assert_eq!(parsed.headers.len(), 2);
    }
}
