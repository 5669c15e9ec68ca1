//! Annotated CSV serializer.
//!
//! Every frame becomes one record. The header is the union of field names in
//! first-seen order, followed by the flag column. An input column that is
//! itself called `Flag` is superseded by the annotation.

use std::collections::HashSet;

use crate::constants::FLAG_COLUMN;
use crate::error::{MotionError, MotionResult};
use crate::models::{AnnotationMap, FrameSequence};

/// Collects field names across all frames in first-seen order, minus the flag column.
#[must_use]
pub fn header_union(frames: &FrameSequence) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::new();

    for frame in frames {
        for field in frame.fields.iter() {
            if field.name != FLAG_COLUMN && seen.insert(field.name.as_str()) {
                headers.push(field.name.clone());
            }
        }
    }

    headers
}

/// Serializes frames merged with their flags.
///
/// Returns `Ok(None)` when there are no frames. Frames without a flag get an
/// empty flag cell; cells a frame lacks are written empty.
///
/// # Errors
///
/// Returns [`MotionError::Write`] if the CSV writer fails.
pub fn export_annotated_csv(
    frames: &FrameSequence,
    annotations: &AnnotationMap,
) -> MotionResult<Option<String>> {
    if frames.is_empty() {
        return Ok(None);
    }

    let headers = header_union(frames);
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let write_err = |e: csv::Error| MotionError::Write(e.to_string());

    writer
        .write_record(headers.iter().map(String::as_str).chain([FLAG_COLUMN]))
        .map_err(write_err)?;

    for (index, frame) in frames.iter().enumerate() {
        let mut record: Vec<String> = headers
            .iter()
            .map(|name| frame.fields.get(name).map(|v| v.to_csv_field()).unwrap_or_default())
            .collect();
        record.push(annotations.get(index).unwrap_or_default().to_string());
        writer.write_record(&record).map_err(write_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MotionError::Write(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| MotionError::Write(e.to_string()))?;
    Ok(Some(text))
}
