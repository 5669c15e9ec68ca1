//! Export of annotated frame data.

pub mod csv_export;

pub use csv_export::{export_annotated_csv, header_union};
