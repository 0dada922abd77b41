use std::path::Path;

use thiserror::Error;

use crate::schema::{Schema, decode};
use crate::source::{SourceError, read_input};
use crate::wire::error::DecodeError;
use crate::{Body, DEFAULT_GENERATED_AT, InputInfo, REPORT_VERSION, Report, ToolInfo};

mod summary;

pub use summary::summarize;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Loads a serialized input file, decodes it under `schema`, and assembles
/// the full report.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use recdec_core::{Schema, report_file};
///
/// let report = report_file(Path::new("body.bin"), Schema::Flat)?;
/// println!("report version: {}", report.report_version);
/// # Ok::<(), recdec_core::ReportError>(())
/// ```
pub fn report_file(path: &Path, schema: Schema) -> Result<Report, ReportError> {
    let payload = read_input(path)?;
    let body = decode(&payload, schema)?;
    Ok(build_report(
        &path.display().to_string(),
        payload.len() as u64,
        schema,
        body,
    ))
}

/// Builds a report around an already decoded body.
///
/// `generated_at` is left at [`DEFAULT_GENERATED_AT`]; callers that want a
/// real timestamp stamp it themselves.
pub fn build_report(input_path: &str, input_bytes: u64, schema: Schema, body: Body) -> Report {
    let summary = summarize(&body);
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "recdec".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        schema: schema.as_str().to_string(),
        body,
        summary,
    }
}
