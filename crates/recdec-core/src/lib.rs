//! recdec core library: schema-aware structural decoding.
//!
//! This crate implements the decode pipeline used by the CLI: the `source`
//! module materializes input bytes, the wire layer (reader/writer/layout)
//! provides primitive and sequence codecs, schema parsers assemble typed
//! records, and the report layer derives deterministic consumer totals.
//! Decoding is a single-pass recursive descent over a forward-only cursor;
//! all I/O is isolated in `source`.
//!
//! Invariants:
//! - Decoded sequences preserve serialized order exactly.
//! - The first wire error aborts the decode; no partial body escapes.
//! - Inputs must be fully consumed; trailing bytes are an error.
//! - A decoded body is exclusively owned by the caller and never mutated.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use recdec_core::{Schema, report_file};
//!
//! let report = report_file(Path::new("body.bin"), Schema::Flat)?;
//! println!("report version: {}", report.report_version);
//! # Ok::<(), recdec_core::ReportError>(())
//! ```

use serde::{Deserialize, Serialize};

mod report;
mod schema;
mod source;
mod wire;

pub use report::{ReportError, build_report, report_file, summarize};
pub use schema::{Schema, decode, decode_flat, decode_graph, encode, encode_flat, encode_graph};
pub use source::{SourceError, read_input};
pub use wire::error::DecodeError;

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the caller does not stamp the report.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// A fully decoded record, one of the two fixed schema variants.
///
/// Serialized untagged: the variant is identified by its fields, while the
/// schema selector travels separately (see [`Report::schema`]).
///
/// # Examples
/// ```
/// use recdec_core::{Body, Schema, decode};
///
/// let body = decode(&[0x00], Schema::Graph)?;
/// assert!(matches!(body, Body::Graph(_)));
/// # Ok::<(), recdec_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    Flat(FlatBody),
    Graph(GraphBody),
}

/// Flat-variant body: scalars and arrays in fixed positional order.
///
/// # Examples
/// ```
/// use recdec_core::{FlatBody, decode_flat, encode_flat};
///
/// let body = FlatBody {
///     numbers: vec![3, -1, 4, 1, 5],
///     z: true,
///     str_array: vec!["ab".to_string()],
///     int_array: vec![],
/// };
/// let decoded = decode_flat(&encode_flat(&body))?;
/// assert_eq!(decoded.numbers, body.numbers);
/// # Ok::<(), recdec_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatBody {
    /// Ordered signed integers; consumers sum these positionally.
    pub numbers: Vec<i64>,
    /// Single strict boolean.
    pub z: bool,
    /// Ordered strings, each its own length-prefixed byte run.
    pub str_array: Vec<String>,
    /// Second ordered integer sequence.
    pub int_array: Vec<i64>,
}

/// Graph-variant body: an ordered collection of named graphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphBody {
    pub graphs: Vec<Graph>,
}

/// A named graph with its adjacency list in serialized order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    pub name: String,
    pub adjacencies: Vec<Adjacency>,
}

/// One vertex and its neighbor identifiers.
///
/// Both sides are opaque integers: nothing validates them as indices into
/// any other sequence, and no in-memory edges are built from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adjacency {
    pub vertex: i64,
    pub neighbors: Vec<i64>,
}

/// Decode report with deterministic field ordering.
///
/// # Examples
/// ```
/// use recdec_core::{Body, FlatBody, Schema, build_report};
///
/// let body = Body::Flat(FlatBody {
///     numbers: vec![1, 2],
///     z: false,
///     str_array: vec![],
///     int_array: vec![],
/// });
/// let report = build_report("body.bin", 7, Schema::Flat, body);
/// assert_eq!(report.report_version, recdec_core::REPORT_VERSION);
/// assert_eq!(report.schema, "flat");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the wire format version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Input file metadata.
    pub input: InputInfo,
    /// Schema selector the decode ran under ("flat" or "graph").
    pub schema: String,
    /// The decoded record.
    pub body: Body,
    /// Derived consumer totals.
    pub summary: Summary,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "recdec").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input file metadata embedded in reports.
///
/// # Examples
/// ```
/// use recdec_core::InputInfo;
///
/// let input = InputInfo {
///     path: "body.bin".to_string(),
///     bytes: 16,
/// };
/// assert_eq!(input.bytes, 16);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Derived totals for one decoded body.
///
/// Serialized untagged: the flat summary is an object, the graph summary a
/// per-graph list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Summary {
    Flat(FlatSummary),
    Graph(Vec<GraphTotals>),
}

/// Totals over a flat body, computed in element order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatSummary {
    /// Wrapping sum of `numbers`.
    pub numbers_total: i64,
    /// The decoded boolean, verbatim.
    pub z: bool,
    /// Number of elements in `str_array`.
    pub strings: u64,
    /// Wrapping sum of `int_array`.
    pub int_array_total: i64,
}

/// Per-adjacency totals for one graph, in adjacency order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphTotals {
    /// The graph's name.
    pub name: String,
    /// `vertex + sum(neighbors)` for each adjacency, wrapping.
    pub adjacency_totals: Vec<i64>,
}
