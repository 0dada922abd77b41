//! Schema-level decoding and encoding.
//!
//! Two fixed record shapes exist: the flat body (scalars and arrays in
//! positional order) and the graph body (named graphs of adjacency lists).
//! The caller picks the shape, either with a [`Schema`] value or by calling
//! the typed entry directly; the variant is never inferred from the data.
//!
//! Every entry point decodes from position zero and then requires the input
//! to be fully consumed, so schema mismatches and padded inputs surface as
//! [`DecodeError::TrailingData`] instead of silently truncating.

mod flat;
mod graph;

use crate::wire::error::DecodeError;
use crate::wire::reader::WireReader;
use crate::wire::writer::WireWriter;
use crate::{Body, FlatBody, GraphBody};

use serde::{Deserialize, Serialize};

/// Caller-selected schema variant.
///
/// # Examples
/// ```
/// use recdec_core::Schema;
///
/// assert_eq!(Schema::Flat.as_str(), "flat");
/// assert_eq!(Schema::Graph.as_str(), "graph");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    Flat,
    Graph,
}

impl Schema {
    pub fn as_str(self) -> &'static str {
        match self {
            Schema::Flat => "flat",
            Schema::Graph => "graph",
        }
    }
}

/// Decodes a full input buffer under the given schema.
///
/// # Examples
/// ```
/// use recdec_core::{Body, Schema, decode};
///
/// // numbers = [], z = false, str_array = [], int_array = []
/// let body = decode(&[0x00, 0x00, 0x00, 0x00], Schema::Flat)?;
/// assert!(matches!(body, Body::Flat(_)));
/// # Ok::<(), recdec_core::DecodeError>(())
/// ```
pub fn decode(payload: &[u8], schema: Schema) -> Result<Body, DecodeError> {
    match schema {
        Schema::Flat => decode_flat(payload).map(Body::Flat),
        Schema::Graph => decode_graph(payload).map(Body::Graph),
    }
}

/// Decodes a flat body, requiring the buffer to be fully consumed.
pub fn decode_flat(payload: &[u8]) -> Result<FlatBody, DecodeError> {
    let mut reader = WireReader::new(payload);
    let body = flat::parse_flat_body(&mut reader)?;
    finish(&reader)?;
    Ok(body)
}

/// Decodes a graph body, requiring the buffer to be fully consumed.
pub fn decode_graph(payload: &[u8]) -> Result<GraphBody, DecodeError> {
    let mut reader = WireReader::new(payload);
    let body = graph::parse_graph_body(&mut reader)?;
    finish(&reader)?;
    Ok(body)
}

fn finish(reader: &WireReader<'_>) -> Result<(), DecodeError> {
    let remaining = reader.remaining();
    if remaining > 0 {
        return Err(DecodeError::TrailingData { remaining });
    }
    Ok(())
}

/// Encodes a body with the wire layout its decoder expects.
pub fn encode(body: &Body) -> Vec<u8> {
    match body {
        Body::Flat(flat) => encode_flat(flat),
        Body::Graph(graph) => encode_graph(graph),
    }
}

pub fn encode_flat(body: &FlatBody) -> Vec<u8> {
    let mut writer = WireWriter::new();
    flat::write_flat_body(&mut writer, body);
    writer.into_bytes()
}

pub fn encode_graph(body: &GraphBody) -> Vec<u8> {
    let mut writer = WireWriter::new();
    graph::write_graph_body(&mut writer, body);
    writer.into_bytes()
}
