//! Wire-level reads and writes.
//!
//! The reader is a forward-only cursor exposing the primitive decoders
//! (varint, boolean, string) and the single generic sequence decoder that
//! every repeated field reuses. The writer is its exact inverse and exists
//! for tests and fixture generation. Encoding constants live in `layout`.
//!
//! All validation is strict: bad continuation bits, out-of-range booleans,
//! negative lengths, and oversized counts each map to a distinct
//! [`error::DecodeError`] variant.

pub mod error;
pub mod layout;
pub mod reader;
pub mod writer;
