use thiserror::Error;

/// Errors returned by wire-level reads and schema decoding.
///
/// Every failure is fail-fast: the first error aborts the whole decode and
/// no partially built record is ever returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("read past end of input: need {needed} bytes, got {actual}")]
    OutOfBounds { needed: usize, actual: usize },
    #[error("malformed varint: unterminated or overlong encoding")]
    MalformedInt,
    #[error("malformed boolean byte: {value}")]
    MalformedBool { value: u8 },
    #[error("malformed string length: {length}")]
    MalformedString { length: i64 },
    #[error("negative sequence count: {count}")]
    NegativeCount { count: i64 },
    #[error("invalid UTF-8 in string: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),
    #[error("{remaining} unconsumed bytes after decode")]
    TrailingData { remaining: usize },
}
