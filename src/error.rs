//! Error types for ndpack

use std::io;
use thiserror::Error;

/// Boxed error returned by injected collaborators ([`Transport`], [`TokenSource`]).
///
/// [`Transport`]: crate::admin::Transport
/// [`TokenSource`]: crate::admin::TokenSource
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while encoding or decoding an [`NdArray`](crate::NdArray)
#[derive(Debug, Error)]
pub enum NdArrayError {
    /// Decode requested for an element kind the dtype tag does not describe
    #[error("dtype mismatch: expected {expected}, got {actual:?}")]
    TypeMismatch {
        expected: &'static str,
        actual: String,
    },
    /// String dtype tag is not `|S<positive integer>`
    #[error("malformed dtype tag {tag:?}, expected |S<positive integer>")]
    MalformedDtype { tag: String },
    /// Buffer holds fewer bytes than the shape requires
    #[error("buffer underflow: shape requires {expected} bytes, got {actual}")]
    BufferUnderflow { expected: usize, actual: usize },
    /// Buffer holds more bytes than the shape requires
    #[error("trailing bytes: shape requires {expected} bytes, got {actual}")]
    TrailingBytes { expected: usize, actual: usize },
    /// Source matrix is not rectangular
    #[error("row {row} has {actual} columns, expected {expected}")]
    InconsistentRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Source matrix has no rows
    #[error("cannot encode a matrix with no rows")]
    EmptyMatrix,
    /// Shape is neither a vector nor a matrix
    #[error("unsupported shape rank {rank}, expected 1 or 2")]
    UnsupportedRank { rank: usize },
    /// A dimension does not fit the wire types, or its rows cannot be allocated
    #[error("dimension {dim} does not fit in the wire format")]
    DimensionOverflow { dim: usize },
    /// String is longer than the fixed element width
    #[error("string at [{row}, {col}] is {len} bytes, wider than |S{width}")]
    StringTooWide {
        row: usize,
        col: usize,
        len: usize,
        width: usize,
    },
    /// String element is not valid UTF-8
    #[error("string at [{row}, {col}] is not valid UTF-8")]
    InvalidUtf8 { row: usize, col: usize },
    /// Writer failure while building the buffer
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors raised by the administrative API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Argument rejected before any request was sent
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Token source failed to produce a bearer token
    #[error("failed to obtain access token")]
    Token(#[source] BoxError),
    /// Transport failed to complete the round trip
    #[error("transport error")]
    Transport(#[source] BoxError),
    /// Server answered with a non-success status
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// Request or response body could not be (de)serialized
    #[error("invalid JSON body")]
    Json(#[from] serde_json::Error),
    /// Array payload could not be converted
    #[error(transparent)]
    NdArray(#[from] NdArrayError),
}
