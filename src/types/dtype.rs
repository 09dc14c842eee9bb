//! Element types for NdArray buffers

use crate::error::NdArrayError;
use std::fmt;
use std::str::FromStr;

/// Tag for 4-byte little-endian IEEE-754 floats
pub const FLOAT32_TAG: &str = "float32";

/// Prefix of fixed-width byte string tags (`|S<N>`)
pub const FIXED_BYTES_PREFIX: &str = "|S";

/// Element encoding described by a dtype tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    /// `float32`
    Float32,
    /// `|S<N>`: zero-padded byte strings of exactly N bytes
    FixedBytes(usize),
}

impl DType {
    /// Size in bytes of a single element
    pub fn element_size(self) -> usize {
        match self {
            DType::Float32 => 4,
            DType::FixedBytes(width) => width,
        }
    }

    /// Parse a `|S<N>` tag.
    ///
    /// Tags without the `|S` prefix are a [`NdArrayError::TypeMismatch`];
    /// a prefix followed by anything but a positive integer is a
    /// [`NdArrayError::MalformedDtype`].
    pub fn parse_fixed_bytes(tag: &str) -> Result<usize, NdArrayError> {
        let digits = tag
            .strip_prefix(FIXED_BYTES_PREFIX)
            .ok_or_else(|| NdArrayError::TypeMismatch {
                expected: "|S<N>",
                actual: tag.to_string(),
            })?;

        // usize::from_str accepts a leading '+', the tag grammar does not
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NdArrayError::MalformedDtype {
                tag: tag.to_string(),
            });
        }

        match digits.parse::<usize>() {
            Ok(width) if width > 0 => Ok(width),
            _ => Err(NdArrayError::MalformedDtype {
                tag: tag.to_string(),
            }),
        }
    }
}

impl FromStr for DType {
    type Err = NdArrayError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag == FLOAT32_TAG {
            return Ok(DType::Float32);
        }
        match DType::parse_fixed_bytes(tag) {
            Ok(width) => Ok(DType::FixedBytes(width)),
            Err(NdArrayError::TypeMismatch { .. }) => Err(NdArrayError::TypeMismatch {
                expected: "float32 or |S<N>",
                actual: tag.to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::Float32 => f.write_str(FLOAT32_TAG),
            DType::FixedBytes(width) => write!(f, "{}{}", FIXED_BYTES_PREFIX, width),
        }
    }
}
