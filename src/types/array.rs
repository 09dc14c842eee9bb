//! NdArray value type

use serde::{Deserialize, Serialize};

/// Self-describing flat buffer: row-major element bytes, shape and dtype tag.
///
/// The dtype is kept as the raw tag so values received over the wire can be
/// held as-is; tags are validated by the decoders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NdArray {
    #[serde(with = "crate::wire::base64_bytes")]
    pub data: Vec<u8>,
    pub shape: Vec<u32>,
    pub dtype: String,
}

impl NdArray {
    pub fn new(data: Vec<u8>, shape: Vec<u32>, dtype: impl Into<String>) -> Self {
        Self {
            data,
            shape,
            dtype: dtype.into(),
        }
    }

    /// Total number of elements
    pub fn num_elements(&self) -> u64 {
        self.shape.iter().map(|&d| d as u64).product()
    }
}
