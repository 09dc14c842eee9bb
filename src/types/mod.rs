//! Core types for the NdArray wire format

mod array;
mod dtype;

pub use array::NdArray;
pub use dtype::{DType, FIXED_BYTES_PREFIX, FLOAT32_TAG};
