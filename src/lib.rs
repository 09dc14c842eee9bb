//! ndpack - NdArray wire codec and admin API client
//!
//! Packs dense matrices into a flat, self-describing buffer (an [`NdArray`])
//! for exchange with a remote vector service, and unpacks them again.
//!
//! # Features
//!
//! - `float32` matrices as little-endian IEEE-754, bit-exact round trips
//! - Fixed-width `|S<N>` byte strings, zero-padded on the right
//! - Single-row matrices collapse to a vector shape `[cols]`
//! - Strict decoding: dtype, rank and buffer length are checked up front
//! - Serde wire form `{ "data": <base64>, "shape", "dtype" }`
//! - A typed [`admin`] client over injected transport and token collaborators
//!
//! # Example
//!
//! ```rust
//! use ndpack::{decode_f32, decode_strings, encode_f32, encode_strings_fixed};
//!
//! let arr = encode_f32(&[vec![1.0f32, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(arr.shape, vec![2, 2]);
//! assert_eq!(arr.dtype, "float32");
//! assert_eq!(decode_f32(&arr).unwrap(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
//!
//! let names = encode_strings_fixed(&[["ab", "cde"]], 4).unwrap();
//! assert_eq!(names.data, b"ab\0\0cde\0");
//! assert_eq!(decode_strings(&names).unwrap(), vec![vec!["ab", "cde"]]);
//! ```

pub mod admin;
pub mod error;
pub mod parser;
pub mod types;
pub mod wire;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use error::{BoxError, ClientError, NdArrayError};
pub use parser::{decode_byte_strings, decode_f32, decode_strings, matrix_dims};
pub use types::{DType, FIXED_BYTES_PREFIX, FLOAT32_TAG, NdArray};
pub use writer::{encode_f32, encode_strings, encode_strings_fixed};
