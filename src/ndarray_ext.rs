//! ndarray integration for NdArray buffers
//!
//! Conversions between 2D `ndarray` arrays and the wire NdArray, with the same
//! shape rules as the row-based codec: a single-row array encodes with a
//! vector shape, and a vector shape decodes to a `(1, cols)` array.
//!
//! Enable with the `ndarray` feature flag.

use crate::error::NdArrayError;
use crate::parser::{f32_elements, string_elements};
use crate::types::{DType, NdArray};
use crate::writer::{encode_strings_fixed, matrix_shape};
use ndarray::{Array2, ArrayView2, Axis};

impl NdArray {
    /// Encode a 2D f32 array as `float32`.
    ///
    /// Non-contiguous arrays are accepted; elements are written in logical
    /// row-major order.
    pub fn from_array2_f32(arr: ArrayView2<'_, f32>) -> Result<Self, NdArrayError> {
        let (rows, cols) = arr.dim();
        if rows == 0 {
            return Err(NdArrayError::EmptyMatrix);
        }
        let shape = matrix_shape(rows, cols)?;

        let data: Vec<u8> = arr.iter().flat_map(|f| f.to_le_bytes()).collect();
        Ok(NdArray::new(data, shape, DType::Float32.to_string()))
    }

    /// Encode a 2D string array as `|S<width>`
    pub fn from_array2_strings<S: AsRef<[u8]>>(
        arr: ArrayView2<'_, S>,
        width: usize,
    ) -> Result<Self, NdArrayError> {
        let rows: Vec<Vec<&[u8]>> = arr
            .axis_iter(Axis(0))
            .map(|row| row.into_iter().map(|s| s.as_ref()).collect())
            .collect();
        encode_strings_fixed(&rows, width)
    }

    /// Decode a `float32` array into a `(rows, cols)` ndarray
    pub fn to_array2_f32(&self) -> Result<Array2<f32>, NdArrayError> {
        let (dims, elements) = f32_elements(self)?;
        into_array2(dims, elements)
    }

    /// Decode a `|S<N>` array into a `(rows, cols)` ndarray of strings
    pub fn to_array2_strings(&self) -> Result<Array2<String>, NdArrayError> {
        let (dims, elements) = string_elements(self)?;
        into_array2(dims, elements)
    }
}

fn into_array2<T>(
    (rows, cols): (usize, usize),
    elements: Vec<T>,
) -> Result<Array2<T>, NdArrayError> {
    Array2::from_shape_vec((rows, cols), elements).map_err(|_| NdArrayError::DimensionOverflow {
        dim: rows.max(cols),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::decode_f32;
    use crate::writer::encode_f32;
    use ndarray::array;

    #[test]
    fn test_roundtrip_matrix_f32() {
        let arr = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let nd = NdArray::from_array2_f32(arr.view()).unwrap();
        assert_eq!(nd.shape, vec![2, 3]);
        assert_eq!(nd.to_array2_f32().unwrap(), arr);
    }

    #[test]
    fn test_single_row_collapses_shape() {
        let arr = array![[5.5f32, 6.5]];
        let nd = NdArray::from_array2_f32(arr.view()).unwrap();
        assert_eq!(nd.shape, vec![2]);
        assert_eq!(nd.to_array2_f32().unwrap(), arr);
    }

    #[test]
    fn test_matches_row_encoder() {
        let arr = array![[1.0f32, 2.0], [3.0, 4.0]];
        let from_nd = NdArray::from_array2_f32(arr.view()).unwrap();
        let from_rows = encode_f32(&[vec![1.0f32, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(from_nd, from_rows);
    }

    #[test]
    fn test_transposed_view_written_in_logical_order() {
        let arr = array![[1.0f32, 2.0], [3.0, 4.0]];
        let nd = NdArray::from_array2_f32(arr.t()).unwrap();
        assert_eq!(decode_f32(&nd).unwrap(), vec![vec![1.0, 3.0], vec![2.0, 4.0]]);
    }

    #[test]
    fn test_empty_rows_rejected() {
        let arr = Array2::<f32>::zeros((0, 3));
        assert!(matches!(
            NdArray::from_array2_f32(arr.view()),
            Err(NdArrayError::EmptyMatrix)
        ));
    }

    #[test]
    fn test_dtype_mismatch_error() {
        let nd = NdArray::new(vec![0u8; 8], vec![2], "|S4");
        assert!(matches!(
            nd.to_array2_f32(),
            Err(NdArrayError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_columns_decode_without_allocating_rows() {
        let nd = NdArray::new(vec![], vec![u32::MAX, 0], "float32");
        let arr = nd.to_array2_f32().unwrap();
        assert_eq!(arr.dim(), (u32::MAX as usize, 0));
    }

    #[test]
    fn test_roundtrip_strings() {
        let arr = array![["ab".to_string(), "cde".to_string()]];
        let nd = NdArray::from_array2_strings(arr.view(), 4).unwrap();
        assert_eq!(nd.data, b"ab\0\0cde\0");
        assert_eq!(nd.to_array2_strings().unwrap(), arr);
    }
}
