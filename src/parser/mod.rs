//! Decoding of NdArrays back into row matrices
//!
//! Every decoder validates the dtype tag and the buffer length against the
//! shape before reading a single element, so a bad array is rejected as a
//! whole rather than partially decoded.

mod float;
mod string;

use crate::error::NdArrayError;
use crate::types::{DType, FLOAT32_TAG, NdArray};

use float::read_f32;
use string::read_fixed_width;

/// Row and column counts of a vector (`[cols]`) or matrix (`[rows, cols]`) shape
pub fn matrix_dims(shape: &[u32]) -> Result<(usize, usize), NdArrayError> {
    match *shape {
        [cols] => Ok((1, cols as usize)),
        [rows, cols] => Ok((rows as usize, cols as usize)),
        _ => Err(NdArrayError::UnsupportedRank { rank: shape.len() }),
    }
}

/// Decode a `float32` NdArray into `rows × cols` floats
pub fn decode_f32(array: &NdArray) -> Result<Vec<Vec<f32>>, NdArrayError> {
    let ((rows, cols), elements) = f32_elements(array)?;
    into_rows(elements, rows, cols)
}

/// Decode a `|S<N>` NdArray into raw byte strings with padding removed
pub fn decode_byte_strings(array: &NdArray) -> Result<Vec<Vec<Vec<u8>>>, NdArrayError> {
    let ((rows, cols), elements) = fixed_width_elements(array)?;
    into_rows(elements.into_iter().map(<[u8]>::to_vec), rows, cols)
}

/// Decode a `|S<N>` NdArray into UTF-8 strings with padding removed
pub fn decode_strings(array: &NdArray) -> Result<Vec<Vec<String>>, NdArrayError> {
    let ((rows, cols), elements) = string_elements(array)?;
    into_rows(elements, rows, cols)
}

/// Dimensions and row-major elements of a `float32` NdArray
pub(crate) fn f32_elements(array: &NdArray) -> Result<((usize, usize), Vec<f32>), NdArrayError> {
    if array.dtype != FLOAT32_TAG {
        return Err(NdArrayError::TypeMismatch {
            expected: FLOAT32_TAG,
            actual: array.dtype.clone(),
        });
    }

    let (rows, cols) = matrix_dims(&array.shape)?;
    check_len(array.data.len(), rows, cols, DType::Float32.element_size())?;
    Ok(((rows, cols), read_f32(&array.data)))
}

/// Dimensions and row-major UTF-8 elements of a `|S<N>` NdArray
pub(crate) fn string_elements(
    array: &NdArray,
) -> Result<((usize, usize), Vec<String>), NdArrayError> {
    let ((rows, cols), elements) = fixed_width_elements(array)?;
    let strings = elements
        .into_iter()
        .enumerate()
        .map(|(i, bytes)| {
            std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|_| NdArrayError::InvalidUtf8 {
                    row: i / cols,
                    col: i % cols,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(((rows, cols), strings))
}

fn fixed_width_elements(array: &NdArray) -> Result<((usize, usize), Vec<&[u8]>), NdArrayError> {
    let width = DType::parse_fixed_bytes(&array.dtype)?;
    let (rows, cols) = matrix_dims(&array.shape)?;
    check_len(array.data.len(), rows, cols, width)?;
    Ok(((rows, cols), read_fixed_width(&array.data, width)))
}

/// Group row-major elements into `rows` rows of `cols`.
///
/// A zero-column shape needs no bytes for any row count, so the outer vector
/// is reserved fallibly.
fn into_rows<T>(
    elements: impl IntoIterator<Item = T>,
    rows: usize,
    cols: usize,
) -> Result<Vec<Vec<T>>, NdArrayError> {
    let mut out = Vec::new();
    out.try_reserve_exact(rows)
        .map_err(|_| NdArrayError::DimensionOverflow { dim: rows })?;

    let mut elements = elements.into_iter();
    for _ in 0..rows {
        out.push(elements.by_ref().take(cols).collect());
    }
    Ok(out)
}

/// Buffer length must be exactly `rows * cols * element_size`
fn check_len(
    actual: usize,
    rows: usize,
    cols: usize,
    element_size: usize,
) -> Result<(), NdArrayError> {
    // No buffer can hold a size that overflows usize
    let expected = rows
        .checked_mul(cols)
        .and_then(|n| n.checked_mul(element_size))
        .unwrap_or(usize::MAX);

    if actual < expected {
        return Err(NdArrayError::BufferUnderflow { expected, actual });
    }
    if actual > expected {
        return Err(NdArrayError::TrailingBytes { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{encode_f32, encode_strings_fixed};

    #[test]
    fn test_dims_vector_is_single_row() {
        assert_eq!(matrix_dims(&[7]).unwrap(), (1, 7));
    }

    #[test]
    fn test_dims_matrix() {
        assert_eq!(matrix_dims(&[2, 3]).unwrap(), (2, 3));
    }

    #[test]
    fn test_dims_other_ranks_rejected() {
        assert!(matches!(
            matrix_dims(&[]),
            Err(NdArrayError::UnsupportedRank { rank: 0 })
        ));
        assert!(matches!(
            matrix_dims(&[1, 2, 3]),
            Err(NdArrayError::UnsupportedRank { rank: 3 })
        ));
    }

    #[test]
    fn test_roundtrip_f32_matrix() {
        let rows = vec![vec![1.0f32, 2.0], vec![3.0, 4.0]];
        let arr = encode_f32(&rows).unwrap();
        assert_eq!(decode_f32(&arr).unwrap(), rows);
    }

    #[test]
    fn test_decode_f32_vector_shape() {
        let arr = encode_f32(&[[5.5f32, 6.5]]).unwrap();
        assert_eq!(decode_f32(&arr).unwrap(), vec![vec![5.5, 6.5]]);
    }

    #[test]
    fn test_decode_f32_rejects_string_dtype() {
        let arr = NdArray::new(vec![0u8; 16], vec![2], "|S8");
        let err = decode_f32(&arr).unwrap_err();
        assert!(matches!(err, NdArrayError::TypeMismatch { expected: "float32", .. }));
    }

    #[test]
    fn test_decode_f32_underflow() {
        let arr = NdArray::new(vec![0u8; 20], vec![2, 3], "float32");
        let err = decode_f32(&arr).unwrap_err();
        assert!(matches!(
            err,
            NdArrayError::BufferUnderflow {
                expected: 24,
                actual: 20
            }
        ));
    }

    #[test]
    fn test_decode_f32_trailing_bytes() {
        let arr = NdArray::new(vec![0u8; 28], vec![2, 3], "float32");
        let err = decode_f32(&arr).unwrap_err();
        assert!(matches!(
            err,
            NdArrayError::TrailingBytes {
                expected: 24,
                actual: 28
            }
        ));
    }

    #[test]
    fn test_decode_f32_zero_rows() {
        let arr = NdArray::new(vec![], vec![0, 4], "float32");
        assert!(decode_f32(&arr).unwrap().is_empty());
    }

    #[test]
    fn test_decode_strings_padded() {
        let arr = NdArray::new(b"ab\0\0cde\0".to_vec(), vec![2], "|S4");
        assert_eq!(
            decode_strings(&arr).unwrap(),
            vec![vec!["ab".to_string(), "cde".to_string()]]
        );
    }

    #[test]
    fn test_roundtrip_strings_matrix() {
        let rows = vec![vec!["x", "yy"], vec!["zzz", ""]];
        let arr = encode_strings_fixed(&rows, 3).unwrap();
        let back = decode_strings(&arr).unwrap();
        assert_eq!(back, vec![vec!["x", "yy"], vec!["zzz", ""]]);
    }

    #[test]
    fn test_decode_strings_rejects_float_dtype() {
        let arr = NdArray::new(vec![0u8; 8], vec![2], "float32");
        let err = decode_strings(&arr).unwrap_err();
        assert!(matches!(err, NdArrayError::TypeMismatch { .. }));
    }

    #[test]
    fn test_decode_strings_rejects_malformed_width() {
        let arr = NdArray::new(vec![0u8; 8], vec![2], "|Sfour");
        let err = decode_strings(&arr).unwrap_err();
        assert!(matches!(err, NdArrayError::MalformedDtype { .. }));
    }

    #[test]
    fn test_decode_strings_underflow() {
        let arr = NdArray::new(vec![0u8; 7], vec![2], "|S4");
        let err = decode_strings(&arr).unwrap_err();
        assert!(matches!(
            err,
            NdArrayError::BufferUnderflow {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_decode_strings_invalid_utf8_reports_position() {
        let arr = NdArray::new(vec![b'a', 0, 0xFF, 0xFE], vec![2, 1], "|S2");
        let err = decode_strings(&arr).unwrap_err();
        assert!(matches!(err, NdArrayError::InvalidUtf8 { row: 1, col: 0 }));
    }

    #[test]
    fn test_decode_byte_strings_keeps_non_utf8() {
        let arr = NdArray::new(vec![0xFF, 0xFE, 0x00], vec![1], "|S3");
        assert_eq!(decode_byte_strings(&arr).unwrap(), vec![vec![vec![0xFF, 0xFE]]]);
    }

    #[test]
    fn test_decode_overflowing_shape_underflows() {
        let arr = NdArray::new(vec![0u8; 4], vec![u32::MAX, u32::MAX], "|S4096");
        assert!(matches!(
            decode_byte_strings(&arr),
            Err(NdArrayError::BufferUnderflow {
                expected: usize::MAX,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_decode_zero_columns_huge_row_count() {
        let arr = NdArray::new(vec![], vec![u32::MAX, 0], "float32");
        match decode_f32(&arr) {
            Ok(rows) => {
                assert_eq!(rows.len(), u32::MAX as usize);
                assert!(rows.iter().all(Vec::is_empty));
            }
            Err(err) => assert!(matches!(err, NdArrayError::DimensionOverflow { .. })),
        }
    }

    #[test]
    fn test_decode_strings_zero_columns() {
        let arr = NdArray::new(vec![], vec![3, 0], "|S4");
        assert_eq!(decode_strings(&arr).unwrap(), vec![Vec::<String>::new(); 3]);
    }
}
