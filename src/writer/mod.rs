//! Encoding of row matrices into NdArrays

mod float;
mod string;

use crate::error::NdArrayError;
use crate::types::{DType, NdArray};

use float::write_f32_rows;
use string::write_fixed_width;

/// Encode a rectangular f32 matrix as a `float32` NdArray.
///
/// A single row collapses to a vector shape `[cols]`; two or more rows give
/// `[rows, cols]`.
pub fn encode_f32<R: AsRef<[f32]>>(rows: &[R]) -> Result<NdArray, NdArrayError> {
    let cols = check_rectangular(rows.iter().map(|r| r.as_ref().len()))?;
    let shape = matrix_shape(rows.len(), cols)?;

    let mut data = Vec::with_capacity(rows.len() * cols * DType::Float32.element_size());
    write_f32_rows(&mut data, rows)?;

    Ok(NdArray::new(data, shape, DType::Float32.to_string()))
}

/// Encode a rectangular string matrix as `|S<width>`, padding each element
/// with zero bytes.
///
/// Elements are taken as raw bytes, so both text and byte strings are
/// accepted. Trailing zero bytes in an element do not survive decoding.
pub fn encode_strings_fixed<R, S>(rows: &[R], width: usize) -> Result<NdArray, NdArrayError>
where
    R: AsRef<[S]>,
    S: AsRef<[u8]>,
{
    let dtype = DType::FixedBytes(width);
    if width == 0 {
        return Err(NdArrayError::MalformedDtype {
            tag: dtype.to_string(),
        });
    }

    let cols = check_rectangular(rows.iter().map(|r| r.as_ref().len()))?;
    let shape = matrix_shape(rows.len(), cols)?;

    for (row, items) in rows.iter().enumerate() {
        for (col, item) in items.as_ref().iter().enumerate() {
            let len = item.as_ref().len();
            if len > width {
                return Err(NdArrayError::StringTooWide {
                    row,
                    col,
                    len,
                    width,
                });
            }
        }
    }

    let mut data = Vec::with_capacity(rows.len() * cols * width);
    for items in rows {
        for item in items.as_ref() {
            write_fixed_width(&mut data, item.as_ref(), width)?;
        }
    }

    Ok(NdArray::new(data, shape, dtype.to_string()))
}

/// Encode a rectangular string matrix, sizing the element width to the
/// longest element (at least one byte).
pub fn encode_strings<R, S>(rows: &[R]) -> Result<NdArray, NdArrayError>
where
    R: AsRef<[S]>,
    S: AsRef<[u8]>,
{
    let width = rows
        .iter()
        .flat_map(|r| r.as_ref().iter().map(|s| s.as_ref().len()))
        .max()
        .unwrap_or(0)
        .max(1);
    encode_strings_fixed(rows, width)
}

/// Column count shared by every row
fn check_rectangular(mut lens: impl Iterator<Item = usize>) -> Result<usize, NdArrayError> {
    let expected = lens.next().ok_or(NdArrayError::EmptyMatrix)?;
    for (i, actual) in lens.enumerate() {
        if actual != expected {
            return Err(NdArrayError::InconsistentRows {
                row: i + 1,
                expected,
                actual,
            });
        }
    }
    Ok(expected)
}

/// `[cols]` for a single row, `[rows, cols]` otherwise
pub(crate) fn matrix_shape(rows: usize, cols: usize) -> Result<Vec<u32>, NdArrayError> {
    let to_dim =
        |dim: usize| u32::try_from(dim).map_err(|_| NdArrayError::DimensionOverflow { dim });
    if rows == 1 {
        Ok(vec![to_dim(cols)?])
    } else {
        Ok(vec![to_dim(rows)?, to_dim(cols)?])
    }
}
