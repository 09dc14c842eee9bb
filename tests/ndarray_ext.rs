//! Integration tests for ndarray support
//!
//! These tests move embedding matrices between ndarray and the wire form.

#![cfg(feature = "ndarray")]

use ndarray::{Array2, array, s};
use ndpack::{NdArray, NdArrayError, decode_f32, decode_strings, encode_f32};

// =============================================================================
// Basic ndarray roundtrips
// =============================================================================

#[test]
fn roundtrip_embedding_batch() {
    let batch = Array2::<f32>::from_shape_fn((4, 8), |(i, j)| (i * 8 + j) as f32 * 0.125);
    let wire = NdArray::from_array2_f32(batch.view()).unwrap();

    assert_eq!(wire.shape, vec![4, 8]);
    assert_eq!(wire.data.len(), 4 * 8 * 4);
    assert_eq!(wire.to_array2_f32().unwrap(), batch);
}

#[test]
fn single_query_vector_uses_vector_shape() {
    let query = array![[0.1f32, 0.2, 0.3]];
    let wire = NdArray::from_array2_f32(query.view()).unwrap();
    assert_eq!(wire.shape, vec![3]);

    let back = wire.to_array2_f32().unwrap();
    assert_eq!(back.dim(), (1, 3));
    assert_eq!(back, query);
}

#[test]
fn sliced_view_encodes_selected_elements() {
    let full = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
    let wire = NdArray::from_array2_f32(full.slice(s![1.., ..2])).unwrap();
    assert_eq!(
        decode_f32(&wire).unwrap(),
        vec![vec![4.0, 5.0], vec![7.0, 8.0]]
    );
}

// =============================================================================
// Interop with the row codec and JSON
// =============================================================================

#[test]
fn rows_encoded_array_decodes_to_ndarray() {
    let wire = encode_f32(&[vec![1.0f32, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
    let json = serde_json::to_string(&wire).unwrap();
    let received: NdArray = serde_json::from_str(&json).unwrap();

    let matrix = received.to_array2_f32().unwrap();
    assert_eq!(matrix, array![[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]]);
}

#[test]
fn string_matrix_roundtrip() {
    let ids = array![
        ["doc-1".to_string(), "doc-2".to_string()],
        ["doc-10".to_string(), "".to_string()]
    ];
    let wire = NdArray::from_array2_strings(ids.view(), 8).unwrap();
    assert_eq!(wire.dtype, "|S8");
    assert_eq!(wire.shape, vec![2, 2]);
    assert_eq!(
        decode_strings(&wire).unwrap(),
        vec![vec!["doc-1", "doc-2"], vec!["doc-10", ""]]
    );
    assert_eq!(wire.to_array2_strings().unwrap(), ids);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn underflow_reported_for_ndarray_decode() {
    let wire = NdArray::new(vec![0u8; 20], vec![2, 3], "float32");
    assert!(matches!(
        wire.to_array2_f32(),
        Err(NdArrayError::BufferUnderflow {
            expected: 24,
            actual: 20
        })
    ));
}

#[test]
fn string_too_wide_for_width() {
    let ids = array![["much-too-long".to_string()]];
    assert!(matches!(
        NdArray::from_array2_strings(ids.view(), 4),
        Err(NdArrayError::StringTooWide { .. })
    ));
}
