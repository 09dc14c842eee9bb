//! float32 element parsing

/// Read consecutive little-endian f32 values in buffer order.
///
/// Callers check that `data.len()` is a multiple of 4.
pub fn read_f32(data: &[u8]) -> Vec<f32> {
    data.chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}
