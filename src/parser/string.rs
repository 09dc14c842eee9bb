//! Fixed-width byte string parsing

/// Drop the zero-byte padding at the end of an element
pub fn strip_padding(chunk: &[u8]) -> &[u8] {
    let end = chunk.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &chunk[..end]
}

/// Split `data` into `width`-byte elements with padding removed.
///
/// The returned slices borrow from `data`, whose length callers check to be a
/// multiple of `width`.
pub fn read_fixed_width(data: &[u8], width: usize) -> Vec<&[u8]> {
    data.chunks_exact(width).map(strip_padding).collect()
}
