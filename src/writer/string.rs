//! Fixed-width byte string serialization

use std::io::{self, Read, Write};

/// Write one element right-padded with zero bytes to `width`.
///
/// Callers check `bytes.len() <= width` beforehand.
pub fn write_fixed_width<W: Write>(writer: &mut W, bytes: &[u8], width: usize) -> io::Result<()> {
    if bytes.len() > width {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} bytes do not fit in width {}", bytes.len(), width),
        ));
    }
    writer.write_all(bytes)?;
    let padding = (width - bytes.len()) as u64;
    io::copy(&mut io::repeat(0).take(padding), writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_with_zero_bytes() {
        let mut buf = Vec::new();
        write_fixed_width(&mut buf, b"ab", 4).unwrap();
        write_fixed_width(&mut buf, b"cde", 4).unwrap();
        assert_eq!(buf, b"ab\0\0cde\0");
    }

    #[test]
    fn test_exact_width_has_no_padding() {
        let mut buf = Vec::new();
        write_fixed_width(&mut buf, b"abcd", 4).unwrap();
        assert_eq!(buf, b"abcd");
    }

    #[test]
    fn test_empty_string_is_all_padding() {
        let mut buf = Vec::new();
        write_fixed_width(&mut buf, b"", 3).unwrap();
        assert_eq!(buf, [0, 0, 0]);
    }

    #[test]
    fn test_wide_padding_is_all_zeros() {
        let mut buf = Vec::new();
        write_fixed_width(&mut buf, b"id", 20_000).unwrap();
        assert_eq!(buf.len(), 20_000);
        assert_eq!(&buf[..2], b"id");
        assert!(buf[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_too_wide_is_rejected() {
        let mut buf = Vec::new();
        let err = write_fixed_width(&mut buf, b"abcde", 4).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(buf.is_empty());
    }
}
