//! float32 element serialization

use std::io::{self, Write};

/// Write rows of f32 as little-endian IEEE-754, row-major
pub fn write_f32_rows<W: Write, R: AsRef<[f32]>>(writer: &mut W, rows: &[R]) -> io::Result<()> {
    for row in rows {
        for value in row.as_ref() {
            writer.write_all(&value.to_le_bytes())?;
        }
    }
    Ok(())
}
