use crate::core::data::pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
use std::io::Write;
use std::path::Path;

/// Writes the buffer as a binary P6 PPM, dropping the alpha channel (the
/// engine only ever produces opaque pixels).
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    writeln!(file, "P6")?;
    writeln!(file, "{} {}", buffer.width(), buffer.height())?;
    writeln!(file, "255")?;

    for quad in buffer.data().chunks_exact(BYTES_PER_PIXEL) {
        file.write_all(&quad[..3])?;
    }

    Ok(())
}
