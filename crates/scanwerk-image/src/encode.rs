// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Still-image output — encode a raster to PNG or JPEG bytes, or write it to
// disk. The full-resolution capture path is independent of the live pipeline
// and shares no state with it; this module owns only the encoded bytes.

use image::ImageFormat;
use scanwerk_core::error::{Result, ScanwerkError};
use scanwerk_core::raster::Raster;
use tracing::debug;

use crate::interop;

/// Encode the raster as PNG bytes.
pub fn to_png_bytes(raster: &Raster) -> Result<Vec<u8>> {
    let img = interop::to_rgba_image(raster);
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    img.write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| ScanwerkError::Image(format!("PNG encoding failed: {}", err)))?;
    debug!(bytes = buffer.len(), "raster encoded to PNG");
    Ok(buffer)
}

/// Encode the raster as JPEG bytes with the given quality (1-100).
///
/// JPEG carries no alpha; the raster is flattened to RGB first.
pub fn to_jpeg_bytes(raster: &Raster, quality: u8) -> Result<Vec<u8>> {
    let rgb = image::DynamicImage::ImageRgba8(interop::to_rgba_image(raster)).to_rgb8();
    let mut buffer = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|err| ScanwerkError::Image(format!("JPEG encoding failed: {}", err)))?;
    debug!(bytes = buffer.len(), quality, "raster encoded to JPEG");
    Ok(buffer)
}

/// Write the raster to a file; the format is inferred from the extension.
pub fn save(raster: &Raster, path: impl AsRef<std::path::Path>) -> Result<()> {
    let img = interop::to_rgba_image(raster);
    img.save(path.as_ref()).map_err(|err| {
        ScanwerkError::Image(format!(
            "failed to save image to {}: {}",
            path.as_ref().display(),
            err
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanwerk_core::raster;

    #[test]
    fn png_bytes_decode_back_to_same_pixels() {
        let mut input = Raster::filled(5, 4, raster::pack(255, 10, 20, 30));
        input.set(2, 2, raster::pack(255, 200, 150, 100));

        let bytes = to_png_bytes(&input).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(interop::from_rgba_image(&decoded), input);
    }

    #[test]
    fn jpeg_bytes_are_valid_and_sized_right() {
        let input = Raster::filled(16, 16, raster::pack(255, 128, 128, 128));
        let bytes = to_jpeg_bytes(&input, 95).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 16);
    }

    #[test]
    fn save_writes_a_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        let input = Raster::filled(8, 8, raster::pack(255, 1, 2, 3));
        save(&input, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(interop::from_rgba_image(&decoded), input);
    }
}
