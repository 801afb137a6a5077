// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Interop between the packed-ARGB `Raster` and the `image` crate's buffers.

use image::{Rgba, RgbaImage};
use scanwerk_core::raster::{self, Raster};

/// Copy a raster into an `RgbaImage` (channel order changes from packed ARGB
/// to byte-wise RGBA).
pub fn to_rgba_image(raster: &Raster) -> RgbaImage {
    let mut img = RgbaImage::new(raster.width(), raster.height());
    for (i, pixel) in img.pixels_mut().enumerate() {
        let px = raster.pixels()[i];
        *pixel = Rgba([
            raster::red(px),
            raster::green(px),
            raster::blue(px),
            raster::alpha(px),
        ]);
    }
    img
}

/// Copy an `RgbaImage` back into a packed-ARGB raster.
pub fn from_rgba_image(img: &RgbaImage) -> Raster {
    let pixels = img
        .pixels()
        .map(|Rgba([r, g, b, a])| raster::pack(*a, *r, *g, *b))
        .collect();
    // Length is width*height by RgbaImage construction.
    Raster::from_pixels(img.width(), img.height(), pixels)
        .expect("RgbaImage dimensions always match its pixel count")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_pixels() {
        let mut raster = Raster::new(3, 2);
        raster.set(0, 0, raster::pack(255, 1, 2, 3));
        raster.set(2, 1, raster::pack(128, 200, 100, 50));

        let back = from_rgba_image(&to_rgba_image(&raster));
        assert_eq!(back, raster);
    }
}
