// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster — an owned, mutable grid of packed 32-bit ARGB pixels.

use crate::error::{Result, ScanwerkError};

/// A decoded image: packed 32-bit ARGB pixels in row-major order.
///
/// Invariant: `pixels.len() == width * height`, enforced at construction.
/// Pixel `(x, y)` lives at index `y * width + x`. Each pixel packs the
/// channels as `0xAARRGGBB`.
///
/// Every producing operation returns a raster it exclusively owns; there is
/// no implicit sharing between pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Raster {
    /// Allocate a raster filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![pack(255, 0, 0, 0); width as usize * height as usize],
        }
    }

    /// Allocate a raster filled with a single packed pixel value.
    pub fn filled(width: u32, height: u32, pixel: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Wrap an existing pixel buffer, checking the length invariant.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ScanwerkError::Image(format!(
                "pixel buffer length {} does not match {}x{} ({} expected)",
                pixels.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Pixel at `(x, y)`. Panics if out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: u32) {
        self.pixels[y as usize * self.width as usize + x as usize] = pixel;
    }
}

/// Pack ARGB channels into a single pixel value.
#[inline]
pub const fn pack(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[inline]
pub const fn alpha(pixel: u32) -> u8 {
    (pixel >> 24) as u8
}

#[inline]
pub const fn red(pixel: u32) -> u8 {
    (pixel >> 16) as u8
}

#[inline]
pub const fn green(pixel: u32) -> u8 {
    (pixel >> 8) as u8
}

#[inline]
pub const fn blue(pixel: u32) -> u8 {
    pixel as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixels_enforces_length_invariant() {
        assert!(Raster::from_pixels(4, 3, vec![0u32; 12]).is_ok());
        assert!(Raster::from_pixels(4, 3, vec![0u32; 11]).is_err());
        assert!(Raster::from_pixels(4, 3, vec![0u32; 13]).is_err());
    }

    #[test]
    fn pixels_are_row_major() {
        let mut raster = Raster::new(3, 2);
        raster.set(2, 1, 0xFFABCDEF);
        assert_eq!(raster.pixels()[1 * 3 + 2], 0xFFABCDEF);
        assert_eq!(raster.get(2, 1), 0xFFABCDEF);
    }

    #[test]
    fn channel_pack_unpack_round_trip() {
        let px = pack(0x12, 0x34, 0x56, 0x78);
        assert_eq!(px, 0x12345678);
        assert_eq!(alpha(px), 0x12);
        assert_eq!(red(px), 0x34);
        assert_eq!(green(px), 0x56);
        assert_eq!(blue(px), 0x78);
    }

    #[test]
    fn new_fills_opaque_black() {
        let raster = Raster::new(2, 2);
        assert!(raster.pixels().iter().all(|&px| px == 0xFF000000));
    }
}
