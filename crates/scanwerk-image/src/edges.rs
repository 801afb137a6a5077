// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edge detection — 3×3 Sobel gradient magnitude, inverted so edges render
// dark on a near-white ground (a line-drawing look for the live preview).

use scanwerk_core::raster::{self, Raster};

const OPAQUE_WHITE: u32 = 0xFFFF_FFFF;

/// Detect edges with a 3×3 Sobel operator.
///
/// The intensity sample for each pixel is its low byte (the blue channel),
/// so the input is expected to be pre-desaturated — on a channel-equal gray
/// raster the low byte *is* the intensity. A non-desaturated input still
/// produces defined output, but the response follows the blue channel only.
///
/// For every interior pixel the horizontal and vertical Sobel responses are
/// combined into `magnitude = round(sqrt(gx² + gy²))`, clamped to [0, 255],
/// and written as the opaque gray `255 - magnitude`: strong edges come out
/// dark, flat regions near-white. The outer 1-pixel ring has no full 3×3
/// neighbourhood and is written opaque white, consistent with the
/// flat-region response. Inputs narrower or shorter than 3 px are entirely
/// ring, so they come back all white.
///
/// Pure function of its input: deterministic, allocates its result, mutates
/// nothing.
pub fn detect_edges(raster: &Raster) -> Raster {
    let width = raster.width();
    let height = raster.height();

    let mut out = Raster::filled(width, height, OPAQUE_WHITE);
    if width < 3 || height < 3 {
        return out;
    }

    let w = width as usize;
    let px = raster.pixels();
    let intensity = |x: usize, y: usize| -> i32 { (px[y * w + x] & 0xFF) as i32 };

    for y in 1..height as usize - 1 {
        for x in 1..w - 1 {
            let top_left = intensity(x - 1, y - 1);
            let top_mid = intensity(x, y - 1);
            let top_right = intensity(x + 1, y - 1);
            let mid_left = intensity(x - 1, y);
            let mid_right = intensity(x + 1, y);
            let bot_left = intensity(x - 1, y + 1);
            let bot_mid = intensity(x, y + 1);
            let bot_right = intensity(x + 1, y + 1);

            let gx = (top_right + 2 * mid_right + bot_right) - (top_left + 2 * mid_left + bot_left);
            let gy = (bot_left + 2 * bot_mid + bot_right) - (top_left + 2 * top_mid + top_right);

            let magnitude = (((gx * gx + gy * gy) as f64).sqrt().round() as i32).clamp(0, 255);
            let value = (255 - magnitude) as u8;
            out.set(x as u32, y as u32, raster::pack(255, value, value, value));
        }
    }

    out
}
