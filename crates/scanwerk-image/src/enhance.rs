// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photometric enhancement — desaturation and affine contrast adjustment.
// Two independent, composable operations; the live pipeline applies them in
// sequence with mode-dependent contrast factors.

use scanwerk_core::raster::{self, Raster};

/// Replace every pixel with its luma-equivalent gray.
///
/// Uses Rec. 709 luma weighting (0.2126 R + 0.7152 G + 0.0722 B) applied
/// uniformly to all three colour channels — a full saturation-removal
/// transform, not a single-channel copy. Alpha is preserved.
pub fn desaturate(raster: &Raster) -> Raster {
    let pixels = raster
        .pixels()
        .iter()
        .map(|&px| {
            let luma = 0.2126 * raster::red(px) as f32
                + 0.7152 * raster::green(px) as f32
                + 0.0722 * raster::blue(px) as f32;
            let gray = luma.round().clamp(0.0, 255.0) as u8;
            raster::pack(raster::alpha(px), gray, gray, gray)
        })
        .collect();

    Raster::from_pixels(raster.width(), raster.height(), pixels)
        .expect("mapping preserves pixel count")
}

/// Affine contrast stretch around the channel midpoint 127.5.
///
/// Each colour channel value `v` is remapped to
/// `clamp(factor * v + offset, 0, 255)` with
/// `offset = (-0.5 * factor + 0.5) * 255`, so factor 1.0 is the identity,
/// factors above 1.0 increase contrast and factors below reduce it. Alpha is
/// preserved.
pub fn adjust_contrast(raster: &Raster, factor: f32) -> Raster {
    let offset = (-0.5 * factor + 0.5) * 255.0;
    let remap = |channel: u8| -> u8 {
        (factor * channel as f32 + offset).round().clamp(0.0, 255.0) as u8
    };

    let pixels = raster
        .pixels()
        .iter()
        .map(|&px| {
            raster::pack(
                raster::alpha(px),
                remap(raster::red(px)),
                remap(raster::green(px)),
                remap(raster::blue(px)),
            )
        })
        .collect();

    Raster::from_pixels(raster.width(), raster.height(), pixels)
        .expect("mapping preserves pixel count")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desaturate_equalises_channels() {
        let raster = Raster::filled(4, 4, raster::pack(255, 200, 50, 10));
        let out = desaturate(&raster);
        for &px in out.pixels() {
            let r = raster::red(px);
            assert_eq!(r, raster::green(px));
            assert_eq!(r, raster::blue(px));
            assert_eq!(raster::alpha(px), 255);
        }
    }

    #[test]
    fn desaturate_uses_luma_weighting_not_channel_copy() {
        // Pure green must come out bright, pure blue dark.
        let green = desaturate(&Raster::filled(1, 1, raster::pack(255, 0, 255, 0)));
        let blue = desaturate(&Raster::filled(1, 1, raster::pack(255, 0, 0, 255)));
        assert_eq!(raster::red(green.get(0, 0)), 182); // 0.7152 * 255
        assert_eq!(raster::red(blue.get(0, 0)), 18); // 0.0722 * 255
    }

    #[test]
    fn desaturate_preserves_alpha() {
        let raster = Raster::filled(2, 2, raster::pack(77, 10, 20, 30));
        let out = desaturate(&raster);
        assert!(out.pixels().iter().all(|&px| raster::alpha(px) == 77));
    }

    #[test]
    fn contrast_factor_one_is_identity() {
        let mut raster = Raster::new(16, 1);
        for (i, px) in raster.pixels_mut().iter_mut().enumerate() {
            let v = (i * 16) as u8;
            *px = raster::pack(255, v, v.wrapping_add(3), v.wrapping_add(7));
        }
        let out = adjust_contrast(&raster, 1.0);
        assert_eq!(out.pixels(), raster.pixels());
    }

    #[test]
    fn contrast_stretches_around_midpoint() {
        let raster = Raster::filled(1, 1, raster::pack(255, 64, 128, 192));
        let out = adjust_contrast(&raster, 2.0);
        let px = out.get(0, 0);
        // 2v - 127.5: 64 -> 0.5, 128 -> 128.5, 192 -> 256.5 (clamped).
        assert_eq!(raster::red(px), 1);
        assert_eq!(raster::green(px), 129);
        assert_eq!(raster::blue(px), 255);
    }

    #[test]
    fn low_factor_compresses_towards_midpoint() {
        let raster = Raster::filled(1, 1, raster::pack(255, 0, 255, 128));
        let out = adjust_contrast(&raster, 0.5);
        let px = out.get(0, 0);
        assert_eq!(raster::red(px), 64); // 0.5*0 + 63.75
        assert_eq!(raster::green(px), 191); // 0.5*255 + 63.75
        assert_eq!(raster::blue(px), 128);
    }

    #[test]
    fn contrast_preserves_alpha() {
        let raster = Raster::filled(2, 2, raster::pack(42, 10, 200, 30));
        let out = adjust_contrast(&raster, 1.8);
        assert!(out.pixels().iter().all(|&px| raster::alpha(px) == 42));
    }
}
