// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometric scaling — bound a raster to a maximum dimension, preserving
// aspect ratio. Used both to cap the live-processing cost and to produce
// thumbnails of captured stills.

use image::imageops::{self, FilterType};
use scanwerk_core::raster::Raster;
use tracing::debug;

use crate::interop;

/// Downscale so the longer side equals `max_dimension`.
///
/// If both dimensions already fit, the input is returned unchanged — callers
/// must not assume a fresh allocation. Otherwise the shorter side is scaled
/// by the same ratio and floor-rounded (never below 1 px), so the aspect
/// ratio survives within integer rounding. Resampling is bilinear; at the
/// scale factors in play (≤ ~4×) that is visually smooth.
pub fn resize(raster: Raster, max_dimension: u32) -> Raster {
    let width = raster.width();
    let height = raster.height();

    if width <= max_dimension && height <= max_dimension {
        return raster;
    }

    let longer = width.max(height) as u64;
    let scale_side = |side: u32| -> u32 {
        ((side as u64 * max_dimension as u64) / longer).max(1) as u32
    };
    let new_width = scale_side(width);
    let new_height = scale_side(height);

    debug!(
        from_w = width,
        from_h = height,
        to_w = new_width,
        to_h = new_height,
        "downscaling raster"
    );

    let img = interop::to_rgba_image(&raster);
    let resized = imageops::resize(&img, new_width, new_height, FilterType::Triangle);
    interop::from_rgba_image(&resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanwerk_core::raster;

    #[test]
    fn identity_when_within_bounds() {
        let raster = Raster::filled(320, 240, raster::pack(255, 10, 20, 30));
        let before = raster.clone();
        let out = resize(raster, 480);
        assert_eq!(out, before);
    }

    #[test]
    fn longer_side_becomes_max_dimension() {
        let raster = Raster::new(640, 480);
        let out = resize(raster, 480);
        assert_eq!(out.width(), 480);
        assert_eq!(out.height(), 360);
    }

    #[test]
    fn portrait_orientation_scales_height() {
        let raster = Raster::new(480, 640);
        let out = resize(raster, 480);
        assert_eq!(out.width(), 360);
        assert_eq!(out.height(), 480);
    }

    #[test]
    fn aspect_ratio_preserved_within_rounding() {
        let raster = Raster::new(633, 475);
        let out = resize(raster, 240);
        let in_ratio = 633.0 / 475.0;
        let out_ratio = out.width() as f64 / out.height() as f64;
        let tolerance = 1.0 / out.width().min(out.height()) as f64;
        assert!((in_ratio - out_ratio).abs() <= tolerance);
    }

    #[test]
    fn degenerate_strip_never_collapses_to_zero() {
        let raster = Raster::new(2000, 1);
        let out = resize(raster, 100);
        assert_eq!(out.width(), 100);
        assert_eq!(out.height(), 1);
    }

    #[test]
    fn flat_input_stays_flat_through_resampling() {
        let gray = raster::pack(255, 128, 128, 128);
        let raster = Raster::filled(640, 480, gray);
        let out = resize(raster, 480);
        assert!(out.pixels().iter().all(|&px| px == gray));
    }
}
